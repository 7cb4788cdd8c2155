use crate::{DatasetCache, Db, NewFilm, Table};
use filmes_core::{err, stmt::DocumentId, Result};

use std::sync::Arc;

/// A film that was written to the store, with the table reloaded after it.
#[derive(Debug, Clone)]
pub struct Created {
    pub id: DocumentId,
    pub table: Arc<Table>,
}

/// Validate and write a new film, then reload the dataset.
///
/// A rejected name performs no write. A failed write leaves `cache`
/// untouched. Nothing is retried.
pub async fn create_film(db: &Db, cache: &mut DatasetCache, film: NewFilm) -> Result<Created> {
    if let Err(err) = film.validate() {
        log::warn!("film rejected; {err}");
        return Err(err);
    }

    let id = match db.add(film.to_document()).await {
        Ok(id) => id,
        Err(err) => {
            let err = err.context(err!("writing to collection `{}`", db.collection()));
            log::error!("film write failed; name={:?}; {err}", film.name);
            return Err(err);
        }
    };

    log::info!("film created; id={id}; name={:?}", film.name);

    cache.invalidate();
    let table = cache.get(db).await?;

    Ok(Created { id, table })
}
