use crate::{Db, Table};
use filmes_core::{err, Result};

use std::sync::Arc;

/// Memoizes the film table.
///
/// The first `get` (and the first after `invalidate`) reads the whole
/// collection. Every other call hands back the same snapshot without
/// touching the store.
#[derive(Debug, Default)]
pub struct DatasetCache {
    table: Option<Arc<Table>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_populated(&self) -> bool {
        self.table.is_some()
    }

    /// Returns the cached table, loading it on a miss. Load failures leave
    /// the cache empty.
    pub async fn get(&mut self, db: &Db) -> Result<Arc<Table>> {
        if let Some(table) = &self.table {
            log::debug!("dataset cache hit; rows={}", table.len());
            return Ok(table.clone());
        }

        let documents = db
            .stream_all()
            .await
            .map_err(|err| err.context(err!("loading collection `{}`", db.collection())))?;
        let table = Arc::new(Table::from_documents(documents));

        log::info!(
            "dataset loaded; collection={}; rows={}; columns={}",
            db.collection(),
            table.len(),
            table.columns().len()
        );

        self.table = Some(table.clone());
        Ok(table)
    }

    /// Drop the cached snapshot. The next `get` reloads everything.
    pub fn invalidate(&mut self) {
        if self.table.take().is_some() {
            log::debug!("dataset cache invalidated");
        }
    }
}
