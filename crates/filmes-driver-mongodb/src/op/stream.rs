use crate::value;
use filmes_core::{
    driver::{operation::Stream, Response},
    Error, Result,
};
use futures::stream::TryStreamExt;
use mongodb::Database;

pub async fn execute(database: &Database, op: Stream) -> Result<Response> {
    let collection = database.collection::<bson::Document>(&op.collection);

    let cursor = collection
        .find(bson::Document::new())
        .await
        .map_err(Error::driver)?;
    let docs: Vec<bson::Document> = cursor.try_collect().await.map_err(Error::driver)?;

    log::debug!(
        "mongodb stream; collection={}; documents={}",
        op.collection,
        docs.len()
    );

    Ok(Response::documents(
        docs.iter().map(value::from_bson_document).collect(),
    ))
}
