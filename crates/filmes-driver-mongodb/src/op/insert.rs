use crate::value;
use filmes_core::{
    driver::{operation::Insert, Response},
    Error, Result,
};
use mongodb::Database;

pub async fn execute(database: &Database, op: Insert) -> Result<Response> {
    let collection = database.collection::<bson::Document>(&op.collection);
    let doc = value::to_bson_document(&op.document);

    let result = collection.insert_one(doc).await.map_err(Error::driver)?;
    let id = value::id_from_bson(&result.inserted_id);

    log::debug!("mongodb insert; collection={}; id={id}", op.collection);

    Ok(Response::inserted(id))
}
