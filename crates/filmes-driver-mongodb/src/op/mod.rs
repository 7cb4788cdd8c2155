mod insert;
mod stream;

use filmes_core::{
    driver::{operation::Operation, Response},
    Result,
};
use mongodb::Database;

pub async fn execute_operation(database: &Database, op: Operation) -> Result<Response> {
    match op {
        Operation::Insert(op) => insert::execute(database, op).await,
        Operation::Stream(op) => stream::execute(database, op).await,
    }
}
