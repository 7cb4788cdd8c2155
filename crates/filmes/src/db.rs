mod builder;
pub use builder::Builder;

mod connect;

use filmes_core::{
    driver::{
        operation::{Insert, Operation, Stream},
        Connection, Response,
    },
    stmt::{Document, DocumentId},
    Result,
};
use tokio::sync::Mutex;

use std::sync::Arc;

/// Handle to the document store.
///
/// Build one per process and pass it (or clones of it) to everything that
/// needs the store. All clones share a single connection.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    /// Collection the films live in
    collection: String,

    connection: Mutex<Box<dyn Connection>>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(collection: String, connection: Box<dyn Connection>) -> Self {
        Self {
            shared: Arc::new(Shared {
                collection,
                connection: Mutex::new(connection),
            }),
        }
    }

    pub fn collection(&self) -> &str {
        &self.shared.collection
    }

    /// Read every document of the collection.
    pub async fn stream_all(&self) -> Result<Vec<Document>> {
        let response = self
            .exec(
                Stream {
                    collection: self.shared.collection.clone(),
                }
                .into(),
            )
            .await?;

        response.rows.into_documents()
    }

    /// Add one document to the collection and return the identifier the
    /// store assigned to it.
    pub async fn add(&self, document: Document) -> Result<DocumentId> {
        let response = self
            .exec(
                Insert {
                    collection: self.shared.collection.clone(),
                    document,
                }
                .into(),
            )
            .await?;

        response.rows.into_inserted()
    }

    async fn exec(&self, operation: Operation) -> Result<Response> {
        let mut connection = self.shared.connection.lock().await;
        log::debug!(
            "exec; driver={}; collection={}; insert={}",
            connection.name(),
            operation.collection(),
            operation.is_insert()
        );
        connection.exec(operation).await
    }
}
