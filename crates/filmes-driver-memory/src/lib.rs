use filmes_core::{
    async_trait,
    driver::{operation::Operation, Connection, Driver, Response},
    stmt::{Document, DocumentId},
    Error, Result,
};

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};
use url::Url;

/// An in-process document store.
///
/// Every connection opened from the same `Memory` (or a clone of it) sees the
/// same collections, so data written through one handle is visible to the
/// others.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    store: Arc<Mutex<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    collections: HashMap<String, Vec<Document>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `memory:` and `memory://<anything>`. Every call returns a
    /// fresh, empty store.
    pub fn from_url(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        if url.scheme() != "memory" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `memory` scheme; url={url}"
            )));
        }

        Ok(Self::new())
    }

    /// Add documents directly, bypassing the connection API. Documents
    /// without an `id` get a generated one.
    pub fn seed(&self, collection: &str, documents: impl IntoIterator<Item = Document>) {
        let mut store = self.lock();
        let target = store.collections.entry(collection.to_string()).or_default();

        for mut document in documents {
            if document.id.is_none() {
                document.id = Some(generate_id());
            }
            target.push(document);
        }
    }

    /// Snapshot of a collection's documents in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.lock()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // A panic while holding the lock cannot leave a collection half
        // written, so a poisoned store is still usable.
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Driver for Memory {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(MemoryConnection {
            memory: self.clone(),
        }))
    }
}

#[derive(Debug)]
pub struct MemoryConnection {
    memory: Memory,
}

#[async_trait]
impl Connection for MemoryConnection {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        match operation {
            Operation::Insert(op) => {
                let id = generate_id();
                let mut document = op.document;
                document.id = Some(id.clone());

                log::debug!("memory insert; collection={}; id={id}", op.collection);

                self.memory
                    .lock()
                    .collections
                    .entry(op.collection)
                    .or_default()
                    .push(document);

                Ok(Response::inserted(id))
            }
            Operation::Stream(op) => {
                let documents = self.memory.documents(&op.collection);
                log::debug!(
                    "memory stream; collection={}; documents={}",
                    op.collection,
                    documents.len()
                );
                Ok(Response::documents(documents))
            }
        }
    }
}

fn generate_id() -> DocumentId {
    DocumentId::new(uuid::Uuid::new_v4().simple().to_string())
}
