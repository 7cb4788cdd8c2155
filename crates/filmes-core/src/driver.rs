mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// A document store backend. Produces connections on demand.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Open a new connection to the document store.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;
}

/// A live session with the document store.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Short name of the backend, used in log output.
    fn name(&self) -> &'static str;

    /// Execute a document store operation
    async fn exec(&mut self, operation: Operation) -> crate::Result<Response>;
}

#[async_trait]
impl Driver for Box<dyn Driver> {
    async fn connect(&self) -> crate::Result<Box<dyn Connection>> {
        (**self).connect().await
    }
}
