use filmes_core::{
    async_trait,
    driver::{Connection, Driver, Operation, Response},
    Result,
};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Log of all operations executed through this driver
    /// Using Arc<Mutex> for thread-safe access from tests
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect().await?,
            ops_log: self.ops_log_handle(),
        }))
    }
}

/// One operation that reached the driver.
#[derive(Debug, Clone)]
pub struct DriverOp {
    pub operation: Operation,

    /// `None` when the driver returned an error
    pub response: Option<Response>,
}

/// A connection wrapper that records every attempted operation, failed
/// ones included.
#[derive(Debug)]
pub struct LoggingConnection {
    /// The underlying connection that actually executes operations
    inner: Box<dyn Connection>,

    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

#[async_trait]
impl Connection for LoggingConnection {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        let result = self.inner.exec(operation.clone()).await;

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                operation,
                response: result.as_ref().ok().cloned(),
            });

        result
    }
}
