#[macro_use]
mod macros;


mod db_test;
pub use db_test::{DbTest, FilmesTest};

mod exec_log;
pub use exec_log::ExecLog;

pub use failing_driver::{FailingDriver, Faults};


mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};

use filmes_core::driver::Driver;

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    /// A driver for the backend under test. Every call must reach the same
    /// data.
    async fn driver(&self) -> filmes::Result<Box<dyn Driver>>;

    /// Collection this test reads and writes.
    fn collection(&self) -> &str;

    /// Remove whatever this setup instance created.
    async fn cleanup(&self) -> filmes::Result<()> {
        Ok(())
    }
}
