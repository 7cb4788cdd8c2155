use crate::{
    exec_log::ExecLog,
    failing_driver::{FailingDriver, Faults},
    logging_driver::{DriverOp, LoggingDriver},
    Setup,
};
use filmes::Db;
use filmes_core::{
    driver::operation::{Insert, Stream},
    stmt::Document,
};
use std::sync::{Arc, Mutex};

/// Per-test handle: seeds data, builds the `Db` under test, and exposes the
/// operations it sent to the driver.
pub struct DbTest {
    setup: Arc<dyn Setup>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
    faults: Faults,
}

impl DbTest {
    fn new(setup: Arc<dyn Setup>) -> Self {
        Self {
            setup,
            ops_log: Arc::new(Mutex::new(Vec::new())),
            faults: Faults::default(),
        }
    }

    /// Write documents straight to the backend. Not logged, never faulted.
    pub async fn seed(&self, documents: impl IntoIterator<Item = Document>) {
        let driver = self.setup.driver().await.unwrap();
        let mut connection = driver.connect().await.unwrap();

        for document in documents {
            connection
                .exec(
                    Insert {
                        collection: self.setup.collection().to_string(),
                        document,
                    }
                    .into(),
                )
                .await
                .unwrap();
        }
    }

    /// Read the collection straight from the backend. Not logged.
    pub async fn stored(&self) -> Vec<Document> {
        let driver = self.setup.driver().await.unwrap();
        let mut connection = driver.connect().await.unwrap();

        connection
            .exec(
                Stream {
                    collection: self.setup.collection().to_string(),
                }
                .into(),
            )
            .await
            .unwrap()
            .rows
            .into_documents()
            .unwrap()
    }

    /// Build the `Db` under test, with fault injection and operation
    /// logging between it and the backend.
    pub async fn setup_db(&mut self) -> Db {
        let _ = env_logger::builder().is_test(true).try_init();

        let driver = self.setup.driver().await.unwrap();
        let failing = FailingDriver::new(driver, self.faults.clone());
        let logging = LoggingDriver::new(Box::new(failing));
        self.ops_log = logging.ops_log_handle();

        Db::builder()
            .collection(self.setup.collection())
            .build(logging)
            .await
            .unwrap()
    }

    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }

    pub fn faults(&self) -> &Faults {
        &self.faults
    }
}

/// Owns the Tokio runtime for one test and cleans the backend up afterwards.
///
/// Lets tests use `#[test]` and still block on cleanup before the process
/// exits.
pub struct FilmesTest<S: Setup> {
    runtime: tokio::runtime::Runtime,
    setup: Arc<S>,
}

impl<S: Setup> FilmesTest<S> {
    /// Create a new FilmesTest with a current-thread runtime.
    pub fn new(setup: S) -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        Self {
            runtime,
            setup: Arc::new(setup),
        }
    }

    pub fn run_test<F, Fut>(&mut self, test_fn: F)
    where
        F: FnOnce(DbTest) -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        let setup: Arc<dyn Setup> = self.setup.clone();
        self.runtime.block_on(test_fn(DbTest::new(setup)));
    }
}

impl<S: Setup> Drop for FilmesTest<S> {
    fn drop(&mut self) {
        let setup = self.setup.clone();
        self.runtime.block_on(async move {
            let _ = setup.cleanup().await;
        });
    }
}
