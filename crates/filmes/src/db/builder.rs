use super::{connect, Db};
use crate::{Credentials, DEFAULT_PROJECT_ID, FILMS_COLLECTION};

use filmes_core::{driver::Driver, Result};

pub struct Builder {
    /// Collection read and written by the handle
    collection: String,

    /// Database used when neither the credentials nor the URL name one
    default_database: String,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            collection: FILMS_COLLECTION.to_string(),
            default_database: DEFAULT_PROJECT_ID.to_string(),
        }
    }
}

impl Builder {
    pub fn collection(&mut self, collection: impl Into<String>) -> &mut Self {
        self.collection = collection.into();
        self
    }

    /// Connect using decoded service credentials. The credential's project
    /// names the database.
    pub async fn connect_with_credentials(&mut self, credentials: &Credentials) -> Result<Db> {
        log::info!(
            "connecting; project={}; url={}",
            credentials.project_id,
            credentials.redacted_url()
        );
        self.default_database = credentials.project_id.clone();
        self.connect(&credentials.connection_url).await
    }

    pub async fn connect(&self, url: &str) -> Result<Db> {
        let driver = connect::driver_for_url(url, &self.default_database).await?;
        self.build(driver).await
    }

    /// Build the handle on top of an already constructed driver.
    pub async fn build(&self, driver: impl Driver) -> Result<Db> {
        let connection = driver.connect().await?;
        Ok(Db::new(self.collection.clone(), connection))
    }
}
