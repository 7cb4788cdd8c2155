mod op;
mod value;

use filmes_core::{
    async_trait,
    driver::{operation::Operation, Connection, Driver, Response},
    Error, Result,
};

use mongodb::{options::ClientOptions, Client, Database};

#[derive(Debug, Clone)]
pub struct MongoDb {
    database: Database,
}

impl MongoDb {
    /// Connect to the deployment named by `url`. Multi-host and
    /// `mongodb+srv` URIs are accepted.
    ///
    /// The database is taken from the URI path when present, otherwise
    /// `default_database` is used.
    pub async fn from_url(url: &str, default_database: &str) -> Result<Self> {
        if !is_mongodb_url(url) {
            return Err(Error::invalid_connection_url(
                "connection URL does not have a `mongodb` or `mongodb+srv` scheme",
            ));
        }

        let options = ClientOptions::parse(url)
            .await
            .map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        let db_name = options
            .default_database
            .clone()
            .unwrap_or_else(|| default_database.to_string());

        let client = Client::with_options(options).map_err(Error::driver)?;

        log::debug!("mongodb client ready; database={db_name}");

        Ok(Self {
            database: client.database(&db_name),
        })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}

/// `true` for `mongodb://` and `mongodb+srv://` connection strings.
pub fn is_mongodb_url(url: &str) -> bool {
    url.starts_with("mongodb://") || url.starts_with("mongodb+srv://")
}

#[async_trait]
impl Driver for MongoDb {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        // `Database` handles share the client's connection pool.
        Ok(Box::new(MongoDbConnection {
            database: self.database.clone(),
        }))
    }
}

#[derive(Debug)]
pub struct MongoDbConnection {
    database: Database,
}

#[async_trait]
impl Connection for MongoDbConnection {
    fn name(&self) -> &'static str {
        "mongodb"
    }

    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        op::execute_operation(&self.database, operation).await
    }
}
