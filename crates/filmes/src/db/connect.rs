use filmes_core::{driver::Driver, Error, Result};

/// Pick the driver for a connection URL based on its scheme.
///
/// Only the scheme is inspected here. Each driver validates the rest, as
/// MongoDB URIs may list several hosts.
pub(crate) async fn driver_for_url(url: &str, default_database: &str) -> Result<Box<dyn Driver>> {
    match scheme(url) {
        Some("mongodb" | "mongodb+srv") => connect_mongodb(url, default_database).await,
        Some("memory") => connect_memory(url),
        Some(scheme) => Err(Error::invalid_connection_url(format!(
            "unsupported document store; scheme={scheme}"
        ))),
        None => Err(Error::invalid_connection_url(
            "connection URL has no scheme",
        )),
    }
}

fn scheme(url: &str) -> Option<&str> {
    let (scheme, _) = url.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

#[cfg(feature = "mongodb")]
async fn connect_mongodb(url: &str, default_database: &str) -> Result<Box<dyn Driver>> {
    let driver = filmes_driver_mongodb::MongoDb::from_url(url, default_database).await?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "mongodb"))]
async fn connect_mongodb(_url: &str, _default_database: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`mongodb` feature not enabled"))
}

#[cfg(feature = "memory")]
fn connect_memory(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(filmes_driver_memory::Memory::from_url(url)?))
}

#[cfg(not(feature = "memory"))]
fn connect_memory(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`memory` feature not enabled"))
}
