pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::Error;

pub mod stmt;
pub use stmt::{Document, DocumentId, Value};

/// A Result type alias that uses the Filmes [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
