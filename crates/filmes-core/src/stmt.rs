mod document;
pub use document::Document;

mod id;
pub use id::DocumentId;

mod value;
pub use value::Value;
