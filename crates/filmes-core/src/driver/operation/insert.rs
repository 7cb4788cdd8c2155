use super::Operation;
use crate::stmt::Document;

#[derive(Debug, Clone)]
pub struct Insert {
    /// Name of the target collection
    pub collection: String,

    /// Document to add. Any `id` it carries is ignored.
    pub document: Document,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
