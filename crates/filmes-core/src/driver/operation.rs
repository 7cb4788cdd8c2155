mod insert;
pub use insert::Insert;

mod stream;
pub use stream::Stream;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Add one document to a collection. The store assigns its identifier.
    Insert(Insert),

    /// Read every document of a collection
    Stream(Stream),
}

impl Operation {
    /// The collection the operation targets.
    pub fn collection(&self) -> &str {
        match self {
            Operation::Insert(op) => &op.collection,
            Operation::Stream(op) => &op.collection,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Operation::Insert(_))
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Operation::Stream(_))
    }
}
