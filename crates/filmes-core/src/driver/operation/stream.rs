use super::Operation;

#[derive(Debug, Clone)]
pub struct Stream {
    /// Name of the collection to read
    pub collection: String,
}

impl From<Stream> for Operation {
    fn from(value: Stream) -> Self {
        Self::Stream(value)
    }
}
