use crate::{
    stmt::{Document, DocumentId},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Identifier of the document an insert created
    Inserted(DocumentId),

    /// Documents read by a stream operation, in store order
    Documents(Vec<Document>),
}

impl Response {
    pub fn inserted(id: DocumentId) -> Self {
        Self {
            rows: Rows::Inserted(id),
        }
    }

    pub fn documents(documents: Vec<Document>) -> Self {
        Self {
            rows: Rows::Documents(documents),
        }
    }
}

impl Rows {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted(_))
    }

    pub fn into_inserted(self) -> Result<DocumentId> {
        match self {
            Rows::Inserted(id) => Ok(id),
            Rows::Documents(documents) => Err(Error::invalid_result(format!(
                "expected an inserted id, got {} documents",
                documents.len()
            ))),
        }
    }

    pub fn into_documents(self) -> Result<Vec<Document>> {
        match self {
            Rows::Documents(documents) => Ok(documents),
            Rows::Inserted(id) => Err(Error::invalid_result(format!(
                "expected documents, got inserted id {id}"
            ))),
        }
    }
}
