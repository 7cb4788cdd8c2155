use super::{DocumentId, Value};
use indexmap::IndexMap;

/// A schema-less record: an optional store identifier plus an ordered map
/// of field name to value.
///
/// Documents read from the store always carry an `id`. Documents built for
/// an insert leave it empty; the store assigns one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    pub id: Option<DocumentId>,
    pub fields: IndexMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: DocumentId) -> Self {
        Self {
            id: Some(id),
            fields: IndexMap::new(),
        }
    }

    /// Returns the value stored under `name`, or `None` when the document
    /// does not carry the field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            id: None,
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
