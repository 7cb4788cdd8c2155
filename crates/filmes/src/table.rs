use filmes_core::stmt::{Document, Value};
use indexmap::IndexSet;

static NULL: Value = Value::Null;

/// A tabular snapshot of the film collection.
///
/// Rows keep store order. Columns are the union of every field name seen,
/// in first-seen order. A row that lacks a column reads as null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Document>,
}

impl Table {
    pub fn from_documents(rows: Vec<Document>) -> Self {
        let columns: IndexSet<&str> = rows.iter().flat_map(Document::field_names).collect();
        let columns = columns.into_iter().map(str::to_string).collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Document] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of `column` in `row`, null when the document lacks the field.
    pub fn cell<'a>(row: &'a Document, column: &str) -> &'a Value {
        row.get(column).unwrap_or(&NULL)
    }

    /// Every value of one column, nulls included.
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.rows.iter().map(move |row| Self::cell(row, column))
    }

    /// A new table with the rows matching `predicate`. Columns are kept even
    /// when no remaining row carries them.
    pub fn filter(&self, mut predicate: impl FnMut(&Document) -> bool) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|row| predicate(row)).cloned().collect(),
        }
    }
}
