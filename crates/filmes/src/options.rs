use crate::{field, Table};

use std::collections::BTreeSet;

/// Choices offered by the director filter and the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOptions {
    pub directors: Vec<String>,
    pub companies: Vec<String>,
    pub genres: Vec<String>,
}

impl FormOptions {
    /// Must be recomputed whenever the table changes.
    pub fn from_table(table: &Table) -> Self {
        Self {
            directors: distinct_values(table, field::DIRECTOR),
            companies: distinct_values(table, field::COMPANY),
            genres: distinct_values(table, field::GENRE),
        }
    }
}

/// Sorted distinct non-null values of one column.
pub fn distinct_values(table: &Table, column: &str) -> Vec<String> {
    table
        .column_values(column)
        .filter(|value| !value.is_null())
        .map(|value| value.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
