use crate::{field, Interaction, Table};
use filmes_core::stmt::Value;

/// Shown when nothing is selected.
pub const PROMPT: &str = "Use the menu to search, filter, or create films.";

/// What the user asked to see on this render.
///
/// Resolved once per render from the widget state, in a fixed priority:
/// search, then director filter, then show-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Rows whose name contains the text, ignoring case
    SearchByTitle(String),

    /// Rows whose director is exactly this name
    FilterByDirector(String),

    /// Every row
    ShowAll,

    /// Nothing; show the prompt instead of a table
    None,
}

impl Selection {
    pub fn resolve(interaction: &Interaction) -> Selection {
        if interaction.search_clicked && !interaction.search_text.trim().is_empty() {
            return Selection::SearchByTitle(interaction.search_text.clone());
        }

        if interaction.director_clicked {
            // The dropdown is empty when no film has a director yet.
            if let Some(director) = &interaction.director {
                return Selection::FilterByDirector(director.clone());
            }
        }

        if interaction.show_all {
            return Selection::ShowAll;
        }

        Selection::None
    }

    /// The visible subset, or `None` when the prompt should be shown.
    pub fn apply(&self, table: &Table) -> Option<Table> {
        match self {
            Selection::SearchByTitle(text) => {
                let needle = text.to_lowercase();
                Some(table.filter(|row| match Table::cell(row, field::NAME) {
                    Value::String(name) => name.to_lowercase().contains(&needle),
                    _ => false,
                }))
            }
            // Compared on display text, the same form the option list uses.
            Selection::FilterByDirector(director) => Some(table.filter(|row| {
                let cell = Table::cell(row, field::DIRECTOR);
                !cell.is_null() && cell.to_string() == *director
            })),
            Selection::ShowAll => Some(table.clone()),
            Selection::None => None,
        }
    }

    /// Heading displayed above the table.
    pub fn heading(&self) -> Option<String> {
        match self {
            Selection::SearchByTitle(text) => Some(format!("Search results for: '{text}'")),
            Selection::FilterByDirector(director) => {
                Some(format!("Films directed by: {director}"))
            }
            Selection::ShowAll => Some("All films".to_string()),
            Selection::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}
