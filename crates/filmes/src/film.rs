use filmes_core::{stmt::Document, Error, Result};

/// The fixed collection holding film records.
pub const FILMS_COLLECTION: &str = "filmes";

/// Field names of a film record.
pub mod field {
    pub const NAME: &str = "name";
    pub const COMPANY: &str = "company";
    pub const DIRECTOR: &str = "director";
    pub const GENRE: &str = "genre";
}

/// A film record submitted through the creation form.
///
/// Only `name` is required. Unset option fields are written as null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFilm {
    pub name: String,
    pub company: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
}

impl NewFilm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// The name must contain something other than whitespace.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation_empty_field(field::NAME));
        }
        Ok(())
    }

    /// The name is stored as typed, surrounding whitespace included.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        document
            .insert(field::NAME, self.name.as_str())
            .insert(field::COMPANY, self.company.as_deref())
            .insert(field::DIRECTOR, self.director.as_deref())
            .insert(field::GENRE, self.genre.as_deref());
        document
    }
}
