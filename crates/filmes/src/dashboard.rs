use crate::{create_film, DatasetCache, Db, FormOptions, NewFilm, Selection, Table, PROMPT};
use filmes_core::Result;

/// Widget state for one render pass.
///
/// Buttons are only `true` on the pass they were pressed in. The checkbox,
/// the search text, and the chosen director persist between passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    /// "Show all films" checkbox
    pub show_all: bool,

    /// Title search box
    pub search_text: String,

    /// Search button
    pub search_clicked: bool,

    /// Director dropdown
    pub director: Option<String>,

    /// Director filter button
    pub director_clicked: bool,

    /// Creation form, when submitted on this pass
    pub create: Option<NewFilm>,
}

impl Interaction {
    pub fn show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    /// Type `text` in the search box and press the search button.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self.search_clicked = true;
        self
    }

    /// Pick `director` in the dropdown and press the filter button.
    pub fn filter_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self.director_clicked = true;
        self
    }

    /// Submit the creation form.
    pub fn create(mut self, film: NewFilm) -> Self {
        self.create = Some(film);
        self
    }
}

/// A message for the user produced during a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

/// What to draw in the main area.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Table { heading: String, table: Table },
    Prompt(String),
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Render {
    /// `true` when the dataset was served from the cache at the start of
    /// the pass
    pub from_cache: bool,

    pub notices: Vec<Notice>,

    /// Choices for the director filter and the creation form, computed
    /// from the table as it stands at the end of the pass
    pub options: FormOptions,

    pub view: View,
}

/// Owns the store handle and the dataset cache across render passes.
#[derive(Debug)]
pub struct Dashboard {
    db: Db,
    cache: DatasetCache,
}

impl Dashboard {
    pub fn new(db: Db) -> Self {
        Self {
            db,
            cache: DatasetCache::new(),
        }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    /// Run one full pass: load, create if the form was submitted, compute
    /// the option lists, and apply the selection.
    ///
    /// Only a failure to load the dataset is returned as an error. Create
    /// failures become notices.
    pub async fn render(&mut self, interaction: &Interaction) -> Result<Render> {
        let from_cache = self.cache.is_populated();
        let mut table = self.cache.get(&self.db).await?;
        let mut notices = vec![];

        if let Some(film) = &interaction.create {
            match create_film(&self.db, &mut self.cache, film.clone()).await {
                Ok(created) => {
                    table = created.table;
                    notices.push(Notice::Success(format!(
                        "Film '{}' created successfully.",
                        film.name
                    )));
                }
                Err(err) if err.is_validation() => {
                    notices.push(Notice::Warning(
                        "The Name field cannot be empty.".to_string(),
                    ));
                }
                Err(err) => {
                    notices.push(Notice::Error(format!("Error creating film: {err}")));
                }
            }
        }

        let options = FormOptions::from_table(&table);
        let selection = Selection::resolve(interaction);

        let view = match (selection.apply(&table), selection.heading()) {
            (Some(table), Some(heading)) => View::Table { heading, table },
            _ => View::Prompt(PROMPT.to_string()),
        };

        Ok(Render {
            from_cache,
            notices,
            options,
            view,
        })
    }
}
