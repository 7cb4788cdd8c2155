mod cache;
pub use cache::DatasetCache;

mod create;
pub use create::{create_film, Created};

mod credentials;
pub use credentials::{Credentials, DEFAULT_PROJECT_ID, DEFAULT_SECRET_ENV};

mod dashboard;
pub use dashboard::{Dashboard, Interaction, Notice, Render, View};

pub mod db;
pub use db::Db;

mod film;
pub use film::{field, NewFilm, FILMS_COLLECTION};

mod options;
pub use options::{distinct_values, FormOptions};

mod select;
pub use select::{Selection, PROMPT};

mod table;
pub use table::Table;

pub use filmes_core::{driver, err, stmt, Error, Result};
