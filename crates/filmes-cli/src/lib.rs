mod config;
mod interactive;
mod output;
mod theme;

pub use config::{Config, DEFAULT_CONFIG_FILE};

use anyhow::Result;
use clap::Parser;
use console::Term;
use filmes::{Dashboard, Db, Interaction, NewFilm, Notice};

use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line front-end over a [`Dashboard`]
pub struct FilmesCli {
    dashboard: Dashboard,
    term: Term,
}

impl FilmesCli {
    pub fn new(db: Db) -> Self {
        Self {
            dashboard: Dashboard::new(db),
            term: Term::stdout(),
        }
    }

    /// Execute a parsed command line. Fails with exit code 1 when a film
    /// could not be created.
    pub async fn run(&mut self, cli: Cli) -> Result<ExitCode> {
        let interaction = match cli.command {
            None => Interaction::default(),
            Some(Command::List) => Interaction::default().show_all(true),
            Some(Command::Search { title }) => Interaction::default().search(title),
            Some(Command::Director { name }) => Interaction::default().filter_director(name),
            Some(Command::Create(create)) => Interaction::default().create(create.into()),
            Some(Command::Options) => {
                let render = self.dashboard.render(&Interaction::default()).await?;
                output::print_options(&self.term, &render.options)?;
                return Ok(ExitCode::SUCCESS);
            }
            Some(Command::Interactive) => {
                interactive::run(&mut self.dashboard, &self.term).await?;
                return Ok(ExitCode::SUCCESS);
            }
        };

        let interaction = if cli.all {
            interaction.show_all(true)
        } else {
            interaction
        };

        let render = self.dashboard.render(&interaction).await?;
        output::print_render(&self.term, &render)?;

        let failed = render
            .notices
            .iter()
            .any(|notice| !matches!(notice, Notice::Success(_)));

        Ok(if failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }
}

#[derive(Parser, Debug)]
#[command(name = "filmes")]
#[command(about = "Browse, search, filter, and create films")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, env = "FILMES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show every film when no other selection applies
    #[arg(long, global = true)]
    pub all: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Show all films
    List,

    /// Search films by title, ignoring case
    Search {
        /// Text the title must contain
        title: String,
    },

    /// Show the films of one director
    Director {
        /// Director name, matched exactly
        name: String,
    },

    /// List the known directors, companies, and genres
    Options,

    /// Create a new film
    Create(CreateCommand),

    /// Menu-driven session
    Interactive,
}

#[derive(Parser, Debug)]
pub struct CreateCommand {
    /// Film title
    #[arg(long)]
    name: String,

    #[arg(long)]
    company: Option<String>,

    #[arg(long)]
    director: Option<String>,

    #[arg(long)]
    genre: Option<String>,
}

impl From<CreateCommand> for NewFilm {
    fn from(cmd: CreateCommand) -> Self {
        NewFilm {
            name: cmd.name,
            company: cmd.company,
            director: cmd.director,
            genre: cmd.genre,
        }
    }
}
