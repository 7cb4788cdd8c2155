use clap::Parser;
use filmes::Db;
use filmes_cli::{Cli, Config, FilmesCli};

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Load configuration from Filmes.toml
    let config = Config::load(cli.config.as_deref())?;
    let credentials = config.credentials()?;

    // One store handle for the whole session
    let db = Db::builder()
        .collection(&config.collection)
        .connect_with_credentials(&credentials)
        .await?;

    FilmesCli::new(db).run(cli).await
}
