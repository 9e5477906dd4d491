use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use trivia_api::db::{self, csv_io};
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database URL, e.g. sqlite:trivia.db
    database_url: String,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert the default categories into an empty database
    Seed,
    /// Import categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Export categories.csv and questions.csv into a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let pool = db::establish_connection(&cli.database_url)
        .await
        .context("Cannot connect to DB")?;
    db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    match cli.command {
        Commands::Seed => {
            let inserted = db::seed_categories(&pool).await?;
            tracing::info!(inserted, "Seeded categories");
        }
        Commands::Import { path } => {
            let (categories, questions) = csv_io::import_data(&pool, &path).await?;
            tracing::info!(categories, questions, "Imported rows");
        }
        Commands::Export { path } => {
            csv_io::export_data(&pool, &path).await?;
            tracing::info!(path = %path.display(), "Exported data");
        }
    }
    Ok(())
}
