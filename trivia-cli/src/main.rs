//! trivia CLI - runs and maintains the trivia API server
//!
//! - `serve`: HTTP API (PostgreSQL or in-memory)
//! - `migrate`: create the category and question tables
//! - `seed`: insert the stock categories
//! - `config`: inspect the resolved configuration

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "REST backend for the trivia game: questions, categories, and quiz play"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the trivia tables if they do not exist
    Migrate(commands::database::MigrateArgs),
    /// Insert the stock categories into an empty database
    Seed(commands::database::SeedArgs),
    /// Inspect configuration (show, path)
    Config(config::ConfigArgs),
}

fn load_env_files() {
    // dotenvy never overrides variables that are already set.
    let _ = dotenvy::dotenv();
    let _ = dotenvy::from_path(config::trivia_home().join(".env"));
}

#[tokio::main]
async fn main() -> Result<()> {
    load_env_files();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Migrate(args) => commands::database::run_migrate(args).await,
        Commands::Seed(args) => commands::database::run_seed(args).await,
        Commands::Config(args) => config::run_config(args),
    };

    tracing_setup::shutdown_otel();
    result
}
