//! Database maintenance commands: `migrate` and `seed`

use anyhow::{Context, Result};
use clap::{Args, Parser};
use trivia_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use trivia_server::db::seed::seed_default_categories;
use trivia_server::db::{create_pool_with_options, migrations};
use trivia_server::PgStore;

use crate::config::{mask_password, TriviaConfig};

/// Connection options shared by every command that talks to PostgreSQL
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Database URL (overrides config file and DB_* variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections (default: 5)
    #[arg(long)]
    pub max_connections: Option<u32>,
}

impl DatabaseArgs {
    /// Open a pool using flag > config file > default precedence.
    pub async fn connect(&self, config: &TriviaConfig) -> Result<PgStore> {
        let url = config.database_url(self.database_url.as_deref());
        let max_connections = self
            .max_connections
            .or(config.database.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        tracing::info!(url = %mask_password(&url), max_connections, "Connecting to database");
        let pool = create_pool_with_options(&url, max_connections)
            .await
            .context("Failed to create database pool")?;

        Ok(PgStore::new(pool))
    }
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Create missing tables before seeding
    #[arg(long)]
    pub migrate: bool,
}

/// Create the trivia tables
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = TriviaConfig::load()?;
    let store = args.database.connect(&config).await?;

    migrations::run(store.pool())
        .await
        .context("Failed to run migrations")?;

    println!("Migrations complete");
    Ok(())
}

/// Insert the stock categories into an empty category table
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let config = TriviaConfig::load()?;
    let store = args.database.connect(&config).await?;

    if args.migrate {
        migrations::run(store.pool())
            .await
            .context("Failed to run migrations")?;
    }

    let inserted = seed_default_categories(&store)
        .await
        .context("Failed to seed categories")?;

    if inserted == 0 {
        println!("Categories already present, nothing to seed");
    } else {
        println!("Seeded {} categories", inserted);
    }
    Ok(())
}
