//! HTTP server command
//!
//! Runs the trivia API against PostgreSQL, or against a throwaway
//! in-memory store with `--in-memory`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::migrations;
use trivia_server::db::seed::seed_default_categories;
use trivia_server::{run_server, MemoryStore, ServerConfig, TriviaStore};

use super::database::DatabaseArgs;
use crate::config::TriviaConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "TRIVIA_BIND")]
    pub bind: Option<SocketAddr>,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Serve from an in-memory store seeded with the stock categories
    #[arg(long, conflicts_with = "migrate")]
    pub in_memory: bool,

    /// Create missing tables before serving
    #[arg(long)]
    pub migrate: bool,

    /// Seed the stock categories if the category table is empty
    #[arg(long)]
    pub seed: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = TriviaConfig::load()?;
    let bind_addr = args
        .bind
        .or(config.server.bind)
        .unwrap_or_else(|| ServerConfig::default().bind_addr);

    let store: Arc<dyn TriviaStore> = if args.in_memory {
        tracing::warn!("Serving from an in-memory store; data is lost on shutdown");
        let store = Arc::new(MemoryStore::new());
        seed_default_categories(store.as_ref())
            .await
            .context("Failed to seed categories")?;
        store
    } else {
        let store = args.database.connect(&config).await?;
        if args.migrate {
            migrations::run(store.pool())
                .await
                .context("Failed to run migrations")?;
        }
        if args.seed {
            seed_default_categories(&store)
                .await
                .context("Failed to seed categories")?;
        }
        Arc::new(store)
    };

    tracing::info!("Starting trivia server on {}", bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, ServerConfig { bind_addr })
        .await
        .context("Server error")?;

    Ok(())
}
