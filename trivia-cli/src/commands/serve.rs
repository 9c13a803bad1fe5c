//! HTTP server command for the trivia API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};
use trivia_server::{
    run_server, AppState, MemoryStore, PgTriviaStore, SeededPicker, ServerConfig, TriviaStore,
};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Serve from an in-process store seeded with the default categories
    #[arg(long)]
    pub in_memory: bool,

    /// Seed the quiz picker for a reproducible question order
    #[arg(long)]
    pub quiz_seed: Option<u64>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn TriviaStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        Arc::new(MemoryStore::with_default_categories())
    } else {
        let database_url = args
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let pool = create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;

        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;

        Arc::new(PgTriviaStore::new(pool))
    };

    let mut state = AppState::new(store);
    if let Some(seed) = args.quiz_seed {
        tracing::info!(seed, "Quiz picker seeded");
        state = state.with_picker(Arc::new(SeededPicker::new(seed)));
    }

    tracing::info!("Starting trivia server on {}", args.bind);

    // Run server (blocks until shutdown)
    run_server(state, ServerConfig { bind_addr: args.bind })
        .await
        .context("Server error")?;

    Ok(())
}
