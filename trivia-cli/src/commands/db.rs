//! Schema and seed commands

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool, migrations, CategoryRepo, DEFAULT_CATEGORIES};

/// Arguments shared by the database commands
#[derive(Parser, Debug)]
pub struct DbArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

/// Create the categories and questions tables
pub async fn run_migrate(args: DbArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(())
}

/// Insert the default categories if none exist yet
pub async fn run_seed(args: DbArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    let inserted = CategoryRepo::new(&pool)
        .seed(&DEFAULT_CATEGORIES)
        .await
        .context("Failed to seed categories")?;

    if inserted == 0 {
        tracing::info!("Categories already present, nothing seeded");
    } else {
        tracing::info!(inserted, "Seeded default categories");
    }
    Ok(())
}
