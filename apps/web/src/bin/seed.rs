use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use portfolio::config::Config;
use portfolio::db::{create_pool, run_migrations};
use portfolio::logging::init_tracing;
use portfolio::seed::{seed, PgSkillStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.rust_log);

    let pool = create_pool(config.require_database_url()?).await?;
    let result = run(&pool).await;
    // The pool is released whether or not the batch succeeded.
    pool.close().await;
    info!("Database connection closed");

    if let Err(e) = &result {
        tracing::error!("Seeding failed: {e:?}");
    }
    result
}

async fn run(pool: &PgPool) -> Result<()> {
    run_migrations(pool).await?;
    let inserted = seed(&PgSkillStore::new(pool.clone())).await?;
    info!("Inserted {inserted} skills");
    Ok(())
}
