use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;

/// Opens the pool shared by every store. Close it once the server has stopped.
pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let db = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .context("connect to database")?;
    Ok(db)
}

pub async fn migrate(db: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(db)
        .await
        .context("run migrations")?;
    Ok(())
}
