use std::sync::Arc;

mod app;
mod auth;
mod blogs;
mod config;
mod db;
mod error;
mod state;

use crate::{app::build_app, config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "inkwell=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = Arc::new(AppConfig::from_env()?);
    let db = db::connect(&config).await?;
    db::migrate(&db).await?;
    tracing::info!(unique_emails = config.unique_emails, "database ready");

    let app = build_app(AppState::with_pool(config, db.clone()));
    let served = app::serve(app).await;

    db.close().await;
    tracing::info!("shutdown complete");
    served
}
