//! The Daily Harvest - server-rendered storefront

use anyhow::Result;
use daily_harvest::{config::AppConfig, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(source = ?config.catalog_source, files = config.catalog_files.len(), "catalog configured");

    let state = web::AppState::new(config.catalog_loader()).with_session_store(config.session_store());
    state.load_catalog();
    let app = web::router(state, &config.static_dir);

    let addr = config.socket_addr();
    tracing::info!("🚀 The Daily Harvest listening on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(&addr).await?, app).await?;
    Ok(())
}
