//! Launchdeck Web Server
//!
//! Run with: cargo run -p launchdeck-web

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use launchdeck_data::LaunchDataset;
use launchdeck_web::config::Config;
use launchdeck_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing. RUST_LOG overrides the default level.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Launchdeck dashboard server...");

    let config = Config::load()?;
    let dataset = LaunchDataset::load(&config.data.launches_csv)?;

    let state = AppState::new(dataset);
    let app = launchdeck_web::router::build_router(state);

    let addr = config.server.listen_addr()?;
    info!("🚀 Dashboard listening on http://{}", addr);
    info!("📊 Open your browser and navigate to http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
