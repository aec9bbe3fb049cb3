mod auth;
mod config;
mod directory;
mod error;
mod handlers;
mod models;
mod rate_limit;
mod router;
mod state;

use config::GatewayConfig;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Matchmaking Gateway service");

    let config = GatewayConfig::from_env()?;
    let addr = config.bind_addr;

    // Initialize application state
    let state = AppState::new(config);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
