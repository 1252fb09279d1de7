use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use zoom_clone_backend::api;
use zoom_clone_backend::auth::TokenIssuer;
use zoom_clone_backend::config::Config;
use zoom_clone_backend::cors::CorsPolicy;
use zoom_clone_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Zoom Clone token backend...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        host = %config.server_host,
        port = %config.server_port,
        media_server = %config.media_server_url,
        "Configuration loaded"
    );

    if config.uses_default_credentials() {
        tracing::warn!(
            "Built-in development API credentials in use; set API_KEY and API_SECRET before deploying"
        );
    }

    // Create token issuer and CORS policy
    let tokens = TokenIssuer::new(&config);
    let cors = CorsPolicy::new(&config.allowed_origins);

    // Create application state
    let state = AppState::new(config, tokens, cors);
    let addr: SocketAddr = state.config.server_addr().parse()?;

    // Build router
    let app = api::create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %addr, "Server listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Handle shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, shutting down...");
        },
    }
}
