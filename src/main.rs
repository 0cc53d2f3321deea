use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod nn;

use api::routes::create_router;
use config::ServerConfig;
use error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().inspect_err(|e| tracing::error!("{}", e))?;

    tracing::info!("NN Voice Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", config.addr);
    tracing::info!("Static directory: {}", config.static_dir.display());

    // The pitch/rate network is random per process; draw it before serving.
    nn::init();
    tracing::info!("Pitch/rate network initialized (weights are not reproducible across restarts)");

    let app = create_router(&config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
