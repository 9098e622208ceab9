//! Chiron oracle HTTP server.
//!
//! Serves the reading engine over `POST /api/chiron`, backed by JPL Horizons.
//!
//! # Environment Variables
//!
//! - `CHIRON_CONFIG`: Path to a TOML config file (default: `chiron.toml` if present)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Overrides the configured log filter

use std::net::SocketAddr;

use tracing::info;

use chiron_oracle::http::{create_router, AppState};
use chiron_oracle::utils::{logger, validation::Validate};
use chiron_oracle::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("CHIRON_CONFIG").ok();
    let config = AppConfig::load(config_path.as_deref())?;

    logger::init_server_logger(&config.logging.level, config.logging.json);
    info!("Starting Chiron oracle server v{}", env!("CARGO_PKG_VERSION"));

    config.validate()?;
    info!("Ephemeris endpoint: {}", config.ephemeris.endpoint);

    let engine = config.build_engine()?;
    let app = create_router(AppState::new(engine));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
