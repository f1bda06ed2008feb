//! Rose CSM API Server
//!
//! Run with: cargo run --bin rose-csm
//!
//! Configuration is read from `config.toml` (see `rose-csm-cli config`),
//! with `ROSE_CSM_*` environment overrides and `RUST_LOG` for log filtering.

use rose_csm::api::{serve, AppState};
use rose_csm::config::Config;
use rose_csm::logging::init_logging;
use rose_csm::session::Session;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = Config::load_default();
    init_logging(&loaded.config.logging)?;
    loaded.log();

    let config = loaded.config;

    tracing::info!("Starting Rose CSM API server v{}", env!("CARGO_PKG_VERSION"));

    let session = Session::new();
    tracing::info!("Session ready with {} customers", session.customers().len());

    let state = AppState::new(session, config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Rose CSM API server stopped");
    Ok(())
}
