//! Rose CSM REST API
//!
//! HTTP interaction layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Customers
//! - `GET /api/v1/customers` - Customer table
//! - `GET /api/v1/customers/:name` - Customer details
//!
//! ## Health Score
//! - `GET /api/v1/health-score/sliders` - Slider definitions
//! - `POST /api/v1/health-score/compute` - Compute a score
//! - `POST /api/v1/customers/:name/health-score/preview` - Stored vs proposed score
//! - `PUT /api/v1/customers/:name/health-score` - Save a new score
//!
//! ## Notes
//! - `GET /api/v1/customers/:name/notes` - Read notes
//! - `PUT /api/v1/customers/:name/notes` - Save notes
//!
//! ## Session
//! - `POST /api/v1/session/reset` - Re-run initialization
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use rose_csm::api::{serve, AppState};
//! use rose_csm::config::ApiConfig;
//! use rose_csm::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(Session::new(), config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let api_routes = Router::new()
        // Customer routes
        .route("/customers", get(routes::customers::list_customers))
        .route("/customers/:name", get(routes::customers::get_customer))
        // Health score routes
        .route("/health-score/sliders", get(routes::scores::list_sliders))
        .route("/health-score/compute", post(routes::scores::compute_score))
        .route(
            "/customers/:name/health-score/preview",
            post(routes::scores::preview_score),
        )
        .route("/customers/:name/health-score", put(routes::scores::save_score))
        // Notes routes
        .route(
            "/customers/:name/notes",
            get(routes::notes::get_notes).put(routes::notes::save_notes),
        )
        // Session routes
        .route("/session/reset", post(routes::session::reset_session));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive CORS unless origins are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Rose CSM API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Rose CSM API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
