//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::ApiConfig;
use crate::session::Session;

/// Shared application state for all handlers
pub struct AppState {
    /// The dashboard session (roster and notes)
    pub session: RwLock<Session>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(session: Session, config: ApiConfig) -> Self {
        Self {
            session: RwLock::new(session),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
