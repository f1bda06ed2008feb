//! # Rose CSM
//!
//! Customer-success dashboard backend: a small roster of customer accounts,
//! a health score recomputed from three sliders, and free-text notes per
//! customer. All state lives in one in-memory session.
//!
//! ## Modules
//!
//! - [`roster`]: Customer records and the roster store
//! - [`scoring`]: Health score calculator and slider definitions
//! - [`notes`]: Per-customer notes
//! - [`session`]: Session state tying roster and notes together
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use rose_csm::scoring::HealthInputs;
//! use rose_csm::session::Session;
//!
//! let mut session = Session::new();
//!
//! let inputs = HealthInputs::new(5.0, 2.0, 7.0);
//! let saved = session.save_health_score("Summit Ridge Financial", &inputs).unwrap();
//! assert_eq!(saved, 6.3);
//!
//! session.save_notes("Summit Ridge Financial", "QBR booked for March").unwrap();
//! assert_eq!(session.note("Summit Ridge Financial"), "QBR booked for March");
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod notes;
pub mod roster;
pub mod scoring;
pub mod session;

// Re-export top-level types for convenience
pub use roster::{Column, Customer, Roster, RosterError, RosterResult, RosterStore};

pub use scoring::{compute, HealthInputs, Slider};

pub use notes::NotesStore;

pub use session::{ScoreProposal, Session};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    generate_default_config, ApiConfig, Config, ConfigError, LoadedConfig, LoggingConfig,
};
