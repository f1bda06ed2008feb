//! Customer Roster
//!
//! The book of business a customer-success manager works from:
//!
//! - **types**: `Customer` records and the `Column` schema
//! - **seed**: the fixed set of customers loaded at session start
//! - **store**: `RosterStore`, the ordered, name-indexed table
//! - **format**: display helpers for the roster table
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use rose_csm::roster::RosterStore;
//!
//! let mut store = RosterStore::new();
//! store.initialize();
//!
//! store.update_health_score("BluePeak Holdings", 7.4).unwrap();
//! assert_eq!(store.get("BluePeak Holdings").unwrap().health_score, 7.4);
//! ```

pub mod error;
pub mod format;
pub mod seed;
pub mod store;
pub mod types;

pub use error::{RosterError, RosterResult};
pub use format::{format_arr, format_score};
pub use seed::seed_customers;
pub use store::{Roster, RosterStore};
pub use types::{Column, Customer};
