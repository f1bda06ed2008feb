//! API Routes
//!
//! Route handlers organized by functionality.

pub mod customers;
pub mod health;
pub mod notes;
pub mod scores;
pub mod session;
