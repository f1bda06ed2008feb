//! Roster error types

use thiserror::Error;

/// Errors that can occur when reading or updating the roster
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// No customer with this name exists
    #[error("Customer not found: {0}")]
    NotFound(String),
}

/// Result type alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
