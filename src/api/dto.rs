//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::roster::{format_arr, format_score, Customer};
use crate::scoring::{HealthInputs, Slider, NPS, TICKET_LOAD, USAGE};

// ============================================
// CUSTOMER DTOs
// ============================================

/// One row of the customer table
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CustomerRow {
    /// 1-based display position
    pub row: usize,
    pub name: String,
    pub arr: u64,
    /// ARR formatted for display, e.g. "$120,000"
    pub arr_display: String,
    pub csm: String,
    pub health_score: f64,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CustomerRow {
    pub fn from_customer(row: usize, customer: &Customer) -> Self {
        Self {
            row,
            name: customer.name.clone(),
            arr: customer.arr,
            arr_display: format_arr(customer.arr),
            csm: customer.csm.clone(),
            health_score: customer.health_score,
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
        }
    }
}

/// Customer table response
#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerListResponse {
    /// Column headers in display order
    pub columns: Vec<String>,
    pub customers: Vec<CustomerRow>,
    pub total: usize,
}

/// Contact block of the detail view
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Single customer detail view
#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerDetailResponse {
    pub name: String,
    pub csm: String,
    pub arr: u64,
    pub arr_display: String,
    pub health_score: f64,
    /// Score formatted for display, e.g. "8.4 / 10"
    pub health_display: String,
    pub contact: ContactInfo,
    pub notes: String,
}

impl CustomerDetailResponse {
    pub fn new(customer: &Customer, notes: &str) -> Self {
        Self {
            name: customer.name.clone(),
            csm: customer.csm.clone(),
            arr: customer.arr,
            arr_display: format_arr(customer.arr),
            health_score: customer.health_score,
            health_display: format_score(customer.health_score),
            contact: ContactInfo {
                email: customer.email.clone(),
                phone: customer.phone.clone(),
                address: customer.address.clone(),
            },
            notes: notes.to_string(),
        }
    }
}

// ============================================
// HEALTH SCORE DTOs
// ============================================

/// Slider readings; omitted fields take the slider default
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default = "default_usage")]
    pub usage: f64,
    #[serde(default = "default_ticket_load")]
    pub ticket_load: f64,
    #[serde(default = "default_nps")]
    pub nps: f64,
}

fn default_usage() -> f64 {
    USAGE.default
}

fn default_ticket_load() -> f64 {
    TICKET_LOAD.default
}

fn default_nps() -> f64 {
    NPS.default
}

impl From<ScoreRequest> for HealthInputs {
    fn from(req: ScoreRequest) -> Self {
        HealthInputs::new(req.usage, req.ticket_load, req.nps)
    }
}

/// Slider definitions
#[derive(Debug, Serialize)]
pub struct SliderListResponse {
    pub sliders: Vec<Slider>,
}

/// Result of a stateless score computation
#[derive(Debug, Serialize, Deserialize)]
pub struct ComputeResponse {
    pub inputs: HealthInputs,
    pub score: f64,
    pub score_display: String,
}

/// Stored versus proposed score for one customer
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub customer: String,
    pub current: f64,
    pub current_display: String,
    pub proposed: f64,
    pub proposed_display: String,
}

/// Confirmation of a health score save
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveScoreResponse {
    pub status: String,
    pub customer: String,
    pub health_score: f64,
    pub message: String,
    /// Save time (ms since epoch)
    pub saved_at: i64,
}

// ============================================
// NOTES DTOs
// ============================================

/// Notes for one customer
#[derive(Debug, Serialize, Deserialize)]
pub struct NotesResponse {
    pub customer: String,
    pub text: String,
}

/// Replace a customer's notes
#[derive(Debug, Deserialize)]
pub struct SaveNotesRequest {
    #[serde(default)]
    pub text: String,
}

/// Confirmation of a notes save
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveNotesResponse {
    pub status: String,
    pub customer: String,
    pub message: String,
    /// Save time (ms since epoch)
    pub saved_at: i64,
}

// ============================================
// SESSION / HEALTH DTOs
// ============================================

/// Result of re-initializing the session
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub reseeded: bool,
    pub customers: usize,
}

/// Service health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub customers: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
