//! Customer Routes
//!
//! Read-only views of the roster.
//!
//! - GET /api/v1/customers - Customer table
//! - GET /api/v1/customers/:name - Customer details

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CustomerDetailResponse, CustomerListResponse, CustomerRow};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::roster::Column;

/// GET /api/v1/customers
///
/// List the roster in display order with 1-based row numbers.
pub async fn list_customers(State(state): State<Arc<AppState>>) -> Json<CustomerListResponse> {
    let session = state.session.read().await;

    let customers: Vec<CustomerRow> = session
        .customers()
        .iter()
        .enumerate()
        .map(|(i, c)| CustomerRow::from_customer(i + 1, c))
        .collect();

    Json(CustomerListResponse {
        columns: Column::required().iter().map(|c| c.to_string()).collect(),
        total: customers.len(),
        customers,
    })
}

/// GET /api/v1/customers/:name
///
/// Details, contact information and notes for one customer.
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<CustomerDetailResponse>> {
    let session = state.session.read().await;
    let customer = session.customer(&name)?;

    Ok(Json(CustomerDetailResponse::new(customer, session.note(&name))))
}
