//! Core roster types
//!
//! - `Customer`: one account in the book of business
//! - `Column`: the attributes every roster row must carry

use serde::{Deserialize, Serialize};

/// A single customer account
///
/// The name is the identity key; only `health_score` changes after seeding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    /// Account name, unique within the roster
    pub name: String,
    /// Annual recurring revenue in whole dollars
    pub arr: u64,
    /// Assigned customer-success manager
    pub csm: String,
    /// Health score, nominally 0-10
    pub health_score: f64,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Customer {
    /// Create a customer with contact details left blank
    pub fn new(name: impl Into<String>, arr: u64, csm: impl Into<String>, health_score: f64) -> Self {
        Self {
            name: name.into(),
            arr,
            csm: csm.into(),
            health_score,
            email: String::new(),
            phone: String::new(),
            address: String::new(),
        }
    }

    /// Builder method: set email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builder method: set phone
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Builder method: set address
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

/// A roster attribute column
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Customer,
    Arr,
    Csm,
    HealthScore,
    Email,
    Phone,
    Address,
}

impl Column {
    /// Columns every roster must have, in display order
    pub fn required() -> &'static [Column] {
        &[
            Column::Customer,
            Column::Arr,
            Column::Csm,
            Column::HealthScore,
            Column::Email,
            Column::Phone,
            Column::Address,
        ]
    }

    /// Table header label
    pub fn label(&self) -> &'static str {
        match self {
            Column::Customer => "Customer",
            Column::Arr => "ARR",
            Column::Csm => "CSM",
            Column::HealthScore => "Health Score",
            Column::Email => "Email",
            Column::Phone => "Phone",
            Column::Address => "Address",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_builder() {
        let customer = Customer::new("Acme", 1000, "Dane", 5.0)
            .email("a@acme.test")
            .phone("(208) 555-0000")
            .address("1 Main St");

        assert_eq!(customer.name, "Acme");
        assert_eq!(customer.email, "a@acme.test");
        assert_eq!(customer.phone, "(208) 555-0000");
        assert_eq!(customer.address, "1 Main St");
    }

    #[test]
    fn test_required_columns_order() {
        let labels: Vec<_> = Column::required().iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Customer", "ARR", "CSM", "Health Score", "Email", "Phone", "Address"]
        );
    }
}
