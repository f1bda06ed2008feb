//! Roster Store
//!
//! Holds the session's customer table. Records keep insertion order for
//! display and are indexed by name for lookups.

use std::collections::HashMap;

use super::error::{RosterError, RosterResult};
use super::seed::seed_customers;
use super::types::{Column, Customer};

/// An ordered customer table with the columns it was built with
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    columns: Vec<Column>,
    customers: Vec<Customer>,
    /// name -> position in `customers`
    index: HashMap<String, usize>,
}

impl Roster {
    /// Build a roster carrying every required column
    pub fn new(customers: Vec<Customer>) -> Self {
        Self::with_columns(Column::required().to_vec(), customers)
    }

    /// Build a roster from a table whose schema may predate the current one
    ///
    /// If a name repeats, lookups resolve to its first occurrence.
    pub fn with_columns(columns: Vec<Column>, customers: Vec<Customer>) -> Self {
        let mut index = HashMap::with_capacity(customers.len());
        for (pos, customer) in customers.iter().enumerate() {
            index.entry(customer.name.clone()).or_insert(pos);
        }

        Self {
            columns,
            customers,
            index,
        }
    }

    /// Roster built from the seed customers
    pub fn seeded() -> Self {
        Self::new(seed_customers())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Required columns this roster lacks
    pub fn missing_columns(&self) -> Vec<Column> {
        Column::required()
            .iter()
            .filter(|c| !self.columns.contains(c))
            .copied()
            .collect()
    }

    /// Whether every required column is present
    pub fn is_complete(&self) -> bool {
        self.missing_columns().is_empty()
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    fn position(&self, name: &str) -> RosterResult<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| RosterError::NotFound(name.to_string()))
    }
}

/// Session roster state
///
/// Starts empty; `initialize` loads the seed set.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    roster: Option<Roster>,
}

impl RosterStore {
    /// Create a store with no roster loaded yet
    pub fn new() -> Self {
        Self { roster: None }
    }

    /// Wrap a roster carried over from earlier in the session
    pub fn from_roster(roster: Roster) -> Self {
        Self {
            roster: Some(roster),
        }
    }

    /// Seed the roster if absent or if its schema is missing a required column
    ///
    /// A drifted roster is replaced wholesale; in-session edits are lost.
    /// Returns true when the roster was (re)seeded.
    pub fn initialize(&mut self) -> bool {
        match &self.roster {
            None => {
                tracing::debug!("Seeding roster");
            }
            Some(roster) if !roster.is_complete() => {
                let missing: Vec<String> =
                    roster.missing_columns().iter().map(|c| c.to_string()).collect();
                tracing::warn!(
                    missing = ?missing,
                    "Stored roster is missing required columns, reseeding from defaults"
                );
            }
            Some(_) => return false,
        }

        self.roster = Some(Roster::seeded());
        true
    }

    /// All customers in insertion order
    pub fn list(&self) -> &[Customer] {
        self.roster.as_ref().map(Roster::customers).unwrap_or(&[])
    }

    /// Look up a customer by exact name
    pub fn get(&self, name: &str) -> RosterResult<&Customer> {
        let roster = self
            .roster
            .as_ref()
            .ok_or_else(|| RosterError::NotFound(name.to_string()))?;
        let pos = roster.position(name)?;
        Ok(&roster.customers[pos])
    }

    /// Overwrite one customer's health score. The value is stored as given.
    pub fn update_health_score(&mut self, name: &str, score: f64) -> RosterResult<()> {
        let roster = self
            .roster
            .as_mut()
            .ok_or_else(|| RosterError::NotFound(name.to_string()))?;
        let pos = roster.position(name)?;
        roster.customers[pos].health_score = score;
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roster
            .as_ref()
            .map(|r| r.index.contains_key(name))
            .unwrap_or(false)
    }

    /// Customer names in display order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.list().iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> RosterStore {
        let mut store = RosterStore::new();
        store.initialize();
        store
    }

    #[test]
    fn test_initialize_seeds_empty_store() {
        let mut store = RosterStore::new();
        assert!(store.is_empty());

        assert!(store.initialize());
        assert_eq!(store.len(), 5);
        assert_eq!(store.list()[0].name, "Summit Ridge Financial");
        assert_eq!(store.list()[4].name, "SilverLine Investment Partners");
    }

    #[test]
    fn test_initialize_idempotent() {
        let mut store = seeded_store();
        let first = store.list().to_vec();

        assert!(!store.initialize());
        assert_eq!(store.list(), first.as_slice());
    }

    #[test]
    fn test_initialize_keeps_edits_without_drift() {
        let mut store = seeded_store();
        store.update_health_score("BluePeak Holdings", 9.9).unwrap();

        store.initialize();
        assert_eq!(store.get("BluePeak Holdings").unwrap().health_score, 9.9);
    }

    #[test]
    fn test_initialize_reseeds_on_schema_drift() {
        let legacy_columns = vec![Column::Customer, Column::Arr, Column::Csm, Column::HealthScore];
        let legacy = Roster::with_columns(
            legacy_columns,
            vec![Customer::new("Old Co", 10, "Dane", 1.0)],
        );
        assert_eq!(
            legacy.missing_columns(),
            vec![Column::Email, Column::Phone, Column::Address]
        );

        let mut store = RosterStore::from_roster(legacy);
        assert!(store.initialize());

        assert_eq!(store.len(), 5);
        assert!(!store.contains("Old Co"));
        assert_eq!(store.get("BluePeak Holdings").unwrap().email, "info@bluepeakholdings.com");
    }

    #[test]
    fn test_get_exact_match() {
        let store = seeded_store();
        let customer = store.get("Evergreen Capital Advisors").unwrap();
        assert_eq!(customer.arr, 76_000);
        assert_eq!(customer.phone, "(208) 555-3030");
    }

    #[test]
    fn test_get_not_found() {
        let store = seeded_store();
        assert_eq!(
            store.get("Nonexistent Co"),
            Err(RosterError::NotFound("Nonexistent Co".to_string()))
        );
    }

    #[test]
    fn test_get_case_sensitive() {
        let store = seeded_store();
        assert!(store.get("bluepeak holdings").is_err());
    }

    #[test]
    fn test_get_before_initialize() {
        let store = RosterStore::new();
        assert!(matches!(store.get("BluePeak Holdings"), Err(RosterError::NotFound(_))));
    }

    #[test]
    fn test_update_health_score_only_touches_target() {
        let mut store = seeded_store();
        let before = store.list().to_vec();

        store.update_health_score("Summit Ridge Financial", 9.3).unwrap();

        assert_eq!(store.get("Summit Ridge Financial").unwrap().health_score, 9.3);
        for (old, new) in before.iter().zip(store.list()).skip(1) {
            assert_eq!(old, new);
        }
    }

    #[test]
    fn test_update_health_score_accepts_any_value() {
        let mut store = seeded_store();
        store.update_health_score("BluePeak Holdings", 42.0).unwrap();
        assert_eq!(store.get("BluePeak Holdings").unwrap().health_score, 42.0);
    }

    #[test]
    fn test_update_health_score_not_found() {
        let mut store = seeded_store();
        let err = store.update_health_score("Nonexistent Co", 5.0).unwrap_err();
        assert_eq!(err, RosterError::NotFound("Nonexistent Co".to_string()));
    }

    #[test]
    fn test_names_in_order() {
        let store = seeded_store();
        let names: Vec<_> = store.names().collect();
        assert_eq!(names[1], "Pioneer Analytics Group");
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let roster = Roster::new(vec![
            Customer::new("Twin", 1, "Dane", 1.0),
            Customer::new("Twin", 2, "Dane", 2.0),
        ]);
        let store = RosterStore::from_roster(roster);
        assert_eq!(store.get("Twin").unwrap().arr, 1);
    }
}
