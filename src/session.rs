//! Dashboard Session
//!
//! Owns the roster and notes for one interactive session. Reads never
//! mutate; scores and notes change only through the `save_*` methods.

use serde::Serialize;

use crate::notes::NotesStore;
use crate::roster::{Customer, RosterError, RosterResult, RosterStore};
use crate::scoring::HealthInputs;

/// Stored score next to the score the current sliders would produce
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ScoreProposal {
    pub current: f64,
    pub proposed: f64,
}

/// Session state: the roster and its notes
#[derive(Debug, Clone)]
pub struct Session {
    roster: RosterStore,
    notes: NotesStore,
}

impl Session {
    /// Start a session from the seed roster
    pub fn new() -> Self {
        Self::with_roster(RosterStore::new())
    }

    /// Start a session over an existing roster, reseeding it if it has drifted
    pub fn with_roster(roster: RosterStore) -> Self {
        let mut session = Self {
            roster,
            notes: NotesStore::new(),
        };
        session.initialize();
        session
    }

    /// Re-run roster and notes initialization
    ///
    /// Returns true when the roster was reseeded.
    pub fn initialize(&mut self) -> bool {
        let reseeded = self.roster.initialize();
        self.notes.initialize(self.roster.names());
        reseeded
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn notes(&self) -> &NotesStore {
        &self.notes
    }

    pub fn customers(&self) -> &[Customer] {
        self.roster.list()
    }

    pub fn customer(&self, name: &str) -> RosterResult<&Customer> {
        self.roster.get(name)
    }

    /// Preview a new score for `name` without saving it
    pub fn propose_health_score(
        &self,
        name: &str,
        inputs: &HealthInputs,
    ) -> RosterResult<ScoreProposal> {
        let customer = self.roster.get(name)?;
        Ok(ScoreProposal {
            current: customer.health_score,
            proposed: inputs.score(),
        })
    }

    /// Compute and store a new score for `name`, returning the stored value
    pub fn save_health_score(&mut self, name: &str, inputs: &HealthInputs) -> RosterResult<f64> {
        let score = inputs.score();
        self.roster.update_health_score(name, score)?;
        tracing::info!(customer = %name, score, "Saved health score");
        Ok(score)
    }

    /// Note text for `name`
    pub fn note(&self, name: &str) -> &str {
        self.notes.get(name)
    }

    /// Replace the note for a customer on the roster
    pub fn save_notes(&mut self, name: &str, text: impl Into<String>) -> RosterResult<()> {
        if !self.roster.contains(name) {
            return Err(RosterError::NotFound(name.to_string()));
        }
        let text = text.into();
        tracing::info!(customer = %name, length = text.len(), "Saved notes");
        self.notes.set(name, text);
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Column, Roster};

    #[test]
    fn test_new_session_seeded() {
        let session = Session::new();
        assert_eq!(session.customers().len(), 5);
        for customer in session.customers() {
            assert_eq!(session.note(&customer.name), "");
            assert!(session.notes().contains(&customer.name));
        }
    }

    #[test]
    fn test_propose_does_not_mutate() {
        let session = Session::new();
        let inputs = HealthInputs::new(5.0, 2.0, 7.0);

        let proposal = session
            .propose_health_score("Summit Ridge Financial", &inputs)
            .unwrap();
        assert_eq!(proposal.current, 8.4);
        assert_eq!(proposal.proposed, 6.3);
        assert_eq!(session.customer("Summit Ridge Financial").unwrap().health_score, 8.4);
    }

    #[test]
    fn test_save_health_score() {
        let mut session = Session::new();
        let saved = session
            .save_health_score("Pioneer Analytics Group", &HealthInputs::new(10.0, 0.0, 10.0))
            .unwrap();

        assert_eq!(saved, 10.0);
        assert_eq!(session.customer("Pioneer Analytics Group").unwrap().health_score, 10.0);
    }

    #[test]
    fn test_save_health_score_unknown() {
        let mut session = Session::new();
        let err = session
            .save_health_score("Nonexistent Co", &HealthInputs::default())
            .unwrap_err();
        assert_eq!(err, RosterError::NotFound("Nonexistent Co".to_string()));
    }

    #[test]
    fn test_save_notes() {
        let mut session = Session::new();
        session.save_notes("BluePeak Holdings", "hello").unwrap();

        assert_eq!(session.note("BluePeak Holdings"), "hello");
        assert_eq!(session.note("Summit Ridge Financial"), "");
    }

    #[test]
    fn test_save_notes_unknown() {
        let mut session = Session::new();
        assert!(session.save_notes("Nonexistent Co", "x").is_err());
        assert!(!session.notes().contains("Nonexistent Co"));
    }

    #[test]
    fn test_reinitialize_keeps_state() {
        let mut session = Session::new();
        session.save_notes("BluePeak Holdings", "keep me").unwrap();
        session
            .save_health_score("BluePeak Holdings", &HealthInputs::default())
            .unwrap();

        assert!(!session.initialize());
        assert_eq!(session.note("BluePeak Holdings"), "keep me");
        assert_eq!(session.customer("BluePeak Holdings").unwrap().health_score, 6.3);
    }

    #[test]
    fn test_drifted_roster_reseeded_with_notes() {
        let legacy = Roster::with_columns(
            vec![Column::Customer, Column::Arr],
            vec![Customer::new("Old Co", 1, "Dane", 3.0)],
        );
        let session = Session::with_roster(RosterStore::from_roster(legacy));

        assert_eq!(session.customers().len(), 5);
        assert!(session.customer("Old Co").is_err());
        assert!(session.notes().contains("SilverLine Investment Partners"));
        assert!(!session.notes().contains("Old Co"));
    }
}
