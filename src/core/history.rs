//! Transition history tracking.
//!
//! The machine records every committed hop, including the autonomous hops a
//! chain of transient states makes, so callers and tests can see the exact
//! visit order after a call returns. This is in-memory diagnostics only; the
//! machine persists nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single committed transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Id of the state that was left.
    pub from: String,
    /// Id of the state that was entered.
    pub to: String,
    /// The symbol that fired the transition.
    pub symbol: String,
    /// When the transition committed.
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    records: Vec<TransitionRecord>,
}

impl StateHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, record: TransitionRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The sequence of state ids visited: the starting state of the first
    /// record, then the target of every record in order. Empty if nothing has
    /// been recorded yet.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Number of committed transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any transition has committed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &str, to: &str, symbol: &str) -> TransitionRecord {
        TransitionRecord {
            from: from.into(),
            to: to.into(),
            symbol: symbol.into(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn path_includes_the_starting_state() {
        let mut history = StateHistory::new();
        history.record(record("q0", "q1", "up"));
        history.record(record("q1", "q2", "up"));

        assert_eq!(history.path(), vec!["q0", "q1", "q2"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn empty_history_has_an_empty_path() {
        let history = StateHistory::new();

        assert!(history.is_empty());
        assert!(history.path().is_empty());
    }

    #[test]
    fn records_preserve_order_and_symbols() {
        let mut history = StateHistory::new();
        history.record(record("a", "b", "go"));
        history.record(record("b", "a", "back"));

        let symbols: Vec<&str> = history
            .records()
            .iter()
            .map(|r| r.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["go", "back"]);
    }

    #[test]
    fn history_round_trips_through_serde() {
        let mut history = StateHistory::new();
        history.record(record("a", "b", "go"));

        let json = serde_json::to_string(&history).unwrap();
        let restored: StateHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.records(), history.records());
    }
}
