//! Record of committed transitions.
//!
//! Only transitions that actually moved the machine are recorded. Rejected
//! and vetoed events leave no trace here.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use turnstile::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     event: "Next".to_string(),
///     from: "init".to_string(),
///     to: "logo".to_string(),
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The event that caused the transition
    pub event: String,
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the state changed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// History is immutable: `record` returns a new history with the transition
/// appended and leaves `self` untouched.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     event: "start".to_string(),
///     from: "start".to_string(),
///     to: "middle".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(StateTransition {
///     event: "middle".to_string(),
///     from: "middle".to_string(),
///     to: "end".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path: Vec<&str> = history.get_path().into_iter().map(|s| s.as_str()).collect();
/// assert_eq!(path, vec!["start", "middle", "end"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append in place; used by the machine, which owns its history.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Names of the events that moved the machine, oldest first.
    pub fn events(&self) -> Vec<&str> {
        self.transitions.iter().map(|t| t.event.as_str()).collect()
    }

    /// Time between the first and last recorded transition.
    ///
    /// `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Get all transitions in the order they were committed.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
