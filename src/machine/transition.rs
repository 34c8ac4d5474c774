//! Transition table entries.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// One row of the transition table: `event` moves the machine from any of
/// `sources` to `to`.
///
/// Rows are not validated. A row with no sources, or a row fully shadowed by
/// an earlier one, is accepted and simply never fires.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    pub event: String,
    pub sources: Vec<S>,
    pub to: S,
}

impl<S: State> Transition<S> {
    pub fn new(event: impl Into<String>, sources: impl IntoIterator<Item = S>, to: S) -> Self {
        Self {
            event: event.into(),
            sources: sources.into_iter().collect(),
            to,
        }
    }

    /// Whether `state` is one of this row's sources (pure)
    pub fn allows_from(&self, state: &S) -> bool {
        self.sources.contains(state)
    }

    /// Whether this row handles `event` submitted in `current` (pure)
    pub fn matches(&self, event: &str, current: &S) -> bool {
        self.event == event && self.allows_from(current)
    }
}
