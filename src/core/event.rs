//! The candidate transition handed to callbacks.

use super::state::State;
use serde::{Deserialize, Serialize};

/// A named event resolved against the transition table.
///
/// Guards see it before the machine moves and may veto it. Observers see
/// the same value after the machine has moved, so `from` is the previous
/// state and `to` is the new current state.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Event;
///
/// let event = Event::new("Next", "logo".to_string(), "title".to_string());
/// assert_eq!(event.name, "Next");
/// assert!(!event.is_self_transition());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Event<S: State> {
    /// Name of the submitted event
    pub name: String,
    /// State the machine was in when the event was submitted
    pub from: S,
    /// Destination taken from the matching table entry
    pub to: S,
}

impl<S: State> Event<S> {
    pub fn new(name: impl Into<String>, from: S, to: S) -> Self {
        Self {
            name: name.into(),
            from,
            to,
        }
    }

    /// True when the destination equals the source.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}
