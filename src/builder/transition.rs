//! Builder for constructing table entries.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::machine::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State> {
    event: Option<String>,
    sources: Vec<S>,
    to: Option<S>,
}

impl<S: State> TransitionBuilder<S> {
    pub fn new() -> Self {
        Self {
            event: None,
            sources: Vec::new(),
            to: None,
        }
    }

    /// Set the event name (required).
    pub fn event(mut self, name: impl Into<String>) -> Self {
        self.event = Some(name.into());
        self
    }

    /// Add a source state. At least one is required; call repeatedly for
    /// more.
    pub fn from(mut self, state: S) -> Self {
        self.sources.push(state);
        self
    }

    /// Add several source states at once.
    pub fn from_any(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.sources.extend(states);
        self
    }

    /// Set the destination state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    pub fn build(self) -> Result<Transition<S>, BuildError> {
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        if self.sources.is_empty() {
            return Err(BuildError::MissingFromState);
        }
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            event,
            sources: self.sources,
            to,
        })
    }
}

impl<S: State> Default for TransitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
