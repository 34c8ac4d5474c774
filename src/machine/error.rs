//! Errors returned by `StateMachine::fire`.

use crate::callbacks::CallbackFailure;
use thiserror::Error;

/// Why a submitted event did not complete cleanly.
///
/// `InvalidTransition` and `Cancelled` leave the machine exactly where it
/// was. `CallbackError` is different when it comes from an enter or after
/// hook: the machine has already moved to the destination and stays there.
/// Check [`FireError::state_changed`] before retrying.
#[derive(Debug, Error)]
pub enum FireError {
    #[error("event '{event}' inappropriate in current state '{state}'")]
    InvalidTransition { event: String, state: String },

    #[error("event '{event}' in state '{state}' cancelled by {hook}")]
    Cancelled {
        event: String,
        state: String,
        hook: String,
    },

    #[error("{hook} failed in state '{state}': {source}")]
    CallbackError {
        hook: String,
        /// Current state when the callback failed
        state: String,
        /// Whether the machine had already moved when the callback failed
        state_changed: bool,
        #[source]
        source: CallbackFailure,
    },
}

impl FireError {
    /// True when the machine's current state differs from before the call.
    pub fn state_changed(&self) -> bool {
        matches!(
            self,
            Self::CallbackError {
                state_changed: true,
                ..
            }
        )
    }

    /// Name of the machine's current state at the time of failure.
    pub fn state(&self) -> &str {
        match self {
            Self::InvalidTransition { state, .. }
            | Self::Cancelled { state, .. }
            | Self::CallbackError { state, .. } => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_event_and_state() {
        let err = FireError::InvalidTransition {
            event: "start".to_string(),
            state: "middle".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "event 'start' inappropriate in current state 'middle'"
        );

        let err = FireError::Cancelled {
            event: "Timeout".to_string(),
            state: "title".to_string(),
            hook: "before_Timeout".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "event 'Timeout' in state 'title' cancelled by before_Timeout"
        );
        assert!(!err.state_changed());
    }

    #[test]
    fn callback_error_keeps_source() {
        let err = FireError::CallbackError {
            hook: "enter_state".to_string(),
            state: "demo".to_string(),
            state_changed: true,
            source: "printer on fire".into(),
        };

        assert!(err.state_changed());
        assert_eq!(err.state(), "demo");
        assert_eq!(
            std::error::Error::source(&err).map(ToString::to_string),
            Some("printer on fire".to_string())
        );
    }
}
