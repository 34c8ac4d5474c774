//! Failure types produced by callbacks.

use std::any::Any;
use thiserror::Error;

/// Error returned by an observer callback.
pub type CallbackFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A callback panicked while the machine was dispatching it.
///
/// The panic is caught at the dispatch boundary and surfaced as an ordinary
/// error value so that `fire` never unwinds into the caller.
#[derive(Debug, Error)]
#[error("callback panicked: {message}")]
pub struct CallbackPanic {
    pub message: String,
}

impl CallbackPanic {
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_messages_are_preserved() {
        let panic = CallbackPanic::from_payload(Box::new("boom"));
        assert_eq!(panic.message, "boom");

        let panic = CallbackPanic::from_payload(Box::new(String::from("owned boom")));
        assert_eq!(panic.to_string(), "callback panicked: owned boom");

        let panic = CallbackPanic::from_payload(Box::new(42_u32));
        assert_eq!(panic.message, "non-string panic payload");
    }
}
