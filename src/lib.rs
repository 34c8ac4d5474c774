//! Turnstile: an event-driven finite state machine
//!
//! A machine holds one current state, an ordered transition table and a
//! registry of typed callbacks. Callers submit named events; the machine
//! looks up the first matching row, lets guards veto the move, changes
//! state, and then notifies observers.
//!
//! # Core Concepts
//!
//! - **State**: any type implementing [`State`]; `String` works out of the box
//! - **Transition**: `(event, sources, destination)` rows, first match wins
//! - **Callbacks**: guards and observers keyed by [`Hook`]
//! - **History**: every committed transition, with a timestamp
//!
//! # Example
//!
//! ```rust
//! use turnstile::{Callbacks, FireError, StateMachine, Transition};
//!
//! let s = |name: &str| name.to_string();
//!
//! let mut machine = StateMachine::new(
//!     s("start"),
//!     vec![
//!         Transition::new("start", [s("start")], s("middle")),
//!         Transition::new("middle", [s("start")], s("end")),
//!         Transition::new("end", [s("end"), s("start")], s("finish")),
//!         Transition::new("finish", [s("finish"), s("middle")], s("finish")),
//!     ],
//!     Callbacks::new(),
//! );
//!
//! assert_eq!(machine.fire("start").unwrap(), "middle");
//! assert!(matches!(
//!     machine.fire("start"),
//!     Err(FireError::InvalidTransition { .. })
//! ));
//! assert_eq!(machine.current(), "middle");
//! ```

pub mod builder;
pub mod callbacks;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use callbacks::{CallbackFailure, Callbacks, Hook, Verdict};
pub use crate::core::{Event, State, StateHistory, StateTransition};
pub use machine::{FireError, StateMachine, Transition};
pub use validation::TableIssue;
