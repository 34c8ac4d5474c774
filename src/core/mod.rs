//! Core value types shared by the machine and its callbacks.
//!
//! - State definitions via the `State` trait
//! - `Event`, the candidate transition passed to every callback
//! - Immutable history of committed transitions
//!
//! Nothing in this module has side effects.

mod event;
mod history;
mod state;

pub use event::Event;
pub use history::{StateHistory, StateTransition};
pub use state::State;
