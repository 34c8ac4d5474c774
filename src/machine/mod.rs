//! The state machine and its transition table.
//!
//! # Key Concepts
//!
//! - **Transitions**: ordered `(event, sources, destination)` rows; the first
//!   row matching the submitted event and the current state wins
//! - **State Machine**: owns the current state, fires events, dispatches
//!   callbacks and records history
//! - **Errors**: every outcome other than success is a [`FireError`] value

#[allow(clippy::module_inception)]
mod machine;
mod error;
mod transition;

pub use error::FireError;
pub use machine::StateMachine;
pub use transition::Transition;
