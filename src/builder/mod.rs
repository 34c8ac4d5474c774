//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and the `state_enum!` macro for
//! declaring machines with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::State;
use crate::machine::Transition;

/// Create a row with a single source state.
///
/// # Example
///
/// ```
/// use turnstile::builder::simple_transition;
/// use turnstile::state_enum;
///
/// state_enum! {
///     enum Level {
///         Start,
///         Middle,
///     }
/// }
///
/// let transition = simple_transition("start", Level::Start, Level::Middle);
/// assert!(transition.matches("start", &Level::Start));
/// ```
pub fn simple_transition<S: State>(event: impl Into<String>, from: S, to: S) -> Transition<S> {
    Transition::new(event, [from], to)
}
