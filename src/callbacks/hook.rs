//! Typed keys for the callback registry.

use crate::core::{Event, State};
use std::fmt;

/// Where in a transition attempt a callback runs.
///
/// Guards (`Before*`, `Leave*`) run before the state changes and may veto
/// the transition. Observers (`Enter*`, `After*`) run once the state has
/// changed and can only report failure.
///
/// Dispatch order within one `fire`:
///
/// 1. `BeforeEvent(event)`
/// 2. `BeforeAny`
/// 3. `LeaveState(source)`
/// 4. `LeaveAny`
/// 5. the state changes
/// 6. `EnterState(destination)`
/// 7. `EnterAny`
/// 8. `AfterEvent(event)`
/// 9. `AfterAny`
///
/// `Display` renders the conventional string key (`before_Timeout`,
/// `enter_state`, ...), which is what logs and errors show.
#[derive(Clone, Debug, PartialEq)]
pub enum Hook<S: State> {
    BeforeEvent(String),
    BeforeAny,
    LeaveState(S),
    LeaveAny,
    EnterState(S),
    EnterAny,
    AfterEvent(String),
    AfterAny,
}

impl<S: State> Hook<S> {
    /// Whether this hook may veto a transition.
    pub fn is_guard(&self) -> bool {
        matches!(
            self,
            Self::BeforeEvent(_) | Self::BeforeAny | Self::LeaveState(_) | Self::LeaveAny
        )
    }

    /// Guard hooks for `event`, in dispatch order.
    pub(crate) fn guards_for(event: &Event<S>) -> [Hook<S>; 4] {
        [
            Self::BeforeEvent(event.name.clone()),
            Self::BeforeAny,
            Self::LeaveState(event.from.clone()),
            Self::LeaveAny,
        ]
    }

    /// Observer hooks for `event`, in dispatch order.
    pub(crate) fn observers_for(event: &Event<S>) -> [Hook<S>; 4] {
        [
            Self::EnterState(event.to.clone()),
            Self::EnterAny,
            Self::AfterEvent(event.name.clone()),
            Self::AfterAny,
        ]
    }
}

impl<S: State> fmt::Display for Hook<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeEvent(name) => write!(f, "before_{name}"),
            Self::BeforeAny => f.write_str("before_event"),
            Self::LeaveState(state) => write!(f, "leave_{}", state.name()),
            Self::LeaveAny => f.write_str("leave_state"),
            Self::EnterState(state) => write!(f, "enter_{}", state.name()),
            Self::EnterAny => f.write_str("enter_state"),
            Self::AfterEvent(name) => write!(f, "after_{name}"),
            Self::AfterAny => f.write_str("after_event"),
        }
    }
}
