//! Event-driven state machine.

use crate::builder::StateMachineBuilder;
use crate::callbacks::{Callbacks, Hook, Verdict};
use crate::core::{Event, State, StateHistory, StateTransition};
use crate::machine::error::FireError;
use crate::machine::transition::Transition;
use crate::validation::{self, TableValidation};
use chrono::Utc;
use tracing::{debug, trace, warn};

/// State machine driven by named events.
///
/// Holds exactly one current state, an ordered transition table that never
/// changes after construction, and a callback registry. The only way the
/// state moves is a successful [`fire`](Self::fire) (or an explicit
/// [`set_state`](Self::set_state)).
///
/// The machine assumes exclusive access: `fire` takes `&mut self` and does no
/// locking of its own. Wrap it in a `Mutex` to share it between threads.
///
/// # Example
///
/// ```rust
/// use turnstile::{Callbacks, FireError, StateMachine, Transition, Verdict};
///
/// let mut machine = StateMachine::new(
///     "title".to_string(),
///     vec![
///         Transition::new("Timeout", ["title".to_string()], "demo".to_string()),
///         Transition::new("Start", ["title".to_string()], "gameStart".to_string()),
///     ],
///     Callbacks::new().before_event("Timeout", |_| Verdict::Cancel),
/// );
///
/// assert!(matches!(machine.fire("Timeout"), Err(FireError::Cancelled { .. })));
/// assert_eq!(machine.current(), "title");
///
/// machine.fire("Start").unwrap();
/// assert_eq!(machine.current(), "gameStart");
/// ```
#[derive(Debug)]
pub struct StateMachine<S: State> {
    current: S,
    transitions: Vec<Transition<S>>,
    callbacks: Callbacks<S>,
    history: StateHistory<S>,
}

impl<S: State> StateMachine<S> {
    /// Create a machine in `initial`.
    ///
    /// The table is taken as is. `initial` need not appear in it, and
    /// duplicate or unreachable rows are accepted; see
    /// [`validate`](Self::validate) for an opt-in check.
    pub fn new(initial: S, transitions: Vec<Transition<S>>, callbacks: Callbacks<S>) -> Self {
        Self {
            current: initial,
            transitions,
            callbacks,
            history: StateHistory::new(),
        }
    }

    pub fn builder() -> StateMachineBuilder<S> {
        StateMachineBuilder::new()
    }

    /// Get current state (pure)
    pub fn current(&self) -> &S {
        &self.current
    }

    /// Check whether the machine is in `state` (pure)
    pub fn is(&self, state: &S) -> bool {
        self.current == *state
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Whether `event` has a table entry for the current state.
    ///
    /// Callbacks are not consulted, so a guard may still cancel an event for
    /// which this returns `true`.
    pub fn can_fire(&self, event: &str) -> bool {
        self.find(event).is_some()
    }

    pub fn cannot_fire(&self, event: &str) -> bool {
        !self.can_fire(event)
    }

    /// Events with a table entry for the current state, in table order.
    pub fn available_events(&self) -> Vec<&str> {
        let mut events: Vec<&str> = Vec::new();
        for transition in &self.transitions {
            if transition.allows_from(&self.current) && !events.contains(&transition.event.as_str())
            {
                events.push(&transition.event);
            }
        }
        events
    }

    /// Submit `event` and perform the transition it names.
    ///
    /// The first table entry whose event matches and whose sources contain
    /// the current state is used. Guards run in the order `before_<event>`,
    /// `before_event`, `leave_<state>`, `leave_state`; the first `Cancel`
    /// stops the attempt with the state untouched. The state then changes
    /// and observers run in the order `enter_<state>`, `enter_state`,
    /// `after_<event>`, `after_event`.
    ///
    /// An observer failure (error or panic) is returned as
    /// [`FireError::CallbackError`] and skips the remaining observers. The
    /// new state is kept: there is no rollback.
    pub fn fire(&mut self, event: &str) -> Result<&S, FireError> {
        let Some(transition) = self.find(event) else {
            trace!(event, state = self.current.name(), "no transition for event");
            return Err(FireError::InvalidTransition {
                event: event.to_string(),
                state: self.current.name().to_string(),
            });
        };
        let candidate = Event::new(event, self.current.clone(), transition.to.clone());

        for hook in Hook::guards_for(&candidate) {
            let verdict = self
                .callbacks
                .run_guard(&hook, &candidate)
                .map_err(|source| FireError::CallbackError {
                    hook: hook.to_string(),
                    state: self.current.name().to_string(),
                    state_changed: false,
                    source,
                })?;

            if verdict == Verdict::Cancel {
                trace!(event, state = self.current.name(), hook = %hook, "transition cancelled");
                return Err(FireError::Cancelled {
                    event: event.to_string(),
                    state: self.current.name().to_string(),
                    hook: hook.to_string(),
                });
            }
        }

        self.history.push(StateTransition {
            event: candidate.name.clone(),
            from: candidate.from.clone(),
            to: candidate.to.clone(),
            timestamp: Utc::now(),
        });
        self.current = candidate.to.clone();
        debug!(
            event,
            from = candidate.from.name(),
            to = candidate.to.name(),
            "state changed"
        );

        for hook in Hook::observers_for(&candidate) {
            if let Err(source) = self.callbacks.run_observer(&hook, &candidate) {
                warn!(
                    hook = %hook,
                    state = self.current.name(),
                    error = %source,
                    "callback failed after state change"
                );
                return Err(FireError::CallbackError {
                    hook: hook.to_string(),
                    state: self.current.name().to_string(),
                    state_changed: true,
                    source,
                });
            }
        }

        Ok(&self.current)
    }

    /// Force the current state without consulting the table.
    ///
    /// No callbacks run and nothing is recorded in the history.
    pub fn set_state(&mut self, state: S) {
        debug!(from = self.current.name(), to = state.name(), "state forced");
        self.current = state;
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }

    pub fn callbacks(&self) -> &Callbacks<S> {
        &self.callbacks
    }

    fn find(&self, event: &str) -> Option<&Transition<S>> {
        self.transitions
            .iter()
            .find(|t| t.matches(event, &self.current))
    }
}

impl<S: State + 'static> StateMachine<S> {
    /// Lint this machine's table from its current state.
    ///
    /// Never called by the machine itself; see [`crate::validation`].
    pub fn validate(&self) -> TableValidation {
        validation::validate(&self.current, &self.transitions)
    }
}
