//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::callbacks::Callbacks;
use crate::core::State;
use crate::machine::{StateMachine, Transition};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use turnstile::builder::StateMachineBuilder;
/// use turnstile::callbacks::{Callbacks, Verdict};
///
/// let machine = StateMachineBuilder::new()
///     .initial("title".to_string())
///     .on("Timeout", ["title".to_string()], "demo".to_string())
///     .on("Timeout", ["demo".to_string()], "title".to_string())
///     .callbacks(Callbacks::new().before_event("Timeout", |_| Verdict::Cancel))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current(), "title");
/// assert_eq!(machine.transitions().len(), 2);
/// ```
pub struct StateMachineBuilder<S: State> {
    initial: Option<S>,
    transitions: Vec<Transition<S>>,
    callbacks: Callbacks<S>,
}

impl<S: State> StateMachineBuilder<S> {
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            callbacks: Callbacks::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder is missing a required field.
    pub fn transition(mut self, builder: TransitionBuilder<S>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Append a row: `event` moves the machine from any of `sources` to `to`.
    pub fn on(mut self, event: impl Into<String>, sources: impl IntoIterator<Item = S>, to: S) -> Self {
        self.transitions.push(Transition::new(event, sources, to));
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once, keeping their order.
    pub fn transitions(mut self, transitions: Vec<Transition<S>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Replace the callback registry.
    pub fn callbacks(mut self, callbacks: Callbacks<S>) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Build the state machine.
    ///
    /// Fails only when no initial state was given. An empty table is
    /// allowed.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(StateMachine::new(initial, self.transitions, self.callbacks))
    }
}

impl<S: State> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callbacks::Verdict;
    use crate::machine::FireError;
    use crate::state_enum;

    state_enum! {
        enum Level {
            Start,
            Middle,
            End,
            Finish,
        }
        final: [Finish]
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = StateMachineBuilder::<Level>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn empty_table_is_allowed() {
        let machine = StateMachineBuilder::new().initial(Level::Start).build();

        assert!(machine.is_ok());
        assert!(machine.unwrap().transitions().is_empty());
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::new()
            .initial(Level::Start)
            .transition(
                TransitionBuilder::new()
                    .event("start")
                    .from(Level::Start)
                    .to(Level::Middle),
            )
            .unwrap()
            .add_transition(Transition::new("middle", [Level::Middle], Level::End))
            .on("end", [Level::End, Level::Start], Level::Finish)
            .build()
            .unwrap();

        assert_eq!(machine.current(), &Level::Start);
        assert_eq!(machine.transitions().len(), 3);
        assert_eq!(machine.transitions()[2].event, "end");
    }

    #[test]
    fn transition_builder_errors_propagate() {
        let result = StateMachineBuilder::new()
            .initial(Level::Start)
            .transition(TransitionBuilder::new().from(Level::Start).to(Level::Middle));

        assert!(matches!(result, Err(BuildError::MissingEvent)));
    }

    #[test]
    fn transitions_keep_declaration_order() {
        let mut machine = StateMachineBuilder::new()
            .initial(Level::Start)
            .transitions(vec![
                Transition::new("go", [Level::Start], Level::Middle),
                Transition::new("go", [Level::Start], Level::End),
            ])
            .build()
            .unwrap();

        assert_eq!(machine.fire("go").unwrap(), &Level::Middle);
    }

    #[test]
    fn callbacks_are_installed() {
        let mut machine = StateMachineBuilder::new()
            .initial(Level::Start)
            .on("start", [Level::Start], Level::Middle)
            .callbacks(Callbacks::new().before_any(|_| Verdict::Cancel))
            .build()
            .unwrap();

        assert!(matches!(machine.fire("start"), Err(FireError::Cancelled { .. })));
        assert_eq!(machine.current(), &Level::Start);
    }
}
