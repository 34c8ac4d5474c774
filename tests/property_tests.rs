//! Property-based tests for the state machine.
//!
//! These tests use proptest to check that lookup, vetoes and inspection
//! behave the same way across randomly generated tables and event streams.

use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use turnstile::state_enum;
use turnstile::{Callbacks, Event, FireError, StateMachine, Transition, Verdict};

state_enum! {
    enum Light {
        Off,
        Dim,
        Bright,
        Broken,
    }
    final: [Broken]
    error: [Broken]
}

const EVENTS: [&str; 4] = ["toggle", "raise", "lower", "smash"];

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> Light {
        match variant {
            0 => Light::Off,
            1 => Light::Dim,
            2 => Light::Bright,
            _ => Light::Broken,
        }
    }
}

prop_compose! {
    fn arbitrary_event()(index in 0..EVENTS.len()) -> &'static str {
        EVENTS[index]
    }
}

prop_compose! {
    fn arbitrary_transition()(
        event in arbitrary_event(),
        sources in prop::collection::vec(arbitrary_state(), 0..3),
        to in arbitrary_state(),
    ) -> Transition<Light> {
        Transition::new(event, sources, to)
    }
}

fn arbitrary_table() -> impl Strategy<Value = Vec<Transition<Light>>> {
    prop::collection::vec(arbitrary_transition(), 0..8)
}

fn expected_destination(table: &[Transition<Light>], event: &str, current: &Light) -> Option<Light> {
    table
        .iter()
        .find(|t| t.event == event && t.sources.contains(current))
        .map(|t| t.to.clone())
}

proptest! {
    #[test]
    fn fire_follows_first_matching_row(
        table in arbitrary_table(),
        initial in arbitrary_state(),
        events in prop::collection::vec(arbitrary_event(), 0..12),
    ) {
        let mut machine = StateMachine::new(initial.clone(), table.clone(), Callbacks::new());
        let mut current = initial;

        for event in events {
            let expected = expected_destination(&table, event, &current);
            let result = machine.fire(event).cloned();

            match expected {
                Some(to) => {
                    prop_assert_eq!(result.unwrap(), to.clone());
                    current = to;
                }
                None => {
                    let invalid = matches!(result, Err(FireError::InvalidTransition { .. }));
                    prop_assert!(invalid);
                }
            }
            prop_assert_eq!(machine.current(), &current);
        }
    }

    #[test]
    fn can_fire_agrees_with_fire(
        table in arbitrary_table(),
        initial in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let mut machine = StateMachine::new(initial, table, Callbacks::new());
        let predicted = machine.can_fire(event);
        prop_assert_eq!(predicted, machine.fire(event).is_ok());
    }

    #[test]
    fn vetoed_events_never_move_the_machine(
        table in arbitrary_table(),
        initial in arbitrary_state(),
        events in prop::collection::vec(arbitrary_event(), 0..12),
    ) {
        let entered = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&entered);
        let callbacks = Callbacks::new()
            .before_any(|_: &Event<Light>| Verdict::Cancel)
            .enter_any(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });
        let mut machine = StateMachine::new(initial.clone(), table, callbacks);

        for event in events {
            prop_assert!(machine.fire(event).is_err());
            prop_assert_eq!(machine.current(), &initial);
        }
        prop_assert_eq!(entered.load(Ordering::SeqCst), 0);
        prop_assert!(machine.history().is_empty());
    }

    #[test]
    fn history_counts_successful_fires(
        table in arbitrary_table(),
        initial in arbitrary_state(),
        events in prop::collection::vec(arbitrary_event(), 0..12),
    ) {
        let mut machine = StateMachine::new(initial, table, Callbacks::new());
        let mut successes = 0;

        for event in events {
            if machine.fire(event).is_ok() {
                successes += 1;
            }
        }

        prop_assert_eq!(machine.history().len(), successes);
        if let Some(last) = machine.history().last() {
            prop_assert_eq!(&last.to, machine.current());
        }
    }

    #[test]
    fn current_is_idempotent(table in arbitrary_table(), initial in arbitrary_state()) {
        let machine = StateMachine::new(initial, table, Callbacks::new());
        let first = machine.current().clone();
        let second = machine.current().clone();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn available_events_are_exactly_the_firable_ones(
        table in arbitrary_table(),
        initial in arbitrary_state(),
    ) {
        let machine = StateMachine::new(initial, table, Callbacks::new());
        let available = machine.available_events();

        for event in EVENTS {
            prop_assert_eq!(available.contains(&event), machine.can_fire(event));
        }
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Light = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
