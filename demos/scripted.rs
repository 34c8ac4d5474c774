//! Scripted Level Walk
//!
//! Fires a fixed sequence of events at a small level-progression machine
//! and prints what happened to each one.
//!
//! Run with: cargo run --example scripted

use tracing_subscriber::EnvFilter;
use turnstile::validation::validate;
use turnstile::{Callbacks, Event, StateMachine, Transition};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let s = |name: &str| name.to_string();
    let table = vec![
        Transition::new("start", [s("start")], s("middle")),
        Transition::new("middle", [s("start")], s("end")),
        Transition::new("end", [s("end"), s("start")], s("finish")),
        Transition::new("finish", [s("finish"), s("middle")], s("finish")),
    ];

    if let stillwater::validation::Validation::Failure(issues) = validate(&s("start"), &table) {
        for issue in issues.iter() {
            println!("lint: {issue}");
        }
    }

    let callbacks = Callbacks::new().enter_any(|e: &Event<String>| {
        println!("{} -> {} ({})", e.from, e.to, e.name);
        Ok(())
    });
    let mut machine = StateMachine::new(s("start"), table, callbacks);

    for event in ["start", "start", "finish", "end", "finish"] {
        match machine.fire(event) {
            Ok(state) => println!("{event}: now in {state}"),
            Err(err) => println!("{event}: {err}"),
        }
    }

    println!("path: {:?}", machine.history().get_path());
}
