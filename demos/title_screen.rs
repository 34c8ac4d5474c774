//! Title Screen
//!
//! Drives a game's title-screen flow from standard input, one event name per
//! line. `Timeout` is vetoed by a guard, so the attract-mode demo never
//! starts on its own.
//!
//! Try: Next, Next, Timeout, Start, Next, End
//!
//! Run with: cargo run --example title_screen
//! Set RUST_LOG=turnstile=trace to see rejected and vetoed events logged.

use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;
use turnstile::{Callbacks, Event, StateMachine, Verdict};

fn title_screen() -> StateMachine<String> {
    let s = |name: &str| name.to_string();

    StateMachine::builder()
        .initial(s("init"))
        .on("Next", [s("init")], s("logo"))
        .on("Next", [s("logo")], s("title"))
        .on("Timeout", [s("title")], s("demo"))
        .on("PushButton", [s("title")], s("title"))
        .on("Timeout", [s("demo")], s("title"))
        .on("PushButton", [s("demo")], s("title"))
        .on("Start", [s("title")], s("gameStart"))
        .on("Next", [s("gameStart")], s("gaming"))
        .on("End", [s("gaming")], s("gameEnd"))
        .callbacks(
            Callbacks::new()
                .enter_any(|e: &Event<String>| {
                    println!("{} to {}", e.from, e.to);
                    Ok(())
                })
                .before_event("Timeout", |_| Verdict::Cancel),
        )
        .build()
        .expect("initial state is set")
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut machine = title_screen();
    println!("current: {}", machine.current());

    for line in io::stdin().lock().lines() {
        let line = line?;
        let event = line.trim();
        if event.is_empty() {
            continue;
        }
        if let Err(err) = machine.fire(event) {
            println!("{err}");
        }
    }

    Ok(())
}
