//! Guard and lifecycle callbacks.
//!
//! Callbacks are registered on typed [`Hook`]s rather than on string keys.
//! Guards return a [`Verdict`] to let a transition through or veto it;
//! observers are told about a transition after the fact and can only
//! report failure.
//!
//! # Example
//!
//! ```rust
//! use turnstile::callbacks::{Callbacks, Hook, Verdict};
//! use turnstile::core::Event;
//!
//! let callbacks: Callbacks<String> = Callbacks::new()
//!     .before_event("Timeout", |_| Verdict::Cancel)
//!     .enter_any(|e: &Event<String>| {
//!         println!("{} to {}", e.from, e.to);
//!         Ok(())
//!     });
//!
//! assert!(callbacks.contains(&Hook::BeforeEvent("Timeout".to_string())));
//! assert!(callbacks.contains(&Hook::EnterAny));
//! ```

pub mod error;
pub mod hook;
pub mod registry;

pub use error::{CallbackFailure, CallbackPanic};
pub use hook::Hook;
pub use registry::{Callbacks, GuardFn, ObserverFn, Verdict};
