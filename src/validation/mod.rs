//! Opt-in lint for transition tables.
//!
//! Machines accept any table: rows with no sources, rows that can never win
//! the first-match lookup and states nothing leads to are all legal. This
//! module finds them on request, using Stillwater's `Validation` so that a
//! single pass reports every problem instead of the first one.
//!
//! # Example
//!
//! ```rust
//! use turnstile::machine::Transition;
//! use turnstile::validation::{validate, TableIssue};
//! use stillwater::validation::Validation;
//!
//! let table = vec![
//!     Transition::new("start", ["start".to_string()], "middle".to_string()),
//!     Transition::new("start", ["start".to_string()], "end".to_string()),
//! ];
//!
//! match validate(&"start".to_string(), &table) {
//!     Validation::Failure(issues) => {
//!         assert!(issues
//!             .iter()
//!             .any(|i| matches!(i, TableIssue::ShadowedEntry { index: 1, .. })));
//!     }
//!     Validation::Success(_) => panic!("expected issues"),
//! }
//! ```

pub mod issues;
pub mod rules;

pub use issues::TableIssue;
pub use rules::{
    empty_sources, shadowed_entries, unreachable_states, TableCheck, TableRules, TableValidation,
};

use crate::core::State;
use crate::machine::Transition;

/// Run the standard checks against `table` started from `initial`.
pub fn validate<S: State + 'static>(initial: &S, table: &[Transition<S>]) -> TableValidation {
    TableRules::standard().validate(initial, table)
}
