//! Problems a table lint can report.

use thiserror::Error;

/// A suspicious feature of a transition table.
///
/// None of these stop a machine from being built or fired; they describe
/// rows that can never take effect or states that can never be entered.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableIssue {
    #[error("row {index} for event '{event}' has no source states")]
    EmptySources { index: usize, event: String },

    #[error("row {index} for event '{event}' from '{state}' is shadowed by row {shadowed_by}")]
    ShadowedEntry {
        index: usize,
        event: String,
        state: String,
        shadowed_by: usize,
    },

    #[error("state '{state}' is unreachable from the initial state")]
    UnreachableState { state: String },

    #[error("custom check failed: {message}")]
    Custom { message: String },
}
