//! The `State` trait implemented by every machine state.
//!
//! States are plain values. The machine only ever compares, clones and
//! names them; it never looks inside.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. A state is an opaque identifier naming the
/// condition the machine is in.
///
/// # Required Traits
///
/// - `Clone`: the machine hands copies of states to callbacks and history
/// - `PartialEq`: transition lookup compares the current state to sources
/// - `Debug`: states show up in errors and logs
/// - `Serialize` + `Deserialize`: history records are serializable
///
/// `String` implements `State`, so a machine can be keyed by plain string
/// identifiers. Enums are usually declared with [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Broken,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's name, used in logs, errors and enter hooks.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Purely informational: the machine does not refuse events in a final
    /// state, it simply finds no table entry for them.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Screen {
        Logo,
        Title,
        Gaming,
        Crashed,
    }

    impl State for Screen {
        fn name(&self) -> &str {
            match self {
                Self::Logo => "Logo",
                Self::Title => "Title",
                Self::Gaming => "Gaming",
                Self::Crashed => "Crashed",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Crashed)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Crashed)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(Screen::Logo.name(), "Logo");
        assert_eq!(Screen::Title.name(), "Title");
        assert_eq!(Screen::Gaming.name(), "Gaming");
        assert_eq!(Screen::Crashed.name(), "Crashed");
    }

    #[test]
    fn final_and_error_flags() {
        assert!(!Screen::Title.is_final());
        assert!(!Screen::Gaming.is_error());
        assert!(Screen::Crashed.is_final());
        assert!(Screen::Crashed.is_error());
    }

    #[test]
    fn string_states_are_named_by_their_contents() {
        let state = String::from("middle");
        assert_eq!(state.name(), "middle");
        assert!(!state.is_final());
        assert!(!state.is_error());
    }

    #[test]
    fn empty_string_is_a_valid_state() {
        let state = String::new();
        assert_eq!(state.name(), "");
        assert_eq!(state, String::new());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = Screen::Title;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Screen = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
