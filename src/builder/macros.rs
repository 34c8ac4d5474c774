//! Macros for declaring machine states.

/// Declare an enum and implement [`State`](crate::core::State) for it.
///
/// Each variant's name is its state name, so `enter_<state>` hooks and log
/// lines use the variant identifier verbatim.
///
/// # Example
///
/// ```
/// use turnstile::core::State;
/// use turnstile::state_enum;
///
/// state_enum! {
///     pub enum Screen {
///         Init,
///         Logo,
///         Title,
///         GameEnd,
///         Crashed,
///     }
///     final: [GameEnd, Crashed]
///     error: [Crashed]
/// }
///
/// assert_eq!(Screen::Title.name(), "Title");
/// assert!(Screen::GameEnd.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
