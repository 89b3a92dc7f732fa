//! Macros for declaring view states.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Variant names double as state names. The `final:` list is optional.
///
/// # Example
///
/// ```
/// use coursedeck::core::State;
/// use coursedeck::state_enum;
///
/// state_enum! {
///     pub enum Sheet {
///         Hidden,
///         Peeking,
///         Open,
///     }
///     final: [Open]
/// }
///
/// assert_eq!(Sheet::Peeking.name(), "Peeking");
/// assert!(Sheet::Open.is_final());
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

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
