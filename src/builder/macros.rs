//! Macros for declaring state and event identifier enums.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// The enum derives `Clone, Copy, PartialEq, Eq, Debug` and serde's
/// `Serialize`/`Deserialize`; `name()` returns the variant name.
///
/// # Example
///
/// ```
/// use nestfsm::core::State;
/// use nestfsm::state_enum;
///
/// state_enum! {
///     pub enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// assert_eq!(Door::Closed.name(), "Closed");
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
    ) => {
        $crate::__identifier_enum!(
            $crate::core::State,
            $(#[$meta])* $vis enum $name { $($(#[$variant_meta])* $variant),* }
        );
    };
}

/// Declare a fieldless enum and implement [`Event`](crate::core::Event) for it.
///
/// # Example
///
/// ```
/// use nestfsm::core::Event;
/// use nestfsm::event_enum;
///
/// event_enum! {
///     pub enum DoorEvent {
///         Push,
///         Pull,
///     }
/// }
///
/// assert_eq!(DoorEvent::Pull.name(), "Pull");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__identifier_enum!(
            $crate::core::Event,
            $(#[$meta])* $vis enum $name { $($(#[$variant_meta])* $variant),* }
        );
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __identifier_enum {
    (
        $trait:path,
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $trait for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
