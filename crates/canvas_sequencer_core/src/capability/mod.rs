//! Recording surfaces of each sequence flavor.
//!
//! # Responsibility
//! - Enumerate the method and property names each flavor can record.
//! - Map a wire name to its tagged instruction without runtime reflection.
//!
//! # Invariants
//! - Tables are static and never mutated.
//! - Wire names are case-sensitive and match the rendering API spelling.

/// Declares one capability table: a fieldless enum, its wire names and the
/// matching `&'static [&'static str]` list.
macro_rules! capability_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $table:ident {
            $($variant:ident => $wire:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $($variant,)*
        }

        const $table: &[&str] = &[$($wire,)*];

        impl $name {
            /// Every entry, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Stable wire name recorded as the atom instruction.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }

            /// Parses an exact wire name.
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use capability_table;

pub mod canvas;
pub mod path;
