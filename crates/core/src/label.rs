//! Explicit label tables for enumerations exchanged as strings.
//!
//! Every enumeration that crosses a wire boundary is declared with
//! [`labeled_enum!`], which generates one exhaustive table of `(variant, label)`
//! pairs. Parsing an unknown label yields [`DomainError::InvalidValue`] instead of a
//! panic. When a second dialect of labels exists for the same concept (e.g. the
//! request's `ELECTRONIC` vs. the order's `Electronic Resource`), it is declared as
//! an additional [`CodeTable`] over the same canonical enumeration.

use crate::error::DomainError;

/// A fixed `(value, code)` mapping for one wire dialect of an enumeration.
#[derive(Debug)]
pub struct CodeTable<T: 'static> {
    kind: &'static str,
    entries: &'static [(T, &'static str)],
}

impl<T: Copy + PartialEq + 'static> CodeTable<T> {
    pub const fn new(kind: &'static str, entries: &'static [(T, &'static str)]) -> Self {
        Self { kind, entries }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Resolve a code to its value. Codes are matched exactly.
    pub fn parse(&self, code: &str) -> Result<T, DomainError> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(value, _)| *value)
            .ok_or_else(|| DomainError::invalid_value(self.kind, code))
    }

    /// The code for `value`, if this dialect has one.
    pub fn code(&self, value: T) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, code)| *code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(_, code)| *code)
    }
}

/// Declare a fieldless enum together with its canonical wire labels.
///
/// Generates `LABELS` (a [`CodeTable`]), `as_str`, `Display`, `FromStr` and string
/// based `Serialize`/`Deserialize` impls. The calling crate must depend on `serde`.
#[macro_export]
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const LABELS: $crate::CodeTable<$name> = $crate::CodeTable::new(
                stringify!($name),
                &[ $( ($name::$variant, $label) ),+ ],
            );

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::LABELS.parse(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}
