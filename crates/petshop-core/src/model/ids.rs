//! Newtype identifiers
//!
//! Pets, owners and microchips are identified by opaque strings assigned by
//! their stores. Each gets its own newtype so that a [`PetId`] can never be
//! handed to an API expecting an [`OwnerId`].

use serde::{Deserialize, Serialize};

// Generates: struct, new(), as_str(), Display, From<&str>/From<String>.
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a store-assigned identifier.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id! {
    /// Identifies a pet in the pet store.
    PetId
}

string_id! {
    /// Identifies a pet owner in the owner store.
    OwnerId
}

string_id! {
    /// Identifies a microchip record in the microchip store.
    MicrochipId
}
