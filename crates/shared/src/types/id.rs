//! Typed IDs for type-safe entity references.
//!
//! The Andina exports identify entities with string codes (`VEN-000123`,
//! `CL-0042`). Wrapping them prevents accidentally passing a `ClientId`
//! where a `ProductId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers around string codes.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates an ID from a string code.
            #[must_use]
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Returns the inner code as a string slice.
            #[must_use]
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
            fn from(code: &str) -> Self {
                Self(code.to_string())
            }
        }
    };
}

typed_id!(SaleId, "Unique identifier for a sale.");
typed_id!(ClientId, "Unique identifier for a client.");
typed_id!(ProductId, "Unique identifier for a product.");
typed_id!(ImportId, "Unique identifier for an import order.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_id_roundtrip() {
        let id = ClientId::new("CL-0042");
        assert_eq!(id.as_str(), "CL-0042");
        assert_eq!(id.to_string(), "CL-0042");
        assert_eq!(id, ClientId::from("CL-0042"));
    }
}
