//! Identifier newtypes.
//!
//! Ids are UUID v4 strings generated at create time. They serialize as bare
//! strings so persisted snapshots keep the plain `"id": "..."` layout.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Behaviour shared by every entity identifier.
pub trait EntityId: Clone + Eq + Hash + fmt::Display + fmt::Debug {
    /// Generate a fresh, globally unique identifier.
    fn generate() -> Self;

    fn as_str(&self) -> &str;
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }
        }

        impl EntityId for $name {
            fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Rank`](super::Rank).
    RankId
);
entity_id!(
    /// Identifier of a [`RankPlan`](super::RankPlan).
    RankPlanId
);
entity_id!(
    /// Identifier of an [`Assignment`](super::Assignment).
    AssignmentId
);
entity_id!(
    /// Identifier of a [`Marker`](super::Marker).
    MarkerId
);
