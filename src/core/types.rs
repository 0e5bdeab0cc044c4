//! Core identifier types shared across the game

use serde::{Deserialize, Serialize};
use std::fmt;

/// In-game time, measured in minutes
pub type Minutes = u64;

macro_rules! string_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(LocationId, "Stable identifier for a location in the world graph");
string_id!(ItemId, "Stable identifier for an item catalog entry");
string_id!(NpcId, "Stable identifier for an NPC catalog entry");
string_id!(EnemyId, "Stable identifier for an enemy catalog entry");
string_id!(QuestId, "Stable identifier for a quest catalog entry");
