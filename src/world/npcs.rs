//! NPC definitions and catalog

use crate::core::types::{NpcId, QuestId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dialogue lines for the stages of an NPC's quest relationship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dialogue {
    pub greeting: String,
    pub quest_offer: Option<String>,
    pub quest_active: Option<String>,
    pub quest_complete: Option<String>,
}

impl Dialogue {
    fn greeting_only(greeting: &str) -> Self {
        Self {
            greeting: greeting.to_string(),
            quest_offer: None,
            quest_active: None,
            quest_complete: None,
        }
    }
}

/// A single NPC catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    pub name: String,
    pub description: String,
    pub dialogue: Dialogue,
    pub quest: Option<QuestId>,
}

/// Immutable NPC catalog, keyed by stable id
#[derive(Debug, Clone, Default)]
pub struct NpcCatalog {
    npcs: HashMap<NpcId, Npc>,
}

impl NpcCatalog {
    pub fn get(&self, id: &NpcId) -> Option<&Npc> {
        self.npcs.get(id)
    }

    /// Whether `query` loosely names this NPC
    pub fn matches(&self, id: &NpcId, query: &str) -> bool {
        let query = query.to_lowercase();
        if id.as_str().to_lowercase().contains(&query) {
            return true;
        }
        self.get(id)
            .map(|npc| npc.name.to_lowercase().contains(&query))
            .unwrap_or(false)
    }

    /// The standard cast of Oakvale
    pub fn standard() -> Self {
        let mut npcs = HashMap::new();
        let mut add = |id: &str, npc: Npc| {
            npcs.insert(NpcId::from(id), npc);
        };

        add(
            "village_elder",
            Npc {
                name: "Elder Thorne".to_string(),
                description: "An elderly man with a long white beard and kind eyes.".to_string(),
                dialogue: Dialogue {
                    greeting: "Welcome to Oakvale, traveler. Our village has faced troubled times lately.".to_string(),
                    quest_offer: Some(
                        "The forest has become dangerous, and our miners have gone missing. Would you help us?".to_string(),
                    ),
                    quest_active: Some(
                        "Have you checked the forest and the abandoned mines yet?".to_string(),
                    ),
                    quest_complete: Some(
                        "You've done a great service to our village. Take this as a token of our gratitude.".to_string(),
                    ),
                },
                quest: Some(QuestId::from("village_troubles")),
            },
        );
        add(
            "farmer",
            Npc {
                name: "Farmer Wilkes".to_string(),
                description: "A weathered farmer with dirt under his fingernails.".to_string(),
                dialogue: Dialogue::greeting_only(
                    "Wolves have been at my sheep again. Mind yourself on the forest path.",
                ),
                quest: None,
            },
        );
        add(
            "merchant",
            Npc {
                name: "Merchant Oda".to_string(),
                description: "A cheerful trader surrounded by bundles of wares.".to_string(),
                dialogue: Dialogue::greeting_only(
                    "Fine goods for fine folk! Come back when the roads are safe again.",
                ),
                quest: None,
            },
        );
        add(
            "innkeeper",
            Npc {
                name: "Innkeeper Marta".to_string(),
                description: "A stout woman polishing a tankard behind the bar.".to_string(),
                dialogue: Dialogue::greeting_only(
                    "A warm bed and a hot meal, that's what we offer. The miners used to drink here, before they vanished.",
                ),
                quest: None,
            },
        );
        add(
            "blacksmith",
            Npc {
                name: "Smith Garen".to_string(),
                description: "A broad-shouldered smith, arms black with soot.".to_string(),
                dialogue: Dialogue {
                    greeting: "Need steel? Mine's the best in the valley.".to_string(),
                    quest_offer: Some(
                        "Lost the key to the old mines somewhere on the forest path. If you find it, the mines are yours to search.".to_string(),
                    ),
                    quest_active: None,
                    quest_complete: None,
                },
                quest: None,
            },
        );
        add(
            "old_hermit",
            Npc {
                name: "The Hermit".to_string(),
                description: "A ragged figure living at the edge of the deep forest.".to_string(),
                dialogue: Dialogue {
                    greeting: "Few come this far. The amulet you seek lies below the mines, where the stone walks.".to_string(),
                    quest_offer: Some(
                        "Bring the ancient amulet to the castle, and the darkness over this land may yet lift.".to_string(),
                    ),
                    quest_active: None,
                    quest_complete: None,
                },
                quest: Some(QuestId::from("royal_amulet")),
            },
        );

        Self { npcs }
    }
}
