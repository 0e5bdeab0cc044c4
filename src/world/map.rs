//! The world graph of Oakvale and its surroundings
//!
//! Locations are static templates; mutable per-session state (items on the
//! ground, enemies still alive) is tracked separately in `game::state`.

use crate::core::types::{EnemyId, ItemId, LocationId, NpcId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single location template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub description: String,
    pub connections: Vec<LocationId>,
    pub npcs: Vec<NpcId>,
    pub enemies: Vec<EnemyId>,
    pub items: Vec<ItemId>,
    /// Entering this location requires carrying the named item
    pub requires_item: Option<ItemId>,
}

/// Immutable world graph, keyed by stable location id
#[derive(Debug, Clone, Default)]
pub struct WorldMap {
    locations: HashMap<LocationId, Location>,
}

pub const STARTING_LOCATION: &str = "village";

/// The location where slaying the final enemy wins the game
pub const FINAL_LOCATION: &str = "throne_room";
pub const FINAL_ENEMY: &str = "dark_knight";

impl WorldMap {
    pub fn get(&self, id: &LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn location_ids(&self) -> impl Iterator<Item = &LocationId> {
        self.locations.keys()
    }

    /// Whether `query` loosely names this location
    pub fn matches(&self, id: &LocationId, query: &str) -> bool {
        let query = query.to_lowercase();
        if id.as_str().to_lowercase().contains(&query) {
            return true;
        }
        self.get(id)
            .map(|loc| loc.name.to_lowercase().contains(&query))
            .unwrap_or(false)
    }

    /// The standard Adventure Quest map
    pub fn standard() -> Self {
        let mut locations = HashMap::new();
        let mut add = |id: &str,
                       name: &str,
                       description: &str,
                       connections: &[&str],
                       npcs: &[&str],
                       enemies: &[&str],
                       items: &[&str],
                       requires_item: Option<&str>| {
            locations.insert(
                LocationId::from(id),
                Location {
                    name: name.to_string(),
                    description: description.to_string(),
                    connections: connections.iter().map(|c| LocationId::from(*c)).collect(),
                    npcs: npcs.iter().map(|n| NpcId::from(*n)).collect(),
                    enemies: enemies.iter().map(|e| EnemyId::from(*e)).collect(),
                    items: items.iter().map(|i| ItemId::from(*i)).collect(),
                    requires_item: requires_item.map(ItemId::from),
                },
            );
        };

        add(
            "village",
            "Village of Oakvale",
            "A peaceful village with thatched-roof cottages and friendly people.",
            &["forest_path", "village_inn", "blacksmith", "village_square"],
            &["village_elder", "farmer", "merchant"],
            &[],
            &["village_map"],
            None,
        );
        add(
            "village_square",
            "Village Square",
            "A cobbled square with a dry fountain at its center.",
            &["village"],
            &["merchant"],
            &[],
            &[],
            None,
        );
        add(
            "village_inn",
            "The Sleeping Stag Inn",
            "A warm common room smelling of stew and pipe smoke.",
            &["village"],
            &["innkeeper"],
            &[],
            &["health_potion"],
            None,
        );
        add(
            "blacksmith",
            "Garen's Forge",
            "Heat rolls off the forge; finished blades line the wall.",
            &["village"],
            &["blacksmith"],
            &[],
            &["leather_armor"],
            None,
        );
        add(
            "forest_path",
            "Forest Path",
            "A winding dirt path beneath tall oaks. Something rustles in the undergrowth.",
            &["village", "deep_forest", "mine_entrance"],
            &[],
            &["wolf"],
            &["mine_key"],
            None,
        );
        add(
            "deep_forest",
            "Deep Forest",
            "Ancient trees close overhead. The light here is green and dim.",
            &["forest_path", "hermit_hut"],
            &[],
            &["bandit"],
            &["iron_sword"],
            None,
        );
        add(
            "hermit_hut",
            "Hermit's Hut",
            "A crooked hut of moss and branches at the forest's dark heart.",
            &["deep_forest"],
            &["old_hermit"],
            &[],
            &[],
            None,
        );
        add(
            "mine_entrance",
            "Abandoned Mines",
            "A boarded-up mine entrance. A heavy iron gate bars the way down.",
            &["forest_path", "mine_depths"],
            &[],
            &["cave_spider"],
            &[],
            Some("mine_key"),
        );
        add(
            "mine_depths",
            "Mine Depths",
            "Collapsed tunnels and abandoned carts. Something heavy moves in the dark.",
            &["mine_entrance"],
            &[],
            &["mine_guardian"],
            &["ancient_amulet", "chainmail"],
            None,
        );
        add(
            "castle_gate",
            "Castle Gate",
            "The royal castle looms above, its gate sealed by an ornate lock.",
            &["village_square", "castle_hall"],
            &[],
            &[],
            &[],
            None,
        );
        add(
            "castle_hall",
            "Castle Hall",
            "Faded banners hang over a hall patrolled by hollow-eyed sentries.",
            &["castle_gate", "throne_room"],
            &[],
            &["castle_sentry"],
            &["knight_armor"],
            Some("castle_key"),
        );
        add(
            "throne_room",
            "Throne Room",
            "Shadow pools around the throne. The Dark Knight waits in silence.",
            &["castle_hall"],
            &[],
            &["dark_knight"],
            &[],
            Some("castle_key"),
        );

        // castle_gate is reachable from the square
        if let Some(square) = locations.get_mut(&LocationId::from("village_square")) {
            square.connections.push(LocationId::from("castle_gate"));
        }

        Self { locations }
    }
}
