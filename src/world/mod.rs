//! Static world content: map graph, item/NPC/enemy catalogs
//!
//! Everything here is an immutable template. Per-session mutation (picked
//! up items, slain enemies) lives in `game::state`.

pub mod enemies;
pub mod items;
pub mod map;
pub mod npcs;

pub use enemies::{Enemy, EnemyCatalog};
pub use items::{Item, ItemCatalog, ItemKind};
pub use map::{Location, WorldMap, FINAL_ENEMY, FINAL_LOCATION, STARTING_LOCATION};
pub use npcs::{Npc, NpcCatalog};

/// Bundle of all static content a session plays against
#[derive(Debug, Clone)]
pub struct WorldContent {
    pub map: WorldMap,
    pub items: ItemCatalog,
    pub npcs: NpcCatalog,
    pub enemies: EnemyCatalog,
}

impl WorldContent {
    pub fn standard() -> Self {
        Self {
            map: WorldMap::standard(),
            items: ItemCatalog::standard(),
            npcs: NpcCatalog::standard(),
            enemies: EnemyCatalog::standard(),
        }
    }
}
