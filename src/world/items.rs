//! Item definitions and catalog

use crate::core::types::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What an item does when wielded, worn, or consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// `value` is strike damage
    Weapon,
    /// `value` is damage absorbed per hit
    Armor,
    /// `value` is health restored on use
    Potion,
    /// Unlocks locations or advances quests; `value` unused
    KeyItem,
}

/// A single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub kind: ItemKind,
    pub value: i32,
}

impl Item {
    fn new(name: &str, description: &str, kind: ItemKind, value: i32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            value,
        }
    }
}

/// Immutable item catalog, keyed by stable id
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<ItemId, Item>,
}

impl ItemCatalog {
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Display name for an id, falling back to the id with underscores
    /// replaced for items not in the catalog
    pub fn display_name(&self, id: &ItemId) -> String {
        self.get(id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| id.as_str().replace('_', " "))
    }

    /// Whether `query` loosely names this item (matches either the id or
    /// the display name, case-insensitively)
    pub fn matches(&self, id: &ItemId, query: &str) -> bool {
        let query = query.to_lowercase();
        if id.as_str().to_lowercase().contains(&query) {
            return true;
        }
        self.get(id)
            .map(|item| item.name.to_lowercase().contains(&query))
            .unwrap_or(false)
    }

    /// The standard Adventure Quest item set
    pub fn standard() -> Self {
        let mut items = HashMap::new();
        let mut add = |id: &str, item: Item| {
            items.insert(ItemId::from(id), item);
        };

        add(
            "rusty_sword",
            Item::new(
                "Rusty Sword",
                "An old sword with a dull edge.",
                ItemKind::Weapon,
                5,
            ),
        );
        add(
            "iron_sword",
            Item::new("Iron Sword", "A sturdy iron sword.", ItemKind::Weapon, 10),
        );
        add(
            "enchanted_blade",
            Item::new(
                "Enchanted Blade",
                "A magical sword that glows faintly blue.",
                ItemKind::Weapon,
                20,
            ),
        );

        add(
            "leather_armor",
            Item::new(
                "Leather Armor",
                "Basic protection made of hardened leather.",
                ItemKind::Armor,
                5,
            ),
        );
        add(
            "chainmail",
            Item::new(
                "Chainmail",
                "Interlocking metal rings provide solid protection.",
                ItemKind::Armor,
                10,
            ),
        );
        add(
            "knight_armor",
            Item::new(
                "Knight's Armor",
                "Shining plate armor of exceptional quality.",
                ItemKind::Armor,
                15,
            ),
        );

        add(
            "health_potion",
            Item::new(
                "Health Potion",
                "A red liquid that restores 25 health points.",
                ItemKind::Potion,
                25,
            ),
        );
        add(
            "greater_health_potion",
            Item::new(
                "Greater Health Potion",
                "A crimson liquid that restores 50 health points.",
                ItemKind::Potion,
                50,
            ),
        );

        add(
            "village_map",
            Item::new(
                "Village Map",
                "A crude map showing the surrounding areas.",
                ItemKind::KeyItem,
                0,
            ),
        );
        add(
            "mine_key",
            Item::new(
                "Mine Key",
                "An old iron key that opens the abandoned mines.",
                ItemKind::KeyItem,
                0,
            ),
        );
        add(
            "castle_key",
            Item::new(
                "Castle Key",
                "An ornate key with the royal crest.",
                ItemKind::KeyItem,
                0,
            ),
        );
        add(
            "ancient_amulet",
            Item::new(
                "Ancient Amulet",
                "A mysterious artifact with strange markings.",
                ItemKind::KeyItem,
                0,
            ),
        );

        Self { items }
    }
}
