//! Enemy definitions and catalog

use crate::core::types::{EnemyId, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single enemy template; combat works on a per-fight copy so the
/// catalog entry is never mutated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub description: String,
    pub health: i32,
    pub damage: i32,
    pub loot: Vec<ItemId>,
}

impl Enemy {
    fn new(name: &str, description: &str, health: i32, damage: i32, loot: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            health,
            damage,
            loot: loot.iter().map(|id| ItemId::from(*id)).collect(),
        }
    }
}

/// Immutable enemy catalog, keyed by stable id
#[derive(Debug, Clone, Default)]
pub struct EnemyCatalog {
    enemies: HashMap<EnemyId, Enemy>,
}

impl EnemyCatalog {
    pub fn get(&self, id: &EnemyId) -> Option<&Enemy> {
        self.enemies.get(id)
    }

    /// Whether `query` loosely names this enemy
    pub fn matches(&self, id: &EnemyId, query: &str) -> bool {
        let query = query.to_lowercase();
        if id.as_str().to_lowercase().contains(&query) {
            return true;
        }
        self.get(id)
            .map(|enemy| enemy.name.to_lowercase().contains(&query))
            .unwrap_or(false)
    }

    /// The standard Adventure Quest bestiary
    pub fn standard() -> Self {
        let mut enemies = HashMap::new();
        let mut add = |id: &str, enemy: Enemy| {
            enemies.insert(EnemyId::from(id), enemy);
        };

        add(
            "wolf",
            Enemy::new(
                "Wolf",
                "A fierce wolf with matted gray fur and sharp teeth.",
                20,
                8,
                &["health_potion"],
            ),
        );
        add(
            "bandit",
            Enemy::new(
                "Bandit",
                "A rough-looking man with a scarred face and a short blade.",
                30,
                10,
                &["iron_sword"],
            ),
        );
        add(
            "cave_spider",
            Enemy::new(
                "Cave Spider",
                "A spider the size of a dog, its fangs dripping venom.",
                25,
                9,
                &["health_potion"],
            ),
        );
        add(
            "mine_guardian",
            Enemy::new(
                "Mine Guardian",
                "A hulking figure of animated stone blocking the lower tunnels.",
                50,
                12,
                &["chainmail", "castle_key"],
            ),
        );
        add(
            "castle_sentry",
            Enemy::new(
                "Castle Sentry",
                "A gaunt soldier in tarnished plate, eyes glowing faintly.",
                40,
                11,
                &["greater_health_potion"],
            ),
        );
        add(
            "dark_knight",
            Enemy::new(
                "Dark Knight",
                "A towering knight in black armor, wreathed in shadow.",
                80,
                15,
                &["enchanted_blade"],
            ),
        );

        Self { enemies }
    }
}
