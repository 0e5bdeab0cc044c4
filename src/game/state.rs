//! Mutable per-session game state
//!
//! The static `WorldContent` is never mutated; items picked up and enemies
//! slain are tracked here in per-location state initialized from the map
//! templates.

use crate::core::config::config;
use crate::core::types::{EnemyId, ItemId, LocationId, Minutes, NpcId};
use crate::game::quests::QuestLog;
use crate::world::{ItemKind, WorldContent, STARTING_LOCATION};
use std::collections::{HashMap, HashSet};

/// Starting health for a fresh player
pub const STARTING_HEALTH: i32 = 100;

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub inventory: Vec<ItemId>,
    pub equipped_weapon: Option<ItemId>,
    pub equipped_armor: Option<ItemId>,
}

impl Player {
    fn new(name: String) -> Self {
        // Starting gear per the classic rules: equipped rusty sword plus
        // one health potion
        Self {
            name,
            health: STARTING_HEALTH,
            max_health: STARTING_HEALTH,
            inventory: vec![ItemId::from("rusty_sword"), ItemId::from("health_potion")],
            equipped_weapon: Some(ItemId::from("rusty_sword")),
            equipped_armor: None,
        }
    }

    pub fn has_item(&self, id: &ItemId) -> bool {
        self.inventory.contains(id)
    }

    /// Remove one copy of an item, returning whether it was present
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == id) {
            self.inventory.remove(pos);
            if self.equipped_weapon.as_ref() == Some(id) && !self.has_item(id) {
                self.equipped_weapon = None;
            }
            if self.equipped_armor.as_ref() == Some(id) && !self.has_item(id) {
                self.equipped_armor = None;
            }
            true
        } else {
            false
        }
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }
}

/// Mutable contents of one location
#[derive(Debug, Clone, Default)]
pub struct LocationState {
    pub items: Vec<ItemId>,
    pub enemies: Vec<EnemyId>,
}

/// One player's game in progress
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    pub current_location: LocationId,
    pub visited: HashSet<LocationId>,
    pub quest_log: QuestLog,
    pub game_time: Minutes,
    pub enemies_defeated: u32,
    location_states: HashMap<LocationId, LocationState>,
}

impl GameState {
    /// Start a fresh game against the given world content
    pub fn new(content: &WorldContent, player_name: impl Into<String>) -> Self {
        let location_states = content
            .map
            .location_ids()
            .map(|id| {
                let template = content.map.get(id).expect("id from map iteration");
                (
                    id.clone(),
                    LocationState {
                        items: template.items.clone(),
                        enemies: template.enemies.clone(),
                    },
                )
            })
            .collect();

        Self {
            player: Player::new(player_name.into()),
            current_location: LocationId::from(STARTING_LOCATION),
            visited: HashSet::new(),
            quest_log: QuestLog::default(),
            game_time: 0,
            enemies_defeated: 0,
            location_states,
        }
    }

    pub fn location_state(&self, id: &LocationId) -> Option<&LocationState> {
        self.location_states.get(id)
    }

    pub fn location_state_mut(&mut self, id: &LocationId) -> &mut LocationState {
        self.location_states.entry(id.clone()).or_default()
    }

    /// Items on the ground at a location
    pub fn items_at(&self, id: &LocationId) -> &[ItemId] {
        self.location_states
            .get(id)
            .map(|s| s.items.as_slice())
            .unwrap_or(&[])
    }

    /// Living enemies at a location
    pub fn enemies_at(&self, id: &LocationId) -> &[EnemyId] {
        self.location_states
            .get(id)
            .map(|s| s.enemies.as_slice())
            .unwrap_or(&[])
    }

    /// Items on the ground here
    pub fn items_here(&self) -> &[ItemId] {
        self.items_at(&self.current_location)
    }

    /// Living enemies here
    pub fn enemies_here(&self) -> &[EnemyId] {
        self.enemies_at(&self.current_location)
    }

    /// NPCs here come straight from the template (NPCs never move or die)
    pub fn npcs_here<'a>(&self, content: &'a WorldContent) -> &'a [NpcId] {
        content
            .map
            .get(&self.current_location)
            .map(|loc| loc.npcs.as_slice())
            .unwrap_or(&[])
    }

    /// Advance in-game time, applying passive healing
    ///
    /// The player regains 1 health each time the clock crosses a multiple
    /// of the heal interval.
    pub fn advance_time(&mut self, minutes: Minutes) {
        let interval = config().heal_interval_minutes;
        let before = self.game_time / interval;
        self.game_time += minutes;
        let after = self.game_time / interval;
        let ticks = (after - before) as i32;
        if ticks > 0 && self.player.health < self.player.max_health {
            self.player.heal(ticks);
        }
    }

    /// Effective strike damage from the equipped weapon (bare hands if none)
    pub fn weapon_damage(&self, content: &WorldContent) -> i32 {
        self.player
            .equipped_weapon
            .as_ref()
            .and_then(|id| content.items.get(id))
            .filter(|item| item.kind == ItemKind::Weapon)
            .map(|item| item.value)
            .unwrap_or(config().bare_hand_damage)
    }

    /// Damage absorbed per hit by the equipped armor
    pub fn armor_value(&self, content: &WorldContent) -> i32 {
        self.player
            .equipped_armor
            .as_ref()
            .and_then(|id| content.items.get(id))
            .filter(|item| item.kind == ItemKind::Armor)
            .map(|item| item.value)
            .unwrap_or(0)
    }

    /// The game is won once the final enemy's location is cleared
    pub fn is_victorious(&self) -> bool {
        use crate::world::{FINAL_ENEMY, FINAL_LOCATION};
        let throne = LocationId::from(FINAL_LOCATION);
        self.visited.contains(&throne)
            && !self.enemies_at(&throne).contains(&EnemyId::from(FINAL_ENEMY))
    }
}
