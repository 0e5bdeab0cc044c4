//! Gameplay configuration with documented constants
//!
//! The tuning constants for time, healing, and combat are collected here
//! with explanations of their purpose and how they interact.

use crate::core::error::{QuestError, Result};

/// Configuration for gameplay pacing and combat
///
/// These values mirror the balance of the classic Adventure Quest rules.
/// Changing them will affect pacing and difficulty.
#[derive(Debug, Clone)]
pub struct GameConfig {
    // === TIME SYSTEM ===
    /// Minutes of in-game time consumed by traveling between locations
    ///
    /// Travel is the most expensive routine action; at 10 minutes per hop
    /// a trip across the map costs about an in-game hour.
    pub travel_minutes: u64,

    /// Minutes of in-game time consumed by a resolved combat
    pub combat_minutes: u64,

    /// Minutes of in-game time consumed by any processed command
    ///
    /// Applied after the command's own cost, so a travel command costs
    /// `travel_minutes + command_minutes` total.
    pub command_minutes: u64,

    /// Interval, in in-game minutes, at which the player passively
    /// recovers one health point
    ///
    /// At 10, an unhurried player recovers ~6 health per in-game hour.
    pub heal_interval_minutes: u64,

    // === COMBAT SYSTEM ===
    /// Damage dealt with no weapon equipped
    pub bare_hand_damage: i32,

    /// Half-width of the uniform damage roll added to every strike
    ///
    /// Each strike deals `base + roll` where roll is in
    /// `-damage_spread..=damage_spread`, floored at 1.
    pub damage_spread: i32,

    /// Chance per player strike to inflict bleeding on the enemy
    pub bleed_chance: f64,

    /// Rounds a fresh bleed lasts
    pub bleed_rounds: u32,

    /// Hard cap on combat rounds
    ///
    /// Combat between a 2-damage fist and a high-health enemy always
    /// terminates; the cap only guards against degenerate configs.
    pub max_combat_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            travel_minutes: 10,
            combat_minutes: 5,
            command_minutes: 1,
            heal_interval_minutes: 10,

            bare_hand_damage: 2,
            damage_spread: 2,
            bleed_chance: 0.1,
            bleed_rounds: 3,
            max_combat_rounds: 100,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.bare_hand_damage < 1 {
            return Err(QuestError::InvalidConfig(
                "bare_hand_damage must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.bleed_chance) {
            return Err(QuestError::InvalidConfig(format!(
                "bleed_chance ({}) must be within 0.0..=1.0",
                self.bleed_chance
            )));
        }
        if self.max_combat_rounds == 0 {
            return Err(QuestError::InvalidConfig(
                "max_combat_rounds must be positive".into(),
            ));
        }
        if self.heal_interval_minutes == 0 {
            return Err(QuestError::InvalidConfig(
                "heal_interval_minutes must be positive".into(),
            ));
        }
        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<GameConfig> = OnceLock::new();

/// Get the global game config (initializes with defaults if not set)
pub fn config() -> &'static GameConfig {
    CONFIG.get_or_init(GameConfig::default)
}

/// Set the global game config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: GameConfig) -> std::result::Result<(), GameConfig> {
    CONFIG.set(config)
}
