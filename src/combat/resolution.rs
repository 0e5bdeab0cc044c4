//! Round-by-round combat resolution

use crate::core::config::config;
use crate::core::types::{EnemyId, ItemId};
use crate::game::state::GameState;
use crate::world::WorldContent;
use rand::Rng;

/// Result of a resolved fight
#[derive(Debug, Clone)]
pub struct CombatOutcome {
    /// True if the enemy fell, false if the player did
    pub victory: bool,
    pub rounds: u32,
    /// Loot granted on victory
    pub loot: Vec<ItemId>,
    /// Human-readable blow-by-blow account
    pub transcript: Vec<String>,
}

/// Fight an enemy at the player's current location to the end
///
/// On victory the enemy is removed from the location, its loot is added to
/// the inventory, the defeat counter increments, and combat time passes.
/// On defeat the player's health is left at or below zero; the caller
/// decides what a game over means.
pub fn resolve_combat(
    state: &mut GameState,
    content: &WorldContent,
    enemy_id: &EnemyId,
    rng: &mut impl Rng,
) -> CombatOutcome {
    let cfg = config();
    let Some(template) = content.enemies.get(enemy_id) else {
        return CombatOutcome {
            victory: false,
            rounds: 0,
            loot: Vec::new(),
            transcript: vec!["There's no enemy by that name here.".to_string()],
        };
    };

    // Per-fight copy; the catalog template is never mutated
    let mut enemy_health = template.health;
    let mut enemy_bleed_rounds = 0u32;

    let weapon_damage = state.weapon_damage(content);
    let armor = state.armor_value(content);
    let weapon_name = state
        .player
        .equipped_weapon
        .as_ref()
        .map(|id| content.items.display_name(id))
        .unwrap_or_else(|| "fists".to_string());

    let mut transcript = vec![format!("You engage in combat with {}!", template.name)];
    let mut rounds = 0;

    while enemy_health > 0 && state.player.health > 0 && rounds < cfg.max_combat_rounds {
        rounds += 1;

        // Bleeding ticks at the start of the round
        if enemy_bleed_rounds > 0 {
            let bleed = rng.gen_range(1..=3);
            enemy_health -= bleed;
            enemy_bleed_rounds -= 1;
            transcript.push(format!("{} takes {} bleeding damage.", template.name, bleed));
            if enemy_health <= 0 {
                transcript.push(format!("{} collapses from its wounds!", template.name));
                break;
            }
        }

        // Player strike
        let roll = rng.gen_range(-cfg.damage_spread..=cfg.damage_spread);
        let dealt = (weapon_damage + roll).max(1);
        enemy_health -= dealt;
        transcript.push(format!(
            "You attack {} with your {} for {} damage.",
            template.name, weapon_name, dealt
        ));
        if rng.gen_bool(cfg.bleed_chance) && enemy_bleed_rounds == 0 {
            enemy_bleed_rounds = cfg.bleed_rounds;
            transcript.push(format!("Your attack causes {} to bleed!", template.name));
        }
        if enemy_health <= 0 {
            break;
        }

        // Enemy strike
        let roll = rng.gen_range(-cfg.damage_spread..=cfg.damage_spread);
        let taken = (template.damage + roll - armor).max(1);
        state.player.health -= taken;
        transcript.push(format!(
            "{} deals {} damage to you.",
            template.name, taken
        ));
    }

    let victory = enemy_health <= 0 && state.player.health > 0;
    let mut loot = Vec::new();

    if victory {
        transcript.push(format!("You defeated {}!", template.name));

        let here = state.current_location.clone();
        let location = state.location_state_mut(&here);
        if let Some(pos) = location.enemies.iter().position(|e| e == enemy_id) {
            location.enemies.remove(pos);
        }

        if !template.loot.is_empty() {
            transcript.push("You found:".to_string());
            for item in &template.loot {
                transcript.push(format!("- {}", content.items.display_name(item)));
                state.player.inventory.push(item.clone());
                loot.push(item.clone());
            }
        }

        state.enemies_defeated += 1;
        state.advance_time(cfg.combat_minutes);
    } else if state.player.health <= 0 {
        transcript.push("You have been defeated!".to_string());
    }

    CombatOutcome {
        victory,
        rounds,
        loot,
        transcript,
    }
}
