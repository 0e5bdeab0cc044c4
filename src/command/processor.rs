//! Command processing - turns parsed player commands into response text
//!
//! Every outcome is rendered into the returned string, including misses
//! ("You don't see that here."), because the transport is a single
//! request/response exchange with no interactive prompt.

use crate::combat::resolve_combat;
use crate::command::parser::{parse, Command, Verb};
use crate::core::config::config;
use crate::core::types::{ItemId, QuestId};
use crate::game::quests::{
    QuestCatalog, QuestUpdate, OBJECTIVE_CLEAR_FOREST, OBJECTIVE_CLEAR_MINES,
    OBJECTIVE_DELIVER_AMULET, OBJECTIVE_FIND_AMULET,
};
use crate::game::state::GameState;
use crate::world::{ItemKind, WorldContent};
use rand::Rng;

/// Process one line of player input against the game state
///
/// Returns the full response text. Empty input returns an empty response
/// and changes nothing.
pub fn process(
    state: &mut GameState,
    content: &WorldContent,
    quests: &QuestCatalog,
    rng: &mut impl Rng,
    input: &str,
) -> String {
    let Some(command) = parse(input) else {
        return String::new();
    };

    let response = match command.verb {
        Verb::Go => handle_go(state, content, quests, &command),
        Verb::Look => handle_look(state, content, &command),
        Verb::Take => handle_take(state, content, quests, &command),
        Verb::Inventory => handle_inventory(state, content),
        Verb::Equip => handle_equip(state, content, &command),
        Verb::Use => handle_use(state, content, &command),
        Verb::Talk => handle_talk(state, content, quests, &command),
        Verb::Attack => handle_attack(state, content, quests, rng, &command),
        Verb::Help => help_text(),
        Verb::Quit => "Thank you for playing Adventure Quest!".to_string(),
        Verb::Unknown => {
            "I don't understand that command. Type 'help' for a list of commands.".to_string()
        }
    };

    state.advance_time(config().command_minutes);
    response
}

// ============================================================================
// Movement
// ============================================================================

fn handle_go(
    state: &mut GameState,
    content: &WorldContent,
    quests: &QuestCatalog,
    command: &Command,
) -> String {
    let Some(here) = content.map.get(&state.current_location) else {
        return "Invalid location.".to_string();
    };

    let destination = here
        .connections
        .iter()
        .find(|conn| content.map.matches(conn, &command.target))
        .cloned();
    let Some(destination) = destination else {
        return "You can't go there from here.".to_string();
    };
    let target = content.map.get(&destination).expect("connection resolves");

    if let Some(required) = &target.requires_item {
        if !state.player.has_item(required) {
            return format!(
                "You need a {} to enter {}.",
                required.as_str().replace('_', " "),
                target.name
            );
        }
    }

    state.current_location = destination.clone();
    state.advance_time(config().travel_minutes);

    let mut lines = vec![location_view(state, content)];

    // Carrying the amulet into the castle delivers it
    if destination.as_str().starts_with("castle")
        && state.player.has_item(&ItemId::from("ancient_amulet"))
    {
        lines.extend(record_objective(
            state,
            content,
            quests,
            &QuestId::from("royal_amulet"),
            OBJECTIVE_DELIVER_AMULET,
        ));
    }

    join_lines(lines)
}

/// Render the current location the way the original game displayed it on
/// arrival: description, exits (with locked gates flagged), people,
/// enemies, and items
fn location_view(state: &mut GameState, content: &WorldContent) -> String {
    let Some(location) = content.map.get(&state.current_location) else {
        return "Invalid location.".to_string();
    };

    let first_visit = state.visited.insert(state.current_location.clone());
    let mut lines = Vec::new();
    if first_visit {
        lines.push(format!("You have arrived at {}.", location.name));
    } else {
        lines.push(format!("You are at {}.", location.name));
    }
    lines.push(location.description.clone());

    if !location.connections.is_empty() {
        lines.push("You can go to:".to_string());
        for conn in &location.connections {
            let connected = content.map.get(conn).expect("connection resolves");
            let locked = connected
                .requires_item
                .as_ref()
                .map(|item| !state.player.has_item(item))
                .unwrap_or(false);
            if locked {
                lines.push(format!("- {} (locked)", connected.name));
            } else {
                lines.push(format!("- {}", connected.name));
            }
        }
    }

    let npcs = state.npcs_here(content);
    if !npcs.is_empty() {
        lines.push("People here:".to_string());
        for npc_id in npcs {
            if let Some(npc) = content.npcs.get(npc_id) {
                lines.push(format!("- {}", npc.name));
            }
        }
    }

    let enemies: Vec<_> = state.enemies_here().to_vec();
    if !enemies.is_empty() {
        lines.push("Enemies here:".to_string());
        for enemy_id in &enemies {
            if let Some(enemy) = content.enemies.get(enemy_id) {
                lines.push(format!("- {}", enemy.name));
            }
        }
    }

    let items: Vec<_> = state.items_here().to_vec();
    if !items.is_empty() {
        lines.push("Items here:".to_string());
        for item_id in &items {
            lines.push(format!("- {}", content.items.display_name(item_id)));
        }
    }

    join_lines(lines)
}

// ============================================================================
// Observation
// ============================================================================

fn handle_look(state: &mut GameState, content: &WorldContent, command: &Command) -> String {
    if command.target.is_empty() {
        return location_view(state, content);
    }

    for item_id in state.items_here() {
        if content.items.matches(item_id, &command.target) {
            if let Some(item) = content.items.get(item_id) {
                return format!("{}: {}", item.name, item.description);
            }
        }
    }

    for npc_id in state.npcs_here(content) {
        if content.npcs.matches(npc_id, &command.target) {
            if let Some(npc) = content.npcs.get(npc_id) {
                return format!("{}: {}", npc.name, npc.description);
            }
        }
    }

    for enemy_id in state.enemies_here() {
        if content.enemies.matches(enemy_id, &command.target) {
            if let Some(enemy) = content.enemies.get(enemy_id) {
                return format!("{}: {}", enemy.name, enemy.description);
            }
        }
    }

    "You don't see that here.".to_string()
}

// ============================================================================
// Items
// ============================================================================

fn handle_take(
    state: &mut GameState,
    content: &WorldContent,
    quests: &QuestCatalog,
    command: &Command,
) -> String {
    if command.target.is_empty() {
        return "Take what?".to_string();
    }

    let found = state
        .items_here()
        .iter()
        .find(|item_id| content.items.matches(item_id, &command.target))
        .cloned();
    let Some(item_id) = found else {
        return "You don't see that here.".to_string();
    };

    let here = state.current_location.clone();
    let location = state.location_state_mut(&here);
    if let Some(pos) = location.items.iter().position(|i| *i == item_id) {
        location.items.remove(pos);
    }
    state.player.inventory.push(item_id.clone());

    let mut lines = vec![format!(
        "You picked up {}.",
        content.items.display_name(&item_id)
    )];

    if item_id.as_str() == "ancient_amulet" {
        lines.extend(record_objective(
            state,
            content,
            quests,
            &QuestId::from("royal_amulet"),
            OBJECTIVE_FIND_AMULET,
        ));
    }

    join_lines(lines)
}

fn handle_inventory(state: &GameState, content: &WorldContent) -> String {
    if state.player.inventory.is_empty() {
        return "Your inventory is empty.".to_string();
    }

    let mut lines = vec!["You are carrying:".to_string()];
    for item_id in &state.player.inventory {
        let equipped = if state.player.equipped_weapon.as_ref() == Some(item_id) {
            " (equipped weapon)"
        } else if state.player.equipped_armor.as_ref() == Some(item_id) {
            " (equipped armor)"
        } else {
            ""
        };
        lines.push(format!(
            "- {}{}",
            content.items.display_name(item_id),
            equipped
        ));
    }
    join_lines(lines)
}

fn handle_equip(state: &mut GameState, content: &WorldContent, command: &Command) -> String {
    if command.target.is_empty() {
        return "Equip what?".to_string();
    }

    let found = state
        .player
        .inventory
        .iter()
        .find(|item_id| content.items.matches(item_id, &command.target))
        .cloned();
    let Some(item_id) = found else {
        return "You don't have that item.".to_string();
    };
    let Some(item) = content.items.get(&item_id) else {
        return "You don't have that item.".to_string();
    };

    match item.kind {
        ItemKind::Weapon => {
            state.player.equipped_weapon = Some(item_id);
            format!("You equipped {} as your weapon.", item.name)
        }
        ItemKind::Armor => {
            state.player.equipped_armor = Some(item_id);
            format!("You equipped {} as your armor.", item.name)
        }
        _ => format!("You can't equip {}.", item.name),
    }
}

fn handle_use(state: &mut GameState, content: &WorldContent, command: &Command) -> String {
    if command.target.is_empty() {
        return "Use what?".to_string();
    }

    let found = state
        .player
        .inventory
        .iter()
        .find(|item_id| content.items.matches(item_id, &command.target))
        .cloned();
    let Some(item_id) = found else {
        return "You don't have that item.".to_string();
    };
    let Some(item) = content.items.get(&item_id).cloned() else {
        return "You don't have that item.".to_string();
    };

    match item.kind {
        ItemKind::Potion => {
            state.player.remove_item(&item_id);
            state.player.heal(item.value);
            format!(
                "You used {} and recovered {} health points.",
                item.name, item.value
            )
        }
        _ => format!("You can't use {} that way.", item.name),
    }
}

// ============================================================================
// NPCs
// ============================================================================

fn handle_talk(
    state: &mut GameState,
    content: &WorldContent,
    quests: &QuestCatalog,
    command: &Command,
) -> String {
    if command.target.is_empty() {
        return "Talk to whom?".to_string();
    }

    let found = state
        .npcs_here(content)
        .iter()
        .find(|npc_id| content.npcs.matches(npc_id, &command.target))
        .cloned();
    let Some(npc_id) = found else {
        return "There's no one by that name here.".to_string();
    };
    let Some(npc) = content.npcs.get(&npc_id) else {
        return "There's no one by that name here.".to_string();
    };

    // Quest NPCs pick their line from the player's progress
    if let Some(quest_id) = &npc.quest {
        if state.quest_log.is_completed(quest_id) {
            if let Some(line) = &npc.dialogue.quest_complete {
                return format!("{}: \"{}\"", npc.name, line);
            }
        } else if state.quest_log.state(quest_id).is_some() {
            if let Some(line) = &npc.dialogue.quest_active {
                return format!("{}: \"{}\"", npc.name, line);
            }
        }
    }

    let mut lines = vec![format!("{}: \"{}\"", npc.name, npc.dialogue.greeting)];

    if let Some(quest_id) = &npc.quest {
        if !state.quest_log.is_completed(quest_id) {
            if let Some(quest) = quests.get(quest_id) {
                lines.push(format!("{} has a quest for you: {}", npc.name, quest.name));
                lines.push(quest.description.clone());
            }
        }
    }

    join_lines(lines)
}

// ============================================================================
// Combat
// ============================================================================

fn handle_attack(
    state: &mut GameState,
    content: &WorldContent,
    quests: &QuestCatalog,
    rng: &mut impl Rng,
    command: &Command,
) -> String {
    if command.target.is_empty() {
        return "Attack what?".to_string();
    }

    let found = state
        .enemies_here()
        .iter()
        .find(|enemy_id| content.enemies.matches(enemy_id, &command.target))
        .cloned();
    let Some(enemy_id) = found else {
        return "There's no enemy by that name here.".to_string();
    };

    let outcome = resolve_combat(state, content, &enemy_id, rng);
    let mut lines = outcome.transcript.clone();

    if outcome.victory {
        let troubles = QuestId::from("village_troubles");
        match enemy_id.as_str() {
            "wolf" => lines.extend(record_objective(
                state,
                content,
                quests,
                &troubles,
                OBJECTIVE_CLEAR_FOREST,
            )),
            "mine_guardian" => lines.extend(record_objective(
                state,
                content,
                quests,
                &troubles,
                OBJECTIVE_CLEAR_MINES,
            )),
            _ => {}
        }

        if state.is_victorious() {
            lines.push(victory_text(state));
        }
    }

    join_lines(lines)
}

/// The original end-of-game fanfare, condensed to a response block
fn victory_text(state: &GameState) -> String {
    format!(
        "VICTORY! Congratulations, {}! You have defeated the Dark Knight and saved the kingdom! \
         Enemies defeated: {}. Time: {}h {}m. Locations visited: {}.",
        state.player.name,
        state.enemies_defeated,
        state.game_time / 60,
        state.game_time % 60,
        state.visited.len()
    )
}

// ============================================================================
// Quest bookkeeping
// ============================================================================

/// Record a quest objective, returning the lines to show the player
fn record_objective(
    state: &mut GameState,
    content: &WorldContent,
    quests: &QuestCatalog,
    quest_id: &QuestId,
    objective: &str,
) -> Vec<String> {
    match state.quest_log.record_objective(quests, quest_id, objective) {
        QuestUpdate::NoChange => Vec::new(),
        QuestUpdate::ObjectiveCompleted => {
            vec![format!(
                "Quest objective completed: {}",
                title_case(objective)
            )]
        }
        QuestUpdate::QuestCompleted(reward) => {
            let quest_name = quests
                .get(quest_id)
                .map(|q| q.name.clone())
                .unwrap_or_else(|| quest_id.to_string());
            state.player.inventory.push(reward.clone());
            vec![
                format!("Quest objective completed: {}", title_case(objective)),
                format!("Quest completed: {}", quest_name),
                format!("You received: {}", content.items.display_name(&reward)),
            ]
        }
    }
}

fn title_case(id: &str) -> String {
    id.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn help_text() -> String {
    join_lines(vec![
        "Available commands:".to_string(),
        "- go/move/travel [location]: Move to a connected location".to_string(),
        "- look/examine [object/person]: Look at something or someone".to_string(),
        "- take/get/pickup [item]: Pick up an item".to_string(),
        "- inventory/i/items: Check your inventory".to_string(),
        "- equip/wear/wield [item]: Equip a weapon or armor".to_string(),
        "- use/drink/consume [item]: Use an item like a potion".to_string(),
        "- talk/speak [person]: Talk to an NPC".to_string(),
        "- attack/fight [enemy]: Attack an enemy".to_string(),
        "- help/commands: Show this help message".to_string(),
    ])
}

fn join_lines(lines: Vec<String>) -> String {
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::LocationId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fresh() -> (WorldContent, QuestCatalog, GameState, ChaCha8Rng) {
        let content = WorldContent::standard();
        let quests = QuestCatalog::standard();
        let state = GameState::new(&content, "Tester");
        (content, quests, state, ChaCha8Rng::seed_from_u64(42))
    }

    #[test]
    fn test_empty_input_is_empty_response() {
        let (content, quests, mut state, mut rng) = fresh();
        let time_before = state.game_time;
        let response = process(&mut state, &content, &quests, &mut rng, "   ");
        assert_eq!(response, "");
        assert_eq!(state.game_time, time_before);
    }

    #[test]
    fn test_unknown_command() {
        let (content, quests, mut state, mut rng) = fresh();
        let response = process(&mut state, &content, &quests, &mut rng, "dance wildly");
        assert!(response.contains("I don't understand that command"));
    }

    #[test]
    fn test_go_moves_and_spends_time() {
        let (content, quests, mut state, mut rng) = fresh();
        let response = process(&mut state, &content, &quests, &mut rng, "go forest path");
        assert_eq!(state.current_location, LocationId::from("forest_path"));
        assert!(response.contains("You have arrived at Forest Path."));
        // travel (10) + command (1)
        assert_eq!(state.game_time, 11);
    }

    #[test]
    fn test_go_blocked_without_key() {
        let (content, quests, mut state, mut rng) = fresh();
        process(&mut state, &content, &quests, &mut rng, "go forest path");
        let response = process(&mut state, &content, &quests, &mut rng, "go mines");
        assert!(response.contains("You need a mine key to enter Abandoned Mines."));
        assert_eq!(state.current_location, LocationId::from("forest_path"));
    }

    #[test]
    fn test_take_then_enter_gated_location() {
        let (content, quests, mut state, mut rng) = fresh();
        process(&mut state, &content, &quests, &mut rng, "go forest path");
        let response = process(&mut state, &content, &quests, &mut rng, "take mine key");
        assert!(response.contains("You picked up Mine Key."));
        assert!(state.player.has_item(&ItemId::from("mine_key")));

        let response = process(&mut state, &content, &quests, &mut rng, "go mines");
        assert_eq!(state.current_location, LocationId::from("mine_entrance"));
        assert!(response.contains("Abandoned Mines"));
    }

    #[test]
    fn test_look_describes_item_here() {
        let (content, quests, mut state, mut rng) = fresh();
        let response = process(&mut state, &content, &quests, &mut rng, "look map");
        assert!(response.contains("A crude map showing the surrounding areas."));
    }

    #[test]
    fn test_look_miss() {
        let (content, quests, mut state, mut rng) = fresh();
        let response = process(&mut state, &content, &quests, &mut rng, "look dragon");
        assert_eq!(response, "You don't see that here.");
    }

    #[test]
    fn test_inventory_lists_equipment() {
        let (content, quests, mut state, mut rng) = fresh();
        let response = process(&mut state, &content, &quests, &mut rng, "inventory");
        assert!(response.contains("- Rusty Sword (equipped weapon)"));
        assert!(response.contains("- Health Potion"));
    }

    #[test]
    fn test_equip_rejects_key_items() {
        let (content, quests, mut state, mut rng) = fresh();
        process(&mut state, &content, &quests, &mut rng, "take map");
        let response = process(&mut state, &content, &quests, &mut rng, "equip map");
        assert!(response.contains("You can't equip Village Map."));
    }

    #[test]
    fn test_use_potion_heals_and_consumes() {
        let (content, quests, mut state, mut rng) = fresh();
        state.player.health = 50;
        let response = process(&mut state, &content, &quests, &mut rng, "drink potion");
        assert!(response.contains("You used Health Potion and recovered 25 health points."));
        assert_eq!(state.player.health, 75);
        assert!(!state.player.has_item(&ItemId::from("health_potion")));
    }

    #[test]
    fn test_use_potion_caps_at_max_health() {
        let (content, quests, mut state, mut rng) = fresh();
        state.player.health = 90;
        process(&mut state, &content, &quests, &mut rng, "use potion");
        assert_eq!(state.player.health, state.player.max_health);
    }

    #[test]
    fn test_talk_to_elder_offers_quest() {
        let (content, quests, mut state, mut rng) = fresh();
        let response = process(&mut state, &content, &quests, &mut rng, "talk elder");
        assert!(response.contains("Welcome to Oakvale, traveler."));
        assert!(response.contains("Elder Thorne has a quest for you: Village Troubles"));
    }

    #[test]
    fn test_talk_miss() {
        let (content, quests, mut state, mut rng) = fresh();
        let response = process(&mut state, &content, &quests, &mut rng, "talk king");
        assert_eq!(response, "There's no one by that name here.");
    }

    #[test]
    fn test_attack_wolf_records_forest_objective() {
        let (content, quests, mut state, mut rng) = fresh();
        process(&mut state, &content, &quests, &mut rng, "go forest path");
        let response = process(&mut state, &content, &quests, &mut rng, "attack wolf");
        assert!(response.contains("You engage in combat with Wolf!"));
        assert!(response.contains("You defeated Wolf!"));
        assert!(response.contains("Quest objective completed: Clear Forest"));
    }

    #[test]
    fn test_attack_missing_enemy() {
        let (content, quests, mut state, mut rng) = fresh();
        let response = process(&mut state, &content, &quests, &mut rng, "attack wolf");
        assert_eq!(response, "There's no enemy by that name here.");
    }

    #[test]
    fn test_help_lists_commands() {
        let (content, quests, mut state, mut rng) = fresh();
        let response = process(&mut state, &content, &quests, &mut rng, "help");
        assert!(response.contains("Available commands:"));
        assert!(response.contains("- attack/fight [enemy]: Attack an enemy"));
    }

    #[test]
    fn test_taking_amulet_records_objective() {
        let (content, quests, mut state, mut rng) = fresh();
        // Walk to the mine depths with the key
        for cmd in ["go forest path", "take mine key", "go mines", "go depths"] {
            process(&mut state, &content, &quests, &mut rng, cmd);
        }
        assert_eq!(state.current_location, LocationId::from("mine_depths"));
        let response = process(&mut state, &content, &quests, &mut rng, "take amulet");
        assert!(response.contains("You picked up Ancient Amulet."));
        assert!(response.contains("Quest objective completed: Find Amulet"));
    }
}
