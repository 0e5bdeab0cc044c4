//! Integration tests for the full adventure
//!
//! These drive a complete session through the main quest line the way a
//! player would: clear the forest, open the mines, defeat the guardian,
//! deliver the amulet, and face the Dark Knight. The session RNG is
//! seeded, and the walkthrough only relies on outcomes that hold for any
//! roll sequence (worst-case damage is bounded well above zero health).

use oakvale::core::types::{ItemId, LocationId};
use oakvale::game::GameSession;

fn run(session: &mut GameSession, commands: &[&str]) -> Vec<String> {
    commands
        .iter()
        .map(|cmd| session.handle_command(cmd))
        .collect()
}

#[test]
fn test_main_quest_walkthrough_to_victory() {
    let mut session = GameSession::with_seed(1234);

    // Gear up at the forge before facing the forest
    run(
        &mut session,
        &[
            "go blacksmith",
            "take leather armor",
            "equip leather armor",
            "go village",
        ],
    );
    assert_eq!(
        session.state().player.equipped_armor,
        Some(ItemId::from("leather_armor"))
    );

    // Clear the forest and collect the mine key
    let responses = run(
        &mut session,
        &["go forest path", "attack wolf", "take mine key"],
    );
    assert!(responses[1].contains("You defeated Wolf!"));
    assert!(responses[1].contains("Quest objective completed: Clear Forest"));
    assert!(session.state().player.has_item(&ItemId::from("mine_key")));

    // Pick up the iron sword in the deep forest, then heal up
    run(
        &mut session,
        &[
            "go deep forest",
            "take iron sword",
            "equip iron sword",
            "drink health potion",
            "go forest path",
        ],
    );
    assert_eq!(
        session.state().player.equipped_weapon,
        Some(ItemId::from("iron_sword"))
    );

    // Into the mines; the guardian drops the castle key and finishes
    // the village quest
    let responses = run(
        &mut session,
        &["go mines", "go depths", "attack guardian"],
    );
    assert!(responses[2].contains("You defeated Mine Guardian!"));
    assert!(responses[2].contains("Quest objective completed: Clear Mines"));
    assert!(responses[2].contains("Quest completed: Village Troubles"));
    assert!(responses[2].contains("You received: Greater Health Potion"));
    assert!(session.state().player.has_item(&ItemId::from("castle_key")));

    // The amulet starts the delivery leg
    let responses = run(
        &mut session,
        &["take amulet", "use greater health potion"],
    );
    assert!(responses[0].contains("Quest objective completed: Find Amulet"));

    // Back out and up to the castle; carrying the amulet through the
    // gate delivers it and earns the enchanted blade
    let responses = run(
        &mut session,
        &[
            "go entrance",
            "go forest path",
            "go village",
            "go square",
            "go castle gate",
        ],
    );
    let delivery = responses.last().unwrap();
    assert!(delivery.contains("Quest objective completed: Deliver Amulet"));
    assert!(delivery.contains("Quest completed: The Royal Amulet"));
    assert!(delivery.contains("You received: Enchanted Blade"));

    // Final gear, final fights
    run(
        &mut session,
        &["equip enchanted blade", "go castle hall", "attack sentry"],
    );
    // The hall's only ground item is the knight's plate
    run(&mut session, &["take armor", "equip knight"]);

    let finale = session.handle_command("go throne room");
    assert!(finale.contains("Throne Room"));
    let finale = session.handle_command("attack dark knight");
    assert!(finale.contains("You defeated Dark Knight!"));
    assert!(finale.contains("VICTORY!"));
    assert!(session.state().is_victorious());
    assert!(session.state().player.health > 0);
}

#[test]
fn test_locked_doors_respected_along_the_way() {
    let mut session = GameSession::with_seed(7);

    let response = session.handle_command("go forest path");
    assert!(response.contains("Abandoned Mines (locked)"));

    let response = session.handle_command("go mines");
    assert!(response.contains("You need a mine key to enter Abandoned Mines."));
    assert_eq!(
        session.state().current_location,
        LocationId::from("forest_path")
    );
}

#[test]
fn test_talking_quest_giver_tracks_progress() {
    let mut session = GameSession::with_seed(21);

    let offer = session.handle_command("talk elder");
    assert!(offer.contains("has a quest for you: Village Troubles"));

    // Clear the forest, then check the active-quest line
    run(&mut session, &["go forest path", "attack wolf", "go village"]);
    let active = session.handle_command("talk elder");
    assert!(active.contains("Have you checked the forest and the abandoned mines yet?"));
}

#[test]
fn test_game_time_accumulates() {
    let mut session = GameSession::with_seed(3);
    run(&mut session, &["look", "go forest path", "go village"]);
    // Two travels (10 each) plus three command minutes
    assert_eq!(session.state().game_time, 23);
}
