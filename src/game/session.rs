//! A complete playable session: world content, quest catalog, game state,
//! and the RNG that drives combat

use crate::command::processor::process;
use crate::game::quests::QuestCatalog;
use crate::game::state::GameState;
use crate::world::WorldContent;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";

/// One player's game session
///
/// Owns everything a command needs to execute. The RNG is seedable so a
/// session's combat is reproducible in tests.
pub struct GameSession {
    content: WorldContent,
    quests: QuestCatalog,
    state: GameState,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// New session with OS-seeded randomness
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// New session with a fixed combat seed
    pub fn with_seed(seed: u64) -> Self {
        let content = WorldContent::standard();
        let state = GameState::new(&content, DEFAULT_PLAYER_NAME);
        Self {
            content,
            quests: QuestCatalog::standard(),
            state,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn content(&self) -> &WorldContent {
        &self.content
    }

    /// Process one line of player input, handling game over
    ///
    /// A command that leaves the player at zero health ends the game: the
    /// response reports the defeat and the session restarts fresh.
    pub fn handle_command(&mut self, input: &str) -> String {
        let mut response = process(
            &mut self.state,
            &self.content,
            &self.quests,
            &mut self.rng,
            input,
        );

        if self.state.player.health <= 0 {
            tracing::info!(
                enemies_defeated = self.state.enemies_defeated,
                game_time = self.state.game_time,
                "player defeated, restarting session"
            );
            self.state = GameState::new(&self.content, DEFAULT_PLAYER_NAME);
            if !response.is_empty() {
                response.push('\n');
            }
            response.push_str("Game Over! A new adventure begins in the village of Oakvale.");
        }

        response
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
