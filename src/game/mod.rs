//! Mutable game layer: session state, quest progress, and the session
//! wrapper the server drives

pub mod quests;
pub mod session;
pub mod state;

pub use quests::{Quest, QuestCatalog, QuestLog, QuestUpdate};
pub use session::GameSession;
pub use state::{GameState, Player};
