//! HTTP command server
//!
//! Exposes the game session over the wire protocol the Command Submitter
//! speaks: `POST /command` with `{"command": "<string>"}` returning
//! `{"response": "<string>"}`. A `GET /health` endpoint answers liveness
//! probes.
//!
//! ```ignore
//! use oakvale::game::GameSession;
//! use oakvale::server::{build_router, AppState};
//!
//! let state = AppState::new(GameSession::new());
//! let app = build_router(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

use crate::game::GameSession;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

// ============================================================================
// Wire types
// ============================================================================

/// Request body for `POST /command`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: String,
}

/// Response body for `POST /command`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub response: String,
}

// ============================================================================
// State
// ============================================================================

/// Shared state for the command handlers
///
/// The game session sits behind an async mutex: commands against one
/// session are serialized, concurrent HTTP requests simply queue.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<GameSession>>,
}

impl AppState {
    pub fn new(session: GameSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Build the command router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/command", post(handle_command))
        .route("/health", get(health))
        .with_state(state)
}

/// Run the server until the listener fails
pub async fn serve(addr: &str, state: AppState) -> crate::core::error::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "command server listening");
    axum::serve(listener, build_router(state))
        .await
        .map_err(crate::core::error::QuestError::IoError)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /command
async fn handle_command(
    State(state): State<AppState>,
    Json(request): Json<CommandRequest>,
) -> Json<CommandResponse> {
    tracing::debug!(command = %request.command, "processing command");
    let mut session = state.session.lock().await;
    let response = session.handle_command(&request.command);
    Json(CommandResponse { response })
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_types_round_trip() {
        let request: CommandRequest = serde_json::from_str(r#"{"command": "look"}"#).unwrap();
        assert_eq!(request.command, "look");

        let response = CommandResponse {
            response: "You see a room.".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"response":"You see a room."}"#);
    }
}
