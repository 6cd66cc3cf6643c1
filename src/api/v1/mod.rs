//! Chat API endpoints under `/api/v1`

pub mod chat;
pub mod sessions;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::send_message))
        .route(
            "/chat/sessions/{session_id}/messages",
            get(sessions::list_session_messages),
        )
}
