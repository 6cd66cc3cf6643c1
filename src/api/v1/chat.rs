//! Chat endpoint handler

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ChatRequest, ChatResponse, Json};

/// POST /api/v1/chat
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::bad_request("Message cannot be empty").with_param("message"));
    }

    debug!(
        session_id = ?request.session_id,
        message_chars = request.message.chars().count(),
        "Processing chat message"
    );

    let reply = state
        .assistant
        .respond(request.session_id, &request.message)
        .await;

    Ok(Json(reply.into()))
}
