//! Session history endpoint handler

use axum::extract::{Path, State};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, SessionHistoryResponse};
use crate::domain::session::SessionStore;

/// GET /api/v1/chat/sessions/{session_id}/messages
pub async fn list_session_messages(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionHistoryResponse>, ApiError> {
    let messages = state.sessions.history(&session_id).await?.ok_or_else(|| {
        ApiError::not_found(format!("Session '{}' not found", session_id)).with_param("session_id")
    })?;

    Ok(Json(SessionHistoryResponse {
        session_id,
        messages,
    }))
}
