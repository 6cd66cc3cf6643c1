//! Application state for shared services

use std::sync::Arc;

use crate::domain::session::SessionStore;
use crate::infrastructure::services::ChatAssistantService;

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<ChatAssistantService>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(assistant: Arc<ChatAssistantService>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            assistant,
            sessions,
        }
    }
}
