use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, SessionMessage, SessionStore};

/// Process-local chat history, lost on restart
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Vec<SessionMessage>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn append(&self, session_id: &str, message: SessionMessage) -> Result<(), DomainError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| DomainError::storage("Session store lock poisoned"))?;

        sessions
            .entry(session_id.to_string())
            .or_default()
            .push(message);

        Ok(())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn ensure_session_id(&self, requested: Option<String>) -> Result<String, DomainError> {
        let session_id = requested
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| DomainError::storage("Session store lock poisoned"))?;
        sessions.entry(session_id.clone()).or_default();

        Ok(session_id)
    }

    async fn append_user_message(&self, session_id: &str, content: &str) -> Result<(), DomainError> {
        self.append(session_id, SessionMessage::user(content))
    }

    async fn append_assistant_message(
        &self,
        session_id: &str,
        content: &str,
    ) -> Result<(), DomainError> {
        self.append(session_id, SessionMessage::assistant(content))
    }

    async fn history(&self, session_id: &str) -> Result<Option<Vec<SessionMessage>>, DomainError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| DomainError::storage("Session store lock poisoned"))?;

        Ok(sessions.get(session_id).cloned())
    }
}
