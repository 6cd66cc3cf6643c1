//! Session store trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::SessionMessage;
use crate::domain::DomainError;

/// Persists the user and assistant turns of each chat session
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Return the requested session id when usable, otherwise a new one
    async fn ensure_session_id(&self, requested: Option<String>) -> Result<String, DomainError>;

    async fn append_user_message(&self, session_id: &str, content: &str) -> Result<(), DomainError>;

    async fn append_assistant_message(
        &self,
        session_id: &str,
        content: &str,
    ) -> Result<(), DomainError>;

    /// Stored turns in insertion order, `None` for an unknown session
    async fn history(&self, session_id: &str) -> Result<Option<Vec<SessionMessage>>, DomainError>;
}
