//! API Documentation Assistant
//!
//! A chat assistant that answers questions about a REST API from its
//! OpenAPI documents:
//! - Replies grounded in a bounded rendering of the documented endpoints
//! - Guardrails that replace replies pointing at unrelated endpoints
//! - Reference links for every endpoint a reply mentions

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use domain::{ApiDocument, InMemoryDocumentSource, LlmProvider, SessionStore};
use infrastructure::{
    document::load_openapi_documents,
    llm::{HttpClient, LlmProviderFactory},
    services::{ChatAssistantConfig, ChatAssistantService},
    session::InMemorySessionStore,
};
use tracing::{info, warn};

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let llm_provider = LlmProviderFactory::from_config(&config.llm)?;
    info!(
        provider = llm_provider.provider_name(),
        model = %config.llm.model,
        "LLM provider configured"
    );

    let documents = load_documents(config).await;
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let assistant = ChatAssistantService::new(
        llm_provider,
        Arc::new(InMemoryDocumentSource::new(documents)),
        sessions.clone(),
        ChatAssistantConfig::from_app_config(config),
    );

    Ok(AppState::new(Arc::new(assistant), sessions))
}

/// Load API documents from the configured OpenAPI location.
/// A missing location or a failed load yields no documents.
pub async fn load_documents(config: &AppConfig) -> Vec<ApiDocument> {
    let Some(location) = config
        .documents
        .openapi_location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
    else {
        warn!("documents.openapi_location is not set, starting without API documents");
        return Vec::new();
    };

    let client = match HttpClient::with_timeout(Duration::from_secs(config.llm.timeout_secs)) {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, "Failed to build HTTP client for API documents");
            return Vec::new();
        }
    };

    match load_openapi_documents(location, &client).await {
        Ok(documents) => documents,
        Err(e) => {
            warn!(location = %location, error = %e, "Failed to load API documents");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocumentsConfig;

    #[tokio::test]
    async fn test_missing_location_yields_no_documents() {
        let config = AppConfig::default();
        assert!(load_documents(&config).await.is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_location_yields_no_documents() {
        let config = AppConfig {
            documents: DocumentsConfig {
                openapi_location: Some("/nonexistent/openapi.json".to_string()),
            },
            ..AppConfig::default()
        };
        assert!(load_documents(&config).await.is_empty());
    }

    #[tokio::test]
    async fn test_state_from_local_openapi_file() {
        let path = std::env::temp_dir().join(format!("openapi-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"{"paths":{"/api/v1/products":{"get":{"summary":"상품 목록 조회"}}}}"#,
        )
        .unwrap();

        let config = AppConfig {
            documents: DocumentsConfig {
                openapi_location: Some(path.to_string_lossy().into_owned()),
            },
            ..AppConfig::default()
        };

        let state = create_app_state_with_config(&config).await.unwrap();
        let documents = state.assistant.documents().await;
        std::fs::remove_file(&path).ok();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].path(), "/api/v1/products");
    }
}
