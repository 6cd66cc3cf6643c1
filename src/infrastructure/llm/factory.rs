use std::sync::Arc;
use std::time::Duration;

use super::http_client::HttpClient;
use super::OpenAiProvider;
use crate::config::LlmConfig;
use crate::domain::{DomainError, LlmProvider};

/// Factory for creating LLM providers
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create the configured OpenAI-compatible provider
    pub fn from_config(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, DomainError> {
        if config.base_url.trim().is_empty() {
            return Err(DomainError::configuration("llm.base_url must not be empty"));
        }

        let http_client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;
        let provider =
            OpenAiProvider::with_base_url(http_client, config.resolved_api_key(), &config.base_url);

        Ok(Arc::new(provider))
    }
}
