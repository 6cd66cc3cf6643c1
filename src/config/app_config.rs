use serde::Deserialize;

use crate::domain::grounding::{
    DEFAULT_DOCS_INDEX_PATH, DEFAULT_KEYWORDS, DEFAULT_MAX_CONTEXT_CHARS, DEFAULT_MAX_LINKS,
};
use crate::infrastructure::observability::MetricsConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub documents: DocumentsConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Grounding and link settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Base URL prepended to endpoint paths in links
    pub api_base_url: String,
    /// Path of the documentation index page under `api_base_url`
    pub docs_index_path: String,
    pub max_context_chars: usize,
    pub max_links: usize,
    /// Domain vocabulary matched against questions, in priority order
    pub keywords: Vec<String>,
}

/// OpenAI-compatible chat completion endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    /// Falls back to `OPENAI_API_KEY` when unset
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DocumentsConfig {
    /// OpenAPI/Swagger JSON: a file path or an http(s) URL
    pub openapi_location: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            docs_index_path: DEFAULT_DOCS_INDEX_PATH.to_string(),
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
            max_links: DEFAULT_MAX_LINKS,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            temperature: 0.0,
            max_tokens: None,
            timeout_secs: 30,
        }
    }
}

impl LlmConfig {
    /// Configured key, else `OPENAI_API_KEY`, else empty (for keyless local gateways)
    pub fn resolved_api_key(&self) -> String {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .unwrap_or_default()
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.assistant.max_context_chars, 3000);
        assert_eq!(config.assistant.max_links, 8);
        assert_eq!(config.assistant.docs_index_path, "/swagger-ui/index.html");
        assert_eq!(config.assistant.keywords.first().map(String::as_str), Some("상품"));
        assert_eq!(config.llm.temperature, 0.0);
        assert!(config.documents.openapi_location.is_none());
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_partial_sections_fill_in_defaults() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "assistant": { "api_base_url": "https://shop.example.com/" },
            "logging": { "format": "json" }
        }))
        .unwrap();

        assert_eq!(config.assistant.api_base_url, "https://shop.example.com/");
        assert_eq!(config.assistant.max_links, 8);
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_configured_api_key_wins() {
        let config = LlmConfig {
            api_key: Some("sk-configured".to_string()),
            ..LlmConfig::default()
        };

        assert_eq!(config.resolved_api_key(), "sk-configured");
    }
}
