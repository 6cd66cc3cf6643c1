use serde::{Deserialize, Serialize};

use super::{Message, MessageRole};

/// Parameters for LLM generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl LlmRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn builder() -> LlmRequestBuilder {
        LlmRequestBuilder::new()
    }

    /// Text of the first system message, if any
    pub fn system_text(&self) -> Option<&str> {
        self.find_text(MessageRole::System)
    }

    /// Text of the last user message, if any
    pub fn user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content_text())
    }

    fn find_text(&self, role: MessageRole) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == role)
            .map(|m| m.content_text())
    }
}

/// Builder for LlmRequest
#[derive(Debug, Default)]
pub struct LlmRequestBuilder {
    messages: Vec<Message>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl LlmRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn system(self, content: impl Into<String>) -> Self {
        self.message(Message::system(content))
    }

    pub fn user(self, content: impl Into<String>) -> Self {
        self.message(Message::user(content))
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    pub fn build(self) -> LlmRequest {
        LlmRequest {
            messages: self.messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_orders_messages() {
        let request = LlmRequest::builder()
            .system("rules")
            .user("question")
            .temperature(0.0)
            .build();

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.system_text(), Some("rules"));
        assert_eq!(request.user_text(), Some("question"));
        assert_eq!(request.temperature, Some(0.0));
        assert_eq!(request.max_tokens, None);
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let request = LlmRequest::builder().user("hi").build();
        let json = serde_json::to_string(&request).unwrap();

        assert!(!json.contains("temperature"));
        assert!(!json.contains("max_tokens"));
    }
}
