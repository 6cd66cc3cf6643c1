//! Chat endpoint payloads

use serde::{Deserialize, Serialize};

use crate::domain::grounding::ApiLink;
use crate::domain::session::SessionMessage;
use crate::infrastructure::services::ChatReply;

/// Body of `POST /api/v1/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Continue this session; a new one is started when absent
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: String,
    pub links: Vec<ApiLink>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            session_id: reply.session_id,
            reply: reply.reply,
            links: reply.links,
        }
    }
}

/// Stored turns of one session, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionHistoryResponse {
    pub session_id: String,
    pub messages: Vec<SessionMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_missing_session_id() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"상품 API"}"#).unwrap();
        assert!(request.session_id.is_none());
        assert_eq!(request.message, "상품 API");
    }

    #[test]
    fn test_request_reads_camel_case_session_id() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"sessionId":"abc","message":"hi"}"#).unwrap();
        assert_eq!(request.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_response_serializes_generic_link_with_nulls() {
        let response = ChatResponse {
            session_id: "s-1".to_string(),
            reply: "안내".to_string(),
            links: vec![ApiLink {
                title: "Swagger 문서 전체 보기".to_string(),
                method: None,
                path: None,
                url: "http://localhost:8080/swagger-ui/index.html".to_string(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["sessionId"], "s-1");
        assert!(json["links"][0]["method"].is_null());
        assert!(json["links"][0]["path"].is_null());
    }
}
