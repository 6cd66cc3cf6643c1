//! Fixed replies substituted for model output

/// Phrase every "not found" reply contains; a reply carrying it is a declined answer
pub const NOT_FOUND_MARKER: &str = "찾을 수 없습니다";

pub const NO_DOCUMENTS_REPLY: &str = "죄송합니다. 현재 등록된 API 문서가 없습니다.";

pub const SERVICE_DELAYED_REPLY: &str =
    "죄송합니다. 현재 상담이 지연되고 있습니다. 잠시 후 다시 시도해주세요.";

pub const NOT_FOUND_REPLY: &str = "죄송합니다. 해당 내용을 Swagger 문서에서 찾을 수 없습니다.";

/// The replies used when the model's output cannot be served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackReplies {
    pub no_documents: String,
    pub service_delayed: String,
    pub not_found: String,
    pub not_found_marker: String,
}

impl Default for FallbackReplies {
    fn default() -> Self {
        Self {
            no_documents: NO_DOCUMENTS_REPLY.to_string(),
            service_delayed: SERVICE_DELAYED_REPLY.to_string(),
            not_found: NOT_FOUND_REPLY.to_string(),
            not_found_marker: NOT_FOUND_MARKER.to_string(),
        }
    }
}
