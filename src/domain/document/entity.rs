//! API document entity

use serde::{Deserialize, Serialize};

/// A single documented API operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocument {
    path: String,
    http_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl ApiDocument {
    pub fn new(http_method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            http_method: http_method.into(),
            summary: None,
            description: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    // Getters
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn http_method(&self) -> &str {
        &self.http_method
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Summary, when present and not blank
    pub fn non_blank_summary(&self) -> Option<&str> {
        self.summary().filter(|s| !s.trim().is_empty())
    }

    /// HTTP method, when not blank
    pub fn non_blank_method(&self) -> Option<&str> {
        Some(self.http_method.as_str()).filter(|m| !m.trim().is_empty())
    }

    /// Documents without a usable path are never linked or matched
    pub fn has_path(&self) -> bool {
        !self.path.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_builder() {
        let doc = ApiDocument::new("GET", "/api/v1/products")
            .with_summary("상품 목록 조회")
            .with_description("모든 상품을 페이지 단위로 조회합니다");

        assert_eq!(doc.http_method(), "GET");
        assert_eq!(doc.path(), "/api/v1/products");
        assert_eq!(doc.summary(), Some("상품 목록 조회"));
        assert!(doc.has_path());
    }

    #[test]
    fn test_blank_fields_are_treated_as_absent() {
        let doc = ApiDocument::new("  ", " ").with_summary("   ");

        assert_eq!(doc.non_blank_summary(), None);
        assert_eq!(doc.non_blank_method(), None);
        assert!(!doc.has_path());
    }

    #[test]
    fn test_document_json_uses_camel_case() {
        let doc = ApiDocument::new("POST", "/api/v1/orders");
        let json = serde_json::to_string(&doc).unwrap();

        assert!(json.contains("\"httpMethod\":\"POST\""));
        assert!(!json.contains("summary"));
    }
}
