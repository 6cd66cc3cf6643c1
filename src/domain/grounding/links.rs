//! Reference links for the endpoints a reply mentions

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::document::ApiDocument;

/// Default path of the documentation index page
pub const DEFAULT_DOCS_INDEX_PATH: &str = "/swagger-ui/index.html";

/// Title of the documentation index link
pub const GENERIC_LINK_TITLE: &str = "Swagger 문서 전체 보기";

/// Most documents turned into links for a single reply
pub const DEFAULT_MAX_LINKS: usize = 8;

/// A clickable reference to an endpoint, or to the documentation index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiLink {
    pub title: String,
    pub method: Option<String>,
    pub path: Option<String>,
    pub url: String,
}

/// Turns documents into deduplicated links under a base URL
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
    docs_index_path: String,
}

impl LinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            docs_index_path: DEFAULT_DOCS_INDEX_PATH.to_string(),
        }
    }

    pub fn with_docs_index_path(mut self, path: impl Into<String>) -> Self {
        self.docs_index_path = path.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One link per distinct (path, method); the first document wins
    pub fn build(&self, documents: &[ApiDocument]) -> Vec<ApiLink> {
        let mut seen: HashSet<(&str, Option<&str>)> = HashSet::new();
        let mut links = Vec::new();

        for doc in documents.iter().filter(|d| d.has_path()) {
            let method = doc.non_blank_method();

            if !seen.insert((doc.path(), method)) {
                continue;
            }

            links.push(ApiLink {
                title: link_title(doc),
                method: method.map(str::to_string),
                path: Some(doc.path().to_string()),
                url: format!("{}{}", self.base_url, doc.path()),
            });
        }

        links
    }

    /// Link to the documentation index, used when no endpoint is attributed
    pub fn generic_link(&self) -> ApiLink {
        ApiLink {
            title: GENERIC_LINK_TITLE.to_string(),
            method: None,
            path: None,
            url: format!("{}{}", self.base_url, self.docs_index_path),
        }
    }
}

fn link_title(doc: &ApiDocument) -> String {
    if let Some(summary) = doc.non_blank_summary() {
        return summary.to_string();
    }

    match doc.non_blank_method() {
        Some(method) => format!("{} {}", method, doc.path()),
        None => doc.path().to_string(),
    }
}

/// Documents whose path was mentioned, in document order, at most `limit`
pub fn select_mentioned(
    documents: &[ApiDocument],
    mentioned: &[String],
    limit: usize,
) -> Vec<ApiDocument> {
    documents
        .iter()
        .filter(|d| mentioned.iter().any(|p| p == d.path()))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let builder = LinkBuilder::new("http://localhost:8080/");
        let links = builder.build(&[ApiDocument::new("GET", "/api/v1/products")]);

        assert_eq!(links[0].url, "http://localhost:8080/api/v1/products");
        assert_eq!(
            builder.generic_link().url,
            "http://localhost:8080/swagger-ui/index.html"
        );
    }

    #[test]
    fn test_same_path_and_method_yields_one_link_from_first_document() {
        let builder = LinkBuilder::new("http://docs");
        let links = builder.build(&[
            ApiDocument::new("GET", "/api/v1/products").with_summary("상품 목록"),
            ApiDocument::new("GET", "/api/v1/products").with_summary("다른 요약"),
        ]);

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].title, "상품 목록");
    }

    #[test]
    fn test_same_path_different_method_yields_two_links() {
        let builder = LinkBuilder::new("http://docs");
        let links = builder.build(&[
            ApiDocument::new("GET", "/api/v1/cart"),
            ApiDocument::new("DELETE", "/api/v1/cart"),
        ]);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "GET /api/v1/cart");
        assert_eq!(links[1].method.as_deref(), Some("DELETE"));
    }

    #[test]
    fn test_documents_without_path_are_skipped() {
        let builder = LinkBuilder::new("http://docs");
        let links = builder.build(&[
            ApiDocument::new("GET", ""),
            ApiDocument::new("GET", "   "),
            ApiDocument::new("", "/api/v1/files"),
        ]);

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].title, "/api/v1/files");
        assert_eq!(links[0].method, None);
    }

    #[test]
    fn test_empty_input() {
        assert!(LinkBuilder::new("http://docs").build(&[]).is_empty());
    }

    #[test]
    fn test_generic_link_shape() {
        let link = LinkBuilder::new("http://docs")
            .with_docs_index_path("/docs/index.html")
            .generic_link();

        assert_eq!(link.title, GENERIC_LINK_TITLE);
        assert_eq!(link.method, None);
        assert_eq!(link.path, None);
        assert_eq!(link.url, "http://docs/docs/index.html");
    }

    #[test]
    fn test_link_serializes_absent_fields_as_null() {
        let json = serde_json::to_value(LinkBuilder::new("http://docs").generic_link()).unwrap();

        assert!(json["method"].is_null());
        assert!(json["path"].is_null());
    }

    #[test]
    fn test_select_mentioned_keeps_document_order_and_cap() {
        let docs: Vec<ApiDocument> = (0..12)
            .map(|i| ApiDocument::new("GET", format!("/api/v1/items/{}", i)))
            .collect();
        let mentioned: Vec<String> = (0..12)
            .rev()
            .map(|i| format!("/api/v1/items/{}", i))
            .collect();

        let selected = select_mentioned(&docs, &mentioned, DEFAULT_MAX_LINKS);

        assert_eq!(selected.len(), 8);
        assert_eq!(selected[0].path(), "/api/v1/items/0");
        assert_eq!(selected[7].path(), "/api/v1/items/7");
    }
}
