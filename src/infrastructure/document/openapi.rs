//! OpenAPI / Swagger JSON loading
//!
//! Every operation under `paths` becomes one [`ApiDocument`]. Paths keep the
//! order of the parsed JSON object and operations follow [`OPERATION_METHODS`].

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::{ApiDocument, DomainError};
use crate::infrastructure::llm::HttpClientTrait;

const OPERATION_METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Extract one document per (path, operation) from an OpenAPI or Swagger document
pub fn parse_openapi_documents(spec: &Value) -> Vec<ApiDocument> {
    let Some(paths) = spec.get("paths").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut documents = Vec::new();

    for (path, item) in paths {
        for method in OPERATION_METHODS {
            let Some(operation) = item.get(*method).filter(|op| op.is_object()) else {
                continue;
            };

            let mut doc = ApiDocument::new(method.to_uppercase(), path.as_str());

            if let Some(summary) = operation.get("summary").and_then(Value::as_str) {
                doc = doc.with_summary(summary);
            }

            if let Some(description) = operation.get("description").and_then(Value::as_str) {
                doc = doc.with_description(description);
            }

            documents.push(doc);
        }
    }

    documents
}

/// Load documents from a file path or an http(s) URL
pub async fn load_openapi_documents<C: HttpClientTrait>(
    location: &str,
    client: &C,
) -> Result<Vec<ApiDocument>, DomainError> {
    let spec = if is_remote(location) {
        debug!(url = %location, "Fetching OpenAPI document");
        client.get_json(location).await.map_err(|e| {
            DomainError::document_source(format!("Failed to fetch '{}': {}", location, e))
        })?
    } else {
        debug!(path = %location, "Reading OpenAPI document");
        let raw = tokio::fs::read_to_string(location).await.map_err(|e| {
            DomainError::document_source(format!("Failed to read '{}': {}", location, e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            DomainError::document_source(format!("Invalid JSON in '{}': {}", location, e))
        })?
    };

    let documents = parse_openapi_documents(&spec);
    info!(location = %location, count = documents.len(), "Loaded API documents");

    Ok(documents)
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
