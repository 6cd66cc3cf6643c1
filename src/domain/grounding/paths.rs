//! Endpoint path extraction from free text

use once_cell::sync::Lazy;
use regex::Regex;

/// A path wrapped in single backticks, e.g. `` `/api/v1/users/{id}` ``
static CODE_SPAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`(/api/[^`\s]+)`").unwrap());

/// A bare path at the start of the text or after whitespace.
/// Stops at whitespace, `,`, `.`, `:`, `;` or `)`.
static PLAIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)(/api/[^\s,.:;)]+)").unwrap());

/// Extracts `/api/...` paths from model replies and other text
#[derive(Debug, Clone)]
pub struct PathExtractor {
    code_span: Regex,
    plain: Regex,
}

impl PathExtractor {
    pub fn new() -> Self {
        Self {
            code_span: CODE_SPAN_PATTERN.clone(),
            plain: PLAIN_PATTERN.clone(),
        }
    }

    /// Distinct paths in discovery order; backticked matches come first
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut paths: Vec<String> = Vec::new();
        let found = self
            .code_span
            .captures_iter(text)
            .chain(self.plain.captures_iter(text))
            .filter_map(|caps| caps.get(1));

        for m in found {
            let path = m.as_str();
            if !paths.iter().any(|p| p == path) {
                paths.push(path.to_string());
            }
        }

        paths
    }
}

impl Default for PathExtractor {
    fn default() -> Self {
        Self::new()
    }
}
