//! Reply relevance check
//!
//! A reply naming endpoints is trusted only when at least one named endpoint's
//! documentation shares a domain keyword with the question. Matching is plain
//! lower-cased substring containment.

use super::paths::PathExtractor;
use super::vocabulary::KeywordExtractor;
use crate::domain::document::ApiDocument;

/// Outcome of a relevance check, in rule order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelevanceVerdict {
    /// The reply is itself a "not found" answer
    DeclinedAnswer,
    /// No endpoint path is mentioned
    NoPathsMentioned,
    /// The question contains no vocabulary term
    NoKeywords,
    /// A mentioned endpoint's documentation contains a question keyword
    Matched { path: String, keyword: String },
    /// None of the mentioned endpoints match any question keyword
    Mismatch {
        keywords: Vec<String>,
        paths: Vec<String>,
    },
}

impl RelevanceVerdict {
    pub fn is_relevant(&self) -> bool {
        !matches!(self, Self::Mismatch { .. })
    }
}

/// Decides whether a (question, reply) pair can be trusted given the known documents
#[derive(Debug, Clone)]
pub struct RelevanceValidator {
    paths: PathExtractor,
    keywords: KeywordExtractor,
    not_found_marker: String,
}

impl RelevanceValidator {
    pub fn new(
        paths: PathExtractor,
        keywords: KeywordExtractor,
        not_found_marker: impl Into<String>,
    ) -> Self {
        Self {
            paths,
            keywords,
            not_found_marker: not_found_marker.into(),
        }
    }

    pub fn is_relevant(&self, question: &str, reply: &str, documents: &[ApiDocument]) -> bool {
        self.evaluate(question, reply, documents).is_relevant()
    }

    pub fn evaluate(
        &self,
        question: &str,
        reply: &str,
        documents: &[ApiDocument],
    ) -> RelevanceVerdict {
        if !self.not_found_marker.is_empty() && reply.contains(&self.not_found_marker) {
            return RelevanceVerdict::DeclinedAnswer;
        }

        let mentioned = self.paths.extract(reply);
        if mentioned.is_empty() {
            return RelevanceVerdict::NoPathsMentioned;
        }

        let keywords = self.keywords.extract(question);
        if keywords.is_empty() {
            return RelevanceVerdict::NoKeywords;
        }

        for path in &mentioned {
            for doc in documents.iter().filter(|d| d.path() == path) {
                let haystack = comparison_text(doc);

                if let Some(keyword) = keywords
                    .iter()
                    .find(|k| haystack.contains(&k.to_lowercase()))
                {
                    return RelevanceVerdict::Matched {
                        path: path.clone(),
                        keyword: keyword.clone(),
                    };
                }
            }
        }

        RelevanceVerdict::Mismatch {
            keywords,
            paths: mentioned,
        }
    }
}

/// `summary description path`, lower-cased; absent fields render as empty
fn comparison_text(doc: &ApiDocument) -> String {
    format!(
        "{} {} {}",
        doc.summary().unwrap_or_default(),
        doc.description().unwrap_or_default(),
        doc.path()
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grounding::replies::{NOT_FOUND_MARKER, NOT_FOUND_REPLY};

    fn validator() -> RelevanceValidator {
        RelevanceValidator::new(
            PathExtractor::new(),
            KeywordExtractor::default(),
            NOT_FOUND_MARKER,
        )
    }

    fn documents() -> Vec<ApiDocument> {
        vec![
            ApiDocument::new("GET", "/api/v1/products").with_summary("상품 목록 조회"),
            ApiDocument::new("GET", "/api/v1/users")
                .with_summary("사용자 목록")
                .with_description("List registered members"),
            ApiDocument::new("POST", "/api/v1/Orders"),
        ]
    }

    #[test]
    fn test_declined_answer_is_always_relevant() {
        let verdict = validator().evaluate("상품 목록", NOT_FOUND_REPLY, &documents());

        assert_eq!(verdict, RelevanceVerdict::DeclinedAnswer);
        assert!(validator().is_relevant("anything at all", NOT_FOUND_REPLY, &[]));
    }

    #[test]
    fn test_reply_without_paths_is_relevant() {
        let verdict = validator().evaluate("상품 목록", "문서를 참고하세요.", &documents());
        assert_eq!(verdict, RelevanceVerdict::NoPathsMentioned);
    }

    #[test]
    fn test_question_without_keywords_is_relevant() {
        let verdict = validator().evaluate("안녕하세요", "GET /api/v1/users - 사용자 목록", &documents());
        assert_eq!(verdict, RelevanceVerdict::NoKeywords);
    }

    #[test]
    fn test_matching_summary_is_relevant() {
        let verdict = validator().evaluate(
            "상품 목록을 보여주세요",
            "GET /api/v1/products - 상품 목록 조회",
            &documents(),
        );

        assert_eq!(
            verdict,
            RelevanceVerdict::Matched {
                path: "/api/v1/products".to_string(),
                keyword: "상품".to_string(),
            }
        );
    }

    #[test]
    fn test_description_and_path_take_part_in_matching() {
        let docs = documents();

        assert!(validator().is_relevant("member list", "`/api/v1/users`", &docs));
        // path text is lower-cased before comparison
        assert!(validator().is_relevant("new order", "POST /api/v1/Orders", &docs));
    }

    #[test]
    fn test_unrelated_endpoint_is_rejected() {
        let verdict = validator().evaluate(
            "상품 목록을 보여주세요",
            "GET /api/v1/users - 사용자 목록",
            &documents(),
        );

        assert_eq!(
            verdict,
            RelevanceVerdict::Mismatch {
                keywords: vec!["상품".to_string()],
                paths: vec!["/api/v1/users".to_string()],
            }
        );
        assert!(!verdict.is_relevant());
    }

    #[test]
    fn test_unknown_path_is_rejected() {
        assert!(!validator().is_relevant(
            "주문 조회",
            "GET /api/v1/invented - 주문 조회",
            &documents()
        ));
    }

    #[test]
    fn test_any_matching_path_is_enough() {
        assert!(validator().is_relevant(
            "상품",
            "GET /api/v1/users\nGET /api/v1/products",
            &documents()
        ));
    }
}
