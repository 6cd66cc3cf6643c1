//! Grounding and guardrail stages applied around a model call
//!
//! Documents are rendered into a bounded context, the model reply is
//! deduplicated, checked against the question's vocabulary, and the endpoints
//! it mentions become reference links. Every stage is a pure function of its
//! inputs.

mod context;
mod links;
mod paths;
mod prompt;
mod relevance;
mod replies;
mod sanitizer;
mod vocabulary;

pub use context::{render_line, ContextBuilder, DEFAULT_MAX_CONTEXT_CHARS};
pub use links::{
    select_mentioned, ApiLink, LinkBuilder, DEFAULT_DOCS_INDEX_PATH, DEFAULT_MAX_LINKS,
    GENERIC_LINK_TITLE,
};
pub use paths::PathExtractor;
pub use prompt::PromptBuilder;
pub use relevance::{RelevanceValidator, RelevanceVerdict};
pub use replies::{
    FallbackReplies, NOT_FOUND_MARKER, NOT_FOUND_REPLY, NO_DOCUMENTS_REPLY, SERVICE_DELAYED_REPLY,
};
pub use sanitizer::dedupe_lines;
pub use vocabulary::{KeywordExtractor, DEFAULT_KEYWORDS};
