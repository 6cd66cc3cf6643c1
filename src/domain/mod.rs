//! Domain layer - Core business logic and entities

pub mod document;
pub mod error;
pub mod grounding;
pub mod llm;
pub mod session;

pub use document::{ApiDocument, DocumentSource, InMemoryDocumentSource};
pub use error::DomainError;
pub use grounding::{
    ApiLink, ContextBuilder, FallbackReplies, KeywordExtractor, LinkBuilder, PathExtractor,
    PromptBuilder, RelevanceValidator, RelevanceVerdict,
};
pub use llm::{FinishReason, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole, Usage};
pub use session::{SessionMessage, SessionStore};
