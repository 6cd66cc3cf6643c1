//! Chat assistant orchestration
//!
//! Runs one chat turn end to end: session bookkeeping, document retrieval,
//! context rendering, the model call, and the guardrail stages that decide
//! what the user finally sees. Every failure past session resolution
//! degrades to a fixed reply instead of an error.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::domain::document::{ApiDocument, DocumentSource};
use crate::domain::grounding::{
    dedupe_lines, select_mentioned, ApiLink, ContextBuilder, FallbackReplies, KeywordExtractor,
    LinkBuilder, PathExtractor, PromptBuilder, RelevanceValidator, RelevanceVerdict,
    DEFAULT_DOCS_INDEX_PATH, DEFAULT_KEYWORDS, DEFAULT_MAX_CONTEXT_CHARS, DEFAULT_MAX_LINKS,
};
use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::session::SessionStore;
use crate::domain::DomainError;
use crate::infrastructure::observability::{
    record_chat_outcome, record_llm_request, ChatOutcome, LlmRequestMetricParams,
};

/// Settings for the chat assistant
#[derive(Debug, Clone)]
pub struct ChatAssistantConfig {
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub api_base_url: String,
    pub docs_index_path: String,
    pub max_context_chars: usize,
    pub max_links: usize,
    pub keywords: Vec<String>,
    pub replies: FallbackReplies,
}

impl Default for ChatAssistantConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: Some(0.0),
            max_tokens: None,
            api_base_url: "http://localhost:8080".to_string(),
            docs_index_path: DEFAULT_DOCS_INDEX_PATH.to_string(),
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
            max_links: DEFAULT_MAX_LINKS,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            replies: FallbackReplies::default(),
        }
    }
}

impl ChatAssistantConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            model: config.llm.model.clone(),
            temperature: Some(config.llm.temperature),
            max_tokens: config.llm.max_tokens,
            api_base_url: config.assistant.api_base_url.clone(),
            docs_index_path: config.assistant.docs_index_path.clone(),
            max_context_chars: config.assistant.max_context_chars,
            max_links: config.assistant.max_links,
            keywords: config.assistant.keywords.clone(),
            replies: FallbackReplies::default(),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_max_context_chars(mut self, max: usize) -> Self {
        self.max_context_chars = max;
        self
    }
}

/// What the user receives for one chat turn
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub session_id: String,
    pub reply: String,
    pub links: Vec<ApiLink>,
}

/// Reply after the guardrail stages, before it is recorded
#[derive(Debug, Clone, PartialEq)]
pub struct GroundedReply {
    pub reply: String,
    pub links: Vec<ApiLink>,
    pub outcome: ChatOutcome,
}

impl GroundedReply {
    fn fixed(reply: impl Into<String>, outcome: ChatOutcome) -> Self {
        Self {
            reply: reply.into(),
            links: Vec::new(),
            outcome,
        }
    }
}

/// Chat assistant grounded in API documents
pub struct ChatAssistantService {
    llm_provider: Arc<dyn LlmProvider>,
    documents: Arc<dyn DocumentSource>,
    sessions: Arc<dyn SessionStore>,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    max_links: usize,
    context_builder: ContextBuilder,
    prompt_builder: PromptBuilder,
    validator: RelevanceValidator,
    paths: PathExtractor,
    links: LinkBuilder,
    replies: FallbackReplies,
}

impl ChatAssistantService {
    pub fn new(
        llm_provider: Arc<dyn LlmProvider>,
        documents: Arc<dyn DocumentSource>,
        sessions: Arc<dyn SessionStore>,
        config: ChatAssistantConfig,
    ) -> Self {
        let paths = PathExtractor::new();
        let keywords = KeywordExtractor::new(config.keywords);

        Self {
            llm_provider,
            documents,
            sessions,
            model: config.model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            max_links: config.max_links,
            context_builder: ContextBuilder::new(config.max_context_chars),
            prompt_builder: PromptBuilder::new(config.max_links, config.replies.not_found.clone()),
            validator: RelevanceValidator::new(
                paths.clone(),
                keywords,
                config.replies.not_found_marker.clone(),
            ),
            paths,
            links: LinkBuilder::new(config.api_base_url)
                .with_docs_index_path(config.docs_index_path),
            replies: config.replies,
        }
    }

    /// Answer one user message within a (possibly new) session
    pub async fn respond(&self, session_id: Option<String>, message: &str) -> ChatReply {
        let session_id = self.resolve_session(session_id).await;
        info!(session_id = %session_id, "Chat request received");

        if let Err(e) = self.sessions.append_user_message(&session_id, message).await {
            warn!(session_id = %session_id, error = %e, "Failed to record user message");
        }

        let grounded = self.answer(&session_id, message).await;

        if let Err(e) = self
            .sessions
            .append_assistant_message(&session_id, &grounded.reply)
            .await
        {
            warn!(session_id = %session_id, error = %e, "Failed to record assistant message");
        }

        record_chat_outcome(grounded.outcome, grounded.links.len());
        info!(
            session_id = %session_id,
            outcome = grounded.outcome.as_str(),
            links = grounded.links.len(),
            "Chat reply ready"
        );

        ChatReply {
            session_id,
            reply: grounded.reply,
            links: grounded.links,
        }
    }

    /// Documents currently known to the assistant; a failing source counts as empty
    pub async fn documents(&self) -> Vec<ApiDocument> {
        match self.documents.get_all_documents().await {
            Ok(documents) => documents,
            Err(e) => {
                error!(error = %e, "Document source failed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Render the model context for the given documents
    pub fn render_context(&self, documents: &[ApiDocument]) -> String {
        self.context_builder.build(documents)
    }

    /// Apply deduplication, the relevance check, and link derivation to a raw model reply
    pub fn ground_reply(
        &self,
        question: &str,
        raw_reply: &str,
        documents: &[ApiDocument],
    ) -> GroundedReply {
        let reply = dedupe_lines(raw_reply);
        debug!(reply = %reply, "Deduplicated model reply");

        let verdict = self.validator.evaluate(question, &reply, documents);
        match &verdict {
            RelevanceVerdict::Mismatch { keywords, paths } => {
                warn!(
                    ?keywords,
                    ?paths,
                    "Reply endpoints do not match the question, replacing reply"
                );
                return GroundedReply {
                    reply: self.replies.not_found.clone(),
                    links: vec![self.links.generic_link()],
                    outcome: ChatOutcome::Rejected,
                };
            }
            RelevanceVerdict::Matched { path, keyword } => {
                debug!(%path, %keyword, "Reply grounded in documentation");
            }
            other => debug!(verdict = ?other, "Relevance check passed"),
        }

        let mentioned = self.paths.extract(&reply);
        info!(paths = ?mentioned, "Endpoints mentioned in reply");
        let selected = select_mentioned(documents, &mentioned, self.max_links);
        let mut links = self.links.build(&selected);
        if links.is_empty() {
            links.push(self.links.generic_link());
        }

        GroundedReply {
            reply,
            links,
            outcome: ChatOutcome::Answered,
        }
    }

    async fn resolve_session(&self, requested: Option<String>) -> String {
        match self.sessions.ensure_session_id(requested).await {
            Ok(id) => id,
            Err(e) => {
                let id = Uuid::new_v4().to_string();
                warn!(error = %e, session_id = %id, "Session store unavailable, using detached session");
                id
            }
        }
    }

    async fn answer(&self, session_id: &str, question: &str) -> GroundedReply {
        let documents = self.documents().await;
        if documents.is_empty() {
            warn!(session_id = %session_id, "No API documents available");
            return GroundedReply::fixed(&self.replies.no_documents, ChatOutcome::NoDocuments);
        }

        let context = self.render_context(&documents);
        info!(
            session_id = %session_id,
            documents = documents.len(),
            context_chars = context.chars().count(),
            "Context prepared"
        );

        let request = self.build_request(&context, question);
        info!(session_id = %session_id, model = %self.model, "Calling LLM");
        match self.complete(request).await {
            Ok(raw) => {
                info!(session_id = %session_id, reply_chars = raw.chars().count(), "LLM replied");
                self.ground_reply(question, &raw, &documents)
            }
            Err(e) => {
                error!(session_id = %session_id, error = %e, "LLM call failed");
                GroundedReply::fixed(&self.replies.service_delayed, ChatOutcome::LlmFailure)
            }
        }
    }

    fn build_request(&self, context: &str, question: &str) -> LlmRequest {
        let mut builder = LlmRequest::builder()
            .system(self.prompt_builder.system_instruction())
            .user(self.prompt_builder.user_prompt(context, question));

        if let Some(temperature) = self.temperature {
            builder = builder.temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }

        builder.build()
    }

    async fn complete(&self, request: LlmRequest) -> Result<String, DomainError> {
        let provider = self.llm_provider.provider_name();
        let start = Instant::now();
        let result = self.llm_provider.chat(&self.model, request).await;

        let usage = result.as_ref().ok().and_then(|r| r.usage.clone());
        record_llm_request(LlmRequestMetricParams {
            provider,
            model: &self.model,
            duration: start.elapsed(),
            success: result.is_ok(),
            input_tokens: usage.as_ref().map(|u| u64::from(u.prompt_tokens)),
            output_tokens: usage.as_ref().map(|u| u64::from(u.completion_tokens)),
        });

        Ok(result?.content().to_string())
    }
}
