//! Grounding prompt assembly

use super::replies::NOT_FOUND_REPLY;

/// Builds the system instruction and the context-bearing user prompt
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    max_items: usize,
    not_found_reply: String,
}

impl PromptBuilder {
    pub fn new(max_items: usize, not_found_reply: impl Into<String>) -> Self {
        Self {
            max_items,
            not_found_reply: not_found_reply.into(),
        }
    }

    pub fn system_instruction(&self) -> String {
        format!(
            r#"You are an API assistant. Follow these STRICT rules:

1. Answer based ONLY on the provided Swagger documentation.
2. Match the user's question keywords EXACTLY with API names and descriptions.
3. If NO EXACT match exists, respond: "{not_found}"
4. NEVER suggest similar but different APIs (e.g., "users" when asked about "products").
5. NEVER invent or hallucinate APIs.
6. NEVER repeat the same API multiple times in your answer.
7. List each unique API only once.

Format (NO DUPLICATES):
METHOD /path - Description

Example:
DELETE /api/v1/demo/users/{{userId}} - 사용자 삭제

Max {max_items} items."#,
            not_found = self.not_found_reply,
            max_items = self.max_items,
        )
    }

    pub fn user_prompt(&self, context: &str, question: &str) -> String {
        format!(
            r#"Available APIs:
{context}

User Question: {question}

IMPORTANT:
- Check if ANY keyword in the question (상품, 제품, product, 주문, order, etc.) matches the API descriptions above.
- If NO keyword matches, respond: "{not_found}"
- DO NOT suggest "users" API when asked about "products".
- Answer in Korean."#,
            not_found = self.not_found_reply,
        )
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(super::links::DEFAULT_MAX_LINKS, NOT_FOUND_REPLY)
    }
}
