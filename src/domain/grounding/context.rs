//! Grounding context rendering

use crate::domain::document::ApiDocument;

/// Default character budget for the grounding context
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 3000;

/// Renders documents as `[METHOD] PATH - SUMMARY` lines within a character budget
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    limit: usize,
}

impl ContextBuilder {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whole lines only: the first line that would overflow the budget ends the context.
    pub fn build(&self, documents: &[ApiDocument]) -> String {
        let mut context = String::new();
        let mut char_count = 0usize;

        for doc in documents {
            if char_count >= self.limit {
                break;
            }

            let line = render_line(doc);
            let line_chars = line.chars().count();

            if char_count + line_chars > self.limit {
                break;
            }

            context.push_str(&line);
            char_count += line_chars;
        }

        context.trim().to_string()
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONTEXT_CHARS)
    }
}

/// One context line, newline included
pub fn render_line(doc: &ApiDocument) -> String {
    match doc.non_blank_summary() {
        Some(summary) => format!("[{}] {} - {}\n", doc.http_method(), doc.path(), summary),
        None => format!("[{}] {}\n", doc.http_method(), doc.path()),
    }
}
