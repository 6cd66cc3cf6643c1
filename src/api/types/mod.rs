//! Request and response types for the chat API

pub mod chat;
pub mod error;
pub mod json;

pub use chat::{ChatRequest, ChatResponse, SessionHistoryResponse};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
