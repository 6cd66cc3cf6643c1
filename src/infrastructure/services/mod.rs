//! Infrastructure services

mod assistant_service;

pub use assistant_service::{ChatAssistantConfig, ChatAssistantService, ChatReply, GroundedReply};
