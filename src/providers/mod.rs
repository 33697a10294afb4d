//! Completion endpoint integration

mod openrouter;

pub use openrouter::{OpenRouterBackend, OpenRouterConfig};

use async_trait::async_trait;
use thiserror::Error;

use crate::conversation::Message;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A remote service that accepts a message list and returns one generated
/// reply. Kept behind a trait so the chat service can be driven by a scripted
/// backend in tests.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<Message, ProviderError>;
}
