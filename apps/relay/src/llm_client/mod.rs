/// LLM client: the single point of entry for all upstream completion calls in the relay.
///
/// ARCHITECTURAL RULE: No handler may call a provider API directly.
/// All completions MUST go through a `CompletionProvider` held in `AppState`.
///
/// One call per request: no retry, no backoff, no client-side timeout.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod huggingface;
pub mod openai;
pub mod prompts;

pub use huggingface::HuggingFaceClient;
pub use openai::OpenAiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} API key not configured")]
    MissingCredential(&'static str),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Speaker of a single conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }

    /// Capitalized label used when a conversation is flattened into one prompt string.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
            Role::System => "System",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    #[allow(dead_code)]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Fixed sampling parameters sent with every completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl GenerationParams {
    /// Parameters for the commercial chat-completion API.
    pub const CHAT_API: GenerationParams = GenerationParams {
        temperature: 0.7,
        max_tokens: 1500,
        top_p: 0.9,
    };

    /// Parameters for the hosted inference endpoint.
    pub const HOSTED_INFERENCE: GenerationParams = GenerationParams {
        temperature: 0.7,
        max_tokens: 512,
        top_p: 0.9,
    };
}

/// Opaque text-completion capability. Implement this to swap providers
/// without touching the relay, handlers, or post-processing.
///
/// Carried in `AppState` as `Arc<dyn CompletionProvider>`.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider label for logs.
    fn name(&self) -> &'static str;

    /// Parameters this provider is called with.
    fn params(&self) -> GenerationParams;

    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<String, LlmError>;
}
