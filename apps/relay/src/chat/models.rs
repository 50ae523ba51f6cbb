use serde::{Deserialize, Serialize};

use crate::chat::files::FileAnalysis;
use crate::llm_client::ChatMessage;

/// Inbound body of `POST /chat` and `POST /api/chat`.
///
/// `message` is optional so that an absent or `null` field reaches the
/// relay's validation instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
    #[serde(default)]
    pub attached_files: Vec<AttachedFile>,
    /// Free-form page context sent by some clients. Accepted, not used.
    #[serde(default)]
    #[allow(dead_code)]
    pub context: Option<String>,
}

/// Metadata of a file the user attached in the client. Bytes never reach the relay.
impl ChatRequest {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// The user turn, with a missing or `null` message read as empty.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedFile {
    pub name: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub priority: Priority,
    pub estimated_time: String,
}

/// Outbound envelope for every chat-shaped endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub suggestions: Vec<String>,
    pub action_items: Vec<ActionItem>,
    /// RFC 3339 UTC timestamp of when the response was shaped.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_analysis: Option<FileAnalysis>,
}
