//! The relay: one chat request in, one upstream completion, one shaped response out.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::{error, info};

use crate::chat::files::analyze_files;
use crate::chat::models::{ChatRequest, ChatResponse};
use crate::chat::postprocess::{generate_action_items, generate_suggestions, Signals};
use crate::chat::prompt::assemble_messages;
use crate::errors::AppError;
use crate::llm_client::prompts::ASSISTANT_SYSTEM_PROMPT;
use crate::llm_client::CompletionProvider;

#[derive(Clone)]
pub struct Relay {
    provider: Arc<dyn CompletionProvider>,
    history_window: usize,
    fallback_suggestions: bool,
}

impl Relay {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        history_window: usize,
        fallback_suggestions: bool,
    ) -> Self {
        Self {
            provider,
            history_window,
            fallback_suggestions,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Runs the full pipeline for a chat request.
    /// An empty message is rejected before any upstream call.
    pub async fn respond(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        if request.message().trim().is_empty() {
            return Err(AppError::Validation("Message cannot be empty".to_string()));
        }

        let file_analysis = analyze_files(&request.attached_files);
        let file_context = file_analysis.as_ref().map(|a| a.prompt_context());

        let messages = assemble_messages(
            ASSISTANT_SYSTEM_PROMPT,
            &request.conversation_history,
            self.history_window,
            request.message(),
            file_context.as_deref(),
        );

        info!(
            provider = self.provider.name(),
            history = request.conversation_history.len(),
            forwarded = messages.len(),
            attachments = request.attached_files.len(),
            "Forwarding chat request"
        );

        let params = self.provider.params();
        let text = self
            .provider
            .complete(&messages, &params)
            .await
            .map_err(|e| {
                error!("Error generating response: {e}");
                AppError::Llm(format!("Failed to generate response: {e}"))
            })?;

        let signals = Signals::new(request.message(), !request.attached_files.is_empty());

        Ok(ChatResponse {
            response: text,
            suggestions: generate_suggestions(&signals, self.fallback_suggestions),
            action_items: generate_action_items(&signals),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            file_analysis,
        })
    }

    /// Single-turn request built server-side from a prompt template.
    pub async fn respond_to_prompt(&self, prompt: String) -> Result<ChatResponse, AppError> {
        self.respond(&ChatRequest::with_message(prompt)).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{ChatMessage, CompletionProvider, GenerationParams, LlmError};

    /// Provider double that records the messages it receives.
    pub struct StubProvider {
        reply: Result<String, String>,
        pub calls: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl StubProvider {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn last_call(&self) -> Vec<ChatMessage> {
            self.calls.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn params(&self) -> GenerationParams {
            GenerationParams::CHAT_API
        }

        async fn complete(
            &self,
            messages: &[ChatMessage],
            _params: &GenerationParams,
        ) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push(messages.to_vec());
            self.reply.clone().map_err(|message| LlmError::Api {
                status: 500,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::StubProvider;
    use super::*;
    use crate::chat::models::AttachedFile;
    use crate::chat::prompt::DEFAULT_HISTORY_WINDOW;
    use crate::llm_client::{ChatMessage, Role};

    fn relay_with(stub: Arc<StubProvider>) -> Relay {
        Relay::new(stub, DEFAULT_HISTORY_WINDOW, true)
    }

    #[tokio::test]
    async fn test_empty_message_never_reaches_provider() {
        let stub = Arc::new(StubProvider::replying("unused"));
        let relay = relay_with(stub.clone());

        let err = relay
            .respond(&ChatRequest {
                message: Some("   ".to_string()),
                ..ChatRequest::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_response_carries_text_and_shaped_lists() {
        let stub = Arc::new(StubProvider::replying("Here is a plan."));
        let relay = relay_with(stub.clone());

        let response = relay
            .respond(&ChatRequest {
                message: Some("I need help with my literature review methodology".to_string()),
                ..ChatRequest::default()
            })
            .await
            .unwrap();

        assert_eq!(response.response, "Here is a plan.");
        assert!(response.suggestions.contains(&"Find relevant databases".to_string()));
        assert!(response
            .suggestions
            .contains(&"Design research framework".to_string()));
        assert!(response
            .action_items
            .iter()
            .any(|i| i.task == "Select appropriate research design"));
        assert!(response.file_analysis.is_none());
        assert!(chrono::DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_history_trimmed_and_system_first() {
        let stub = Arc::new(StubProvider::replying("ok"));
        let relay = relay_with(stub.clone());
        let history: Vec<ChatMessage> = (0..12)
            .map(|i| ChatMessage::user(format!("m{i}")))
            .collect();

        relay
            .respond(&ChatRequest {
                message: Some("latest".to_string()),
                conversation_history: history,
                ..ChatRequest::default()
            })
            .await
            .unwrap();

        let sent = stub.last_call();
        assert_eq!(sent.len(), 12);
        assert_eq!(sent[0].role, Role::System);
        assert_eq!(sent[1].content, "m2");
        assert_eq!(sent[10].content, "m11");
        assert_eq!(sent[11].content, "latest");
    }

    #[tokio::test]
    async fn test_attachments_add_analysis_and_prompt_context() {
        let stub = Arc::new(StubProvider::replying("ok"));
        let relay = relay_with(stub.clone());

        let response = relay
            .respond(&ChatRequest {
                message: Some("What's in these?".to_string()),
                attached_files: vec![AttachedFile {
                    name: "survey.csv".to_string(),
                    mime_type: "application/csv".to_string(),
                }],
                ..ChatRequest::default()
            })
            .await
            .unwrap();

        let analysis = response.file_analysis.expect("analysis present");
        assert!(analysis.summary.contains("tabular"));
        assert!(response
            .action_items
            .iter()
            .any(|i| i.task == "Review key insights from attached files"));
        assert!(stub.last_call()[1].content.contains("survey.csv"));
    }

    #[tokio::test]
    async fn test_provider_failure_maps_to_llm_error_with_text() {
        let stub = Arc::new(StubProvider::failing("upstream exploded"));
        let relay = relay_with(stub);

        let err = relay
            .respond_to_prompt("Provide research analysis for: x".to_string())
            .await
            .unwrap_err();

        match err {
            AppError::Llm(msg) => {
                assert!(msg.starts_with("Failed to generate response"));
                assert!(msg.contains("upstream exploded"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
