//! Commercial chat-completion provider (OpenAI-compatible `/chat/completions`).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatMessage, CompletionProvider, GenerationParams, LlmError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";
const PRESENCE_PENALTY: f32 = 0.1;
const FREQUENCY_PENALTY: f32 = 0.1;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    presence_penalty: f32,
    frequency_penalty: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: Option<String>, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn params(&self) -> GenerationParams {
        GenerationParams::CHAT_API
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredential("OpenAI"))?;

        let body = CompletionRequest {
            model: &self.model,
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
            presence_penalty: PRESENCE_PENALTY,
            frequency_penalty: FREQUENCY_PENALTY,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Chat completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_all_sampling_fields() {
        let body = CompletionRequest {
            model: "gpt-4",
            messages: vec![WireMessage {
                role: "system",
                content: "be brief",
            }],
            max_tokens: 1500,
            temperature: 0.7,
            top_p: 0.9,
            presence_penalty: PRESENCE_PENALTY,
            frequency_penalty: FREQUENCY_PENALTY,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "gpt-4");
        assert_eq!(value["max_tokens"], 1500);
        assert_eq!(value["messages"][0]["role"], "system");
        assert!(value.get("presence_penalty").is_some());
    }

    #[test]
    fn test_response_deserializes_first_choice() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "Hello"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }"#;
        let parsed: CompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = OpenAiClient::new(None, "gpt-4".into(), "http://localhost:9000/v1/".into());
        assert_eq!(client.base_url, "http://localhost:9000/v1");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let client = OpenAiClient::new(None, "gpt-4".into(), DEFAULT_BASE_URL.into());
        let err = client
            .complete(&[ChatMessage::user("hi")], &GenerationParams::CHAT_API)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingCredential("OpenAI")));
    }
}
