//! Hosted inference provider (Hugging Face Inference API).
//!
//! Text-generation models take one string, so the conversation is flattened
//! into a `Role: content` transcript ending in an open `Assistant:` turn.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{ChatMessage, CompletionProvider, GenerationParams, LlmError};

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_CHAT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.1";
pub const DEFAULT_ASK_MODEL: &str = "google/flan-t5-large";

const ASSISTANT_MARKER: &str = "Assistant:";
const ANSWER_MARKER: &str = "answer:";
const ASK_MAX_NEW_TOKENS: u32 = 200;
const ASK_TEMPERATURE: f32 = 0.7;

/// Returned by `/ask` when the model payload has no `generated_text`.
pub const UNEXPECTED_FORMAT: &str = "Model did not return expected format.";

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    do_sample: Option<bool>,
}

#[derive(Clone)]
pub struct HuggingFaceClient {
    client: Client,
    api_key: Option<String>,
    chat_model: String,
    ask_model: String,
    base_url: String,
}

impl HuggingFaceClient {
    pub fn new(
        api_key: Option<String>,
        chat_model: String,
        ask_model: String,
        base_url: String,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key,
            chat_model,
            ask_model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Single question/answer call against the small instruction model.
    /// Returns the answer text, or `UNEXPECTED_FORMAT` when the payload shape is unknown.
    pub async fn ask(&self, question: &str) -> Result<String, LlmError> {
        let inputs = format!("question: {question} answer:");
        let output = self
            .generate(
                &self.ask_model,
                &inputs,
                InferenceParameters {
                    max_new_tokens: ASK_MAX_NEW_TOKENS,
                    temperature: ASK_TEMPERATURE,
                    top_p: None,
                    do_sample: None,
                },
            )
            .await?;

        Ok(first_generated_text(&output)
            .map(|text| text_after_last(text, ANSWER_MARKER))
            .unwrap_or_else(|| UNEXPECTED_FORMAT.to_string()))
    }

    async fn generate(
        &self,
        model: &str,
        inputs: &str,
        parameters: InferenceParameters,
    ) -> Result<Value, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredential("Hugging Face"))?;

        let response = self
            .client
            .post(format!("{}/{}", self.base_url, model))
            .bearer_auth(api_key)
            .json(&InferenceRequest { inputs, parameters })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let output: Value = response.json().await?;
        debug!("Raw model output: {output}");
        Ok(output)
    }
}

#[async_trait]
impl CompletionProvider for HuggingFaceClient {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn params(&self) -> GenerationParams {
        GenerationParams::HOSTED_INFERENCE
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<String, LlmError> {
        let transcript = flatten_transcript(messages);
        let output = self
            .generate(
                &self.chat_model,
                &transcript,
                InferenceParameters {
                    max_new_tokens: params.max_tokens,
                    temperature: params.temperature,
                    top_p: Some(params.top_p),
                    do_sample: Some(true),
                },
            )
            .await?;

        first_generated_text(&output)
            .map(|text| text_after_last(text, ASSISTANT_MARKER))
            .ok_or(LlmError::EmptyContent)
    }
}

/// Renders messages as `Role: content` lines followed by an open assistant turn.
pub fn flatten_transcript(messages: &[ChatMessage]) -> String {
    let mut transcript = String::new();
    for message in messages {
        transcript.push_str(message.role.label());
        transcript.push_str(": ");
        transcript.push_str(&message.content);
        transcript.push('\n');
    }
    transcript.push_str(ASSISTANT_MARKER);
    transcript
}

fn first_generated_text(output: &Value) -> Option<&str> {
    output
        .as_array()
        .and_then(|items| items.first())
        .and_then(|item| item.get("generated_text"))
        .and_then(|text| text.as_str())
}

fn text_after_last(text: &str, marker: &str) -> String {
    text.rsplit(marker).next().unwrap_or(text).trim().to_string()
}
