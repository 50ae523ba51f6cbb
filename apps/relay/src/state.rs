use std::sync::Arc;

use crate::chat::relay::Relay;
use crate::config::{Config, ProviderKind};
use crate::llm_client::{CompletionProvider, HuggingFaceClient, OpenAiClient};

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
    /// Backs the legacy `/ask` endpoint regardless of the chat provider.
    pub hosted: HuggingFaceClient,
    pub service_name: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let hosted = HuggingFaceClient::new(
            config.hf_api_key.clone(),
            config.hf_chat_model.clone(),
            config.hf_ask_model.clone(),
            config.hf_base_url.clone(),
        );

        let provider: Arc<dyn CompletionProvider> = match config.provider {
            ProviderKind::OpenAi => Arc::new(OpenAiClient::new(
                config.openai_api_key.clone(),
                config.openai_model.clone(),
                config.openai_base_url.clone(),
            )),
            ProviderKind::HuggingFace => Arc::new(hosted.clone()),
        };

        AppState {
            relay: Relay::new(
                provider,
                config.history_window,
                config.fallback_suggestions,
            ),
            hosted,
            service_name: config.service_name.clone(),
        }
    }
}
