use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::chat::prompt::DEFAULT_HISTORY_WINDOW;
use crate::llm_client::{huggingface, openai};

/// Which upstream service answers chat requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    HuggingFace,
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "huggingface" | "hf" => Ok(ProviderKind::HuggingFace),
            other => bail!("Unknown COMPLETION_PROVIDER '{other}' (expected openai or huggingface)"),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// Provider keys are optional here: a missing key surfaces as a 500 on the
/// first request that needs it, not as a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub service_name: String,
    pub provider: ProviderKind,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub hf_api_key: Option<String>,
    pub hf_chat_model: String,
    pub hf_ask_model: String,
    pub hf_base_url: String,
    pub history_window: usize,
    pub fallback_suggestions: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            port: or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: or("RUST_LOG", "info"),
            service_name: or("SERVICE_NAME", "Aethon Research Assistant"),
            provider: or("COMPLETION_PROVIDER", "openai").parse()?,
            openai_api_key: get("OPENAI_API_KEY"),
            openai_model: or("OPENAI_MODEL", openai::DEFAULT_MODEL),
            openai_base_url: or("OPENAI_BASE_URL", openai::DEFAULT_BASE_URL),
            hf_api_key: get("HF_API_KEY"),
            hf_chat_model: or("HF_CHAT_MODEL", huggingface::DEFAULT_CHAT_MODEL),
            hf_ask_model: or("HF_ASK_MODEL", huggingface::DEFAULT_ASK_MODEL),
            hf_base_url: or("HF_BASE_URL", huggingface::DEFAULT_BASE_URL),
            history_window: or("HISTORY_WINDOW", &DEFAULT_HISTORY_WINDOW.to_string())
                .parse::<usize>()
                .context("HISTORY_WINDOW must be a non-negative integer")?,
            fallback_suggestions: parse_bool(&or("SUGGESTION_FALLBACK", "true"))
                .context("SUGGESTION_FALLBACK must be true or false")?,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("invalid boolean '{other}'"),
    }
}
