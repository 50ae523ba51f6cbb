//! Legacy single-question endpoint backed directly by the hosted inference API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub response: String,
}

/// POST /ask
pub async fn handle_ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, AppError> {
    let Json(request) = payload?;
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("Please provide a question.".to_string()));
    }

    let response = state
        .hosted
        .ask(&request.question)
        .await
        .map_err(|e| match e {
            LlmError::MissingCredential(provider) => {
                AppError::Configuration(format!("{provider} API key not configured"))
            }
            LlmError::Api { message, .. } => {
                AppError::Llm(format!("Error from Hugging Face: {message}"))
            }
            other => AppError::Llm(other.to_string()),
        })?;

    Ok(Json(AskResponse { response }))
}
