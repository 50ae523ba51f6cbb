//! Axum route handlers for the chat endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::chat::models::{ChatRequest, ChatResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /chat, POST /api/chat
///
/// Relays one chat turn upstream and returns the shaped envelope.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let response = state.relay.respond(&request).await?;
    Ok(Json(response))
}
