use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use crate::chat::models::ChatResponse;
use crate::errors::AppError;
use crate::research::prompts::RESEARCH_TOPICS;
use crate::research::{build_analysis_prompt, build_outline_prompt, AnalyzeRequest, OutlineRequest};
use crate::state::AppState;

/// POST /api/analyze-research
pub async fn handle_analyze_research(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let prompt = build_analysis_prompt(request.kind, &request.content);
    Ok(Json(state.relay.respond_to_prompt(prompt).await?))
}

/// POST /api/generate-outline
pub async fn handle_generate_outline(
    State(state): State<AppState>,
    payload: Result<Json<OutlineRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let prompt = build_outline_prompt(&request.topic, &request.document_type);
    Ok(Json(state.relay.respond_to_prompt(prompt).await?))
}

/// GET /research-topics
pub async fn handle_research_topics() -> Json<Value> {
    Json(json!({ "topics": RESEARCH_TOPICS }))
}
