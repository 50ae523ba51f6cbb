pub mod ask;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::research::handlers::{
    handle_analyze_research, handle_generate_outline, handle_research_topics,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::health_handler))
        // Chat relay
        .route("/chat", post(handle_chat))
        .route("/api/chat", post(handle_chat))
        // Research helpers
        .route("/research-topics", get(handle_research_topics))
        .route("/api/analyze-research", post(handle_analyze_research))
        .route("/api/generate-outline", post(handle_generate_outline))
        // Legacy hosted-inference Q&A
        .route("/ask", post(ask::handle_ask))
        .with_state(state)
}
