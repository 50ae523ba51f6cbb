mod chat;
mod config;
mod errors;
mod llm_client;
mod research;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ProviderKind};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting {} v{}", config.service_name, env!("CARGO_PKG_VERSION"));

    let key_missing = match config.provider {
        ProviderKind::OpenAi => config.openai_api_key.is_none(),
        ProviderKind::HuggingFace => config.hf_api_key.is_none(),
    };
    if key_missing {
        warn!(
            "No API key configured for provider {:?}; chat requests will fail until one is set",
            config.provider
        );
    }

    let state = AppState::from_config(&config);
    info!(
        "Completion provider: {} (history window: {})",
        state.relay.provider_name(),
        config.history_window
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
