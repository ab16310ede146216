//! Bytezinho development server.
//!
//! Serves the marketing site with the chat widget and implements the
//! `/chat` and `/leads` endpoints it calls. Without LLM configuration it
//! runs in degraded mode and the widget answers with its offline reply.

mod config;
mod error;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::llm::LlmChat;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env()?;

    let llm = init_llm();
    let knowledge = services::knowledge::load(&config.knowledge_base_file)
        .await
        .unwrap_or_default();

    let state = state::AppState::new(llm, knowledge);
    let state_degraded = state.is_degraded();
    let app = routes::app(state, &config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(
        addr = %config.bind_addr(),
        site = %config.site_dir.display(),
        degraded = state_degraded,
        "bytezinho listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}

/// Non-fatal: without a backend `/chat` answers 500 and the widget falls
/// back to its offline reply.
fn init_llm() -> Option<Arc<dyn LlmChat>> {
    let config = llm::LlmConfig::from_env()
        .inspect_err(|e| tracing::warn!(error = %e, "LLM not configured; chat runs in degraded mode"))
        .ok()?;
    let (provider, model) = (config.provider, config.model.clone());
    match llm::connect(config) {
        Ok(client) => {
            tracing::info!(%provider, %model, "LLM client initialized");
            Some(client)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client failed to build; chat runs in degraded mode");
            None
        }
    }
}
