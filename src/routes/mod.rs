//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dev server binds the two endpoints the chat widget talks to, serves
//! the compiled widget bundle at `/pkg`, and serves the host page (which
//! carries the widget's markup) as static files at `/`.

pub mod chat;
pub mod leads;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// API routes used by the widget.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat::chat))
        .route("/leads", post(leads::capture_lead))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes, the widget bundle and the host page.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let website = ServeDir::new(&config.site_dir).append_index_html_on_directories(true);

    api_routes(state)
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(website)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
