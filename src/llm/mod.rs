//! LLM backends answering visitor questions.
//!
//! DESIGN
//! ======
//! Each backend is a small `reqwest` client that owns its model and base URL
//! and implements [`LlmChat`] directly. [`connect`] picks one from
//! [`LlmConfig`]; handlers only ever hold `Arc<dyn LlmChat>`, so tests swap
//! in a mock. Response parsing is a pure `parse_response` per backend.

pub mod config;
pub mod gemini;
pub mod openai;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

pub use config::LlmConfig;
use config::{LlmProviderKind, LlmTimeouts};
pub use types::LlmChat;
use types::LlmError;

/// Build the backend named by `config.provider`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn connect(config: LlmConfig) -> Result<Arc<dyn LlmChat>, LlmError> {
    let http = http_client(config.timeouts)?;
    Ok(match config.provider {
        LlmProviderKind::Gemini => Arc::new(gemini::GeminiClient::new(http, config.api_key, config.base_url, config.model)),
        LlmProviderKind::OpenAi => Arc::new(openai::OpenAiClient::new(http, config.api_key, config.base_url, config.model)),
    })
}

fn http_client(timeouts: LlmTimeouts) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| LlmError::HttpClientBuild(e.to_string()))
}

/// Send a prepared request and return the body of a 2xx response.
async fn send(request: reqwest::RequestBuilder) -> Result<String, LlmError> {
    let response = request.send().await.map_err(|e| LlmError::ApiRequest(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| LlmError::ApiRequest(e.to_string()))?;
    if !status.is_success() {
        return Err(LlmError::ApiResponse { status: status.as_u16(), body });
    }
    Ok(body)
}
