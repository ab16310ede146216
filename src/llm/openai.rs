//! OpenAI-compatible chat completions client.
//!
//! Talks to `{base_url}/chat/completions`, so local model servers work
//! through `LLM_BASE_URL`.

use serde::Serialize;
use serde_json::Value;

use super::types::{ChatResponse, FinishReason, LlmChat, LlmError, Message, Role};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    #[must_use]
    pub fn new(http: reqwest::Client, api_key: String, base_url: String, model: String) -> Self {
        Self { http, api_key, base_url, model }
    }
}

#[async_trait::async_trait]
impl LlmChat for OpenAiClient {
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        let body = CcRequest { model: &self.model, max_tokens, messages: build_messages(system, messages) };
        let request = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body);
        let text = super::send(request).await?;
        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<CcMessage<'a>>,
}

#[derive(Serialize)]
struct CcMessage<'a> {
    role: &'static str,
    content: &'a str,
}

fn build_messages<'a>(system: &'a str, messages: &'a [Message]) -> Vec<CcMessage<'a>> {
    let system = (!system.trim().is_empty()).then_some(CcMessage { role: "system", content: system });
    system
        .into_iter()
        .chain(messages.iter().map(|m| CcMessage {
            role: match m.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            },
            content: &m.content,
        }))
        .collect()
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

fn parse_response(json_text: &str) -> Result<ChatResponse, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let usage = |key: &str| root.pointer(&format!("/usage/{key}")).and_then(Value::as_u64).unwrap_or(0);

    let Some(choice) = root.pointer("/choices/0") else {
        return Err(LlmError::ApiParse("chat_completions: missing choices[0]".to_owned()));
    };

    let parts = choice
        .pointer("/message/content")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
        .into_iter()
        .collect();

    let finish = match choice.get("finish_reason").and_then(Value::as_str) {
        None | Some("stop") => FinishReason::Stop,
        Some("length") => FinishReason::MaxTokens,
        Some("content_filter") => FinishReason::Filtered,
        Some(_) => FinishReason::Other,
    };

    Ok(ChatResponse {
        parts,
        model: root.get("model").and_then(Value::as_str).unwrap_or_default().to_owned(),
        finish,
        input_tokens: usage("prompt_tokens"),
        output_tokens: usage("completion_tokens"),
    })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
