//! Google Gemini `generateContent` client.
//!
//! One stateless request per question: the system prompt goes in
//! `systemInstruction`, turns go in `contents` with Gemini's `user`/`model`
//! roles. Reasoning parts (`thought: true`) are dropped from the reply.

use serde::{Deserialize, Serialize};

use super::types::{ChatResponse, FinishReason, LlmChat, LlmError, Message, Role};

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(http: reqwest::Client, api_key: String, base_url: String, model: String) -> Self {
        Self { http, api_key, base_url, model }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait::async_trait]
impl LlmChat for GeminiClient {
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        let body = build_request(max_tokens, system, messages);
        let request = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body);
        let text = super::send(request).await?;
        parse_response(&text, &self.model)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

fn build_request<'a>(max_tokens: u32, system: &'a str, messages: &'a [Message]) -> GenerateRequest<'a> {
    let system_instruction = (!system.trim().is_empty()).then(|| Content { role: None, parts: [Part { text: system }] });
    let contents = messages
        .iter()
        .map(|m| {
            let role = match m.role {
                Role::User => "user",
                Role::Assistant => "model",
            };
            Content { role: Some(role), parts: [Part { text: &m.content }] }
        })
        .collect();
    GenerateRequest { system_instruction, contents, generation_config: GenerationConfig { max_output_tokens: max_tokens } }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}

// =============================================================================
// PARSING
// =============================================================================

fn finish_reason(raw: Option<&str>) -> FinishReason {
    match raw {
        None | Some("STOP") => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::MaxTokens,
        Some("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "SPII") => FinishReason::Filtered,
        Some(_) => FinishReason::Other,
    }
}

/// `model` stands in when the response omits `modelVersion`.
fn parse_response(json: &str, model: &str) -> Result<ChatResponse, LlmError> {
    let api: GenerateResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let usage = api.usage_metadata.unwrap_or_default();
    let model = api.model_version.unwrap_or_else(|| model.to_owned());

    let Some(candidate) = api.candidates.into_iter().next() else {
        // A blocked prompt comes back with feedback and no candidates.
        if api.prompt_feedback.and_then(|f| f.block_reason).is_some() {
            return Ok(ChatResponse {
                parts: Vec::new(),
                model,
                finish: FinishReason::Filtered,
                input_tokens: usage.prompt_token_count,
                output_tokens: 0,
            });
        }
        return Err(LlmError::ApiParse("generateContent: missing candidates[0]".to_owned()));
    };

    let parts = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|p| !p.thought)
        .filter_map(|p| p.text)
        .collect();

    Ok(ChatResponse {
        parts,
        model,
        finish: finish_reason(candidate.finish_reason.as_deref()),
        input_tokens: usage.prompt_token_count,
        output_tokens: usage.candidates_token_count,
    })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
