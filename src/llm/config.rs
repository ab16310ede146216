//! LLM configuration parsed from environment variables.
//!
//! Every setting has a per-provider default, so a plain `GEMINI_API_KEY`
//! in `.env` is enough to get answers.

use std::fmt;
use std::str::FromStr;

use super::types::LlmError;

pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmProviderKind {
    /// Google Gemini `generateContent`.
    #[default]
    Gemini,
    /// Any OpenAI-compatible chat completions endpoint.
    OpenAi,
}

impl LlmProviderKind {
    #[must_use]
    pub fn default_model(self) -> &'static str {
        match self {
            Self::Gemini => "gemini-2.5-flash",
            Self::OpenAi => "gpt-4o-mini",
        }
    }

    #[must_use]
    pub fn default_key_var(self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }

    #[must_use]
    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Self::OpenAi => "https://api.openai.com/v1",
        }
    }
}

impl FromStr for LlmProviderKind {
    type Err = LlmError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAi),
            other => Err(LlmError::ConfigParse(format!("unknown LLM_PROVIDER: {other}"))),
        }
    }
}

impl fmt::Display for LlmProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for LlmTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub provider: LlmProviderKind,
    pub api_key: String,
    pub model: String,
    /// API root without a trailing slash.
    pub base_url: String,
    pub timeouts: LlmTimeouts,
}

impl LlmConfig {
    /// Read `LLM_PROVIDER` (`gemini` by default or `openai`), then the key
    /// from the variable named by `LLM_API_KEY_ENV` (the provider's usual
    /// variable when unset). `LLM_MODEL`, `LLM_BASE_URL`,
    /// `LLM_REQUEST_TIMEOUT_SECS` and `LLM_CONNECT_TIMEOUT_SECS` override
    /// the provider defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown provider or a missing or blank key.
    pub fn from_env() -> Result<Self, LlmError> {
        let provider = match non_empty_var("LLM_PROVIDER") {
            Some(raw) => raw.parse()?,
            None => LlmProviderKind::default(),
        };

        let key_var = non_empty_var("LLM_API_KEY_ENV").unwrap_or_else(|| provider.default_key_var().to_owned());
        let api_key = non_empty_var(&key_var).ok_or(LlmError::MissingApiKey { var: key_var })?;

        let model = non_empty_var("LLM_MODEL").unwrap_or_else(|| provider.default_model().to_owned());
        let base_url = non_empty_var("LLM_BASE_URL")
            .as_deref()
            .unwrap_or(provider.default_base_url())
            .trim_end_matches('/')
            .to_owned();
        let defaults = LlmTimeouts::default();
        let timeouts = LlmTimeouts {
            request_secs: secs_var("LLM_REQUEST_TIMEOUT_SECS").unwrap_or(defaults.request_secs),
            connect_secs: secs_var("LLM_CONNECT_TIMEOUT_SECS").unwrap_or(defaults.connect_secs),
        };

        Ok(Self { provider, api_key, model, base_url, timeouts })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Unparseable values fall back to the default.
fn secs_var(key: &str) -> Option<u64> {
    non_empty_var(key).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
