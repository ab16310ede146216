//! Widget configuration.
//!
//! Defaults match the copy and endpoints shipped on the site. A host page
//! may override any field with a JSON object in
//! `<script type="application/json" id="chatbot-config">`; missing fields
//! keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;
use crate::reveal::DEFAULT_REVEAL_INTERVAL_MS;

pub const DEFAULT_CHAT_ENDPOINT: &str = "/chat";
pub const DEFAULT_LEADS_ENDPOINT: &str = "/leads";
pub const DEFAULT_BOT_NAME: &str = "Bytezinho AI";
pub const DEFAULT_FALLBACK_REPLY: &str = "Desculpe, ainda estou aprendendo a responder essa pergunta. (modo offline)";
pub const DEFAULT_EMPTY_REPLY: &str = "Desculpe, não obtive resposta.";
pub const DEFAULT_WELCOME_TEMPLATE: &str =
    "Olá, {name}! Sou o Bytezinho, seu assistente de IA. Como posso ajudar você hoje?";
pub const DEFAULT_LEAD_ERROR: &str = "Falha ao enviar os dados. Tente novamente.";
pub const DEFAULT_SUBMIT_BUSY_LABEL: &str = "Enviando...";
pub const DEFAULT_SUBMIT_IDLE_LABEL: &str = "Iniciar Conversa";

const NAME_PLACEHOLDER: &str = "{name}";

/// Runtime settings for one widget instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub chat_endpoint: String,
    pub leads_endpoint: String,
    /// Milliseconds between revealed characters of a streamed reply.
    pub reveal_interval_ms: u32,
    pub bot_name: String,
    /// Reply rendered when `/chat` is unreachable or errors.
    pub fallback_reply: String,
    /// Reply rendered when `/chat` succeeds with an empty `response`.
    pub empty_reply: String,
    /// Welcome paragraph; `{name}` is replaced with the lead's name.
    pub welcome_template: String,
    pub suggestions: Vec<String>,
    /// Alert shown when `/leads` fails for any reason.
    pub lead_error_message: String,
    pub submit_busy_label: String,
    /// Label restored on the submit button when its original label is
    /// unavailable.
    pub submit_idle_label: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            leads_endpoint: DEFAULT_LEADS_ENDPOINT.to_owned(),
            reveal_interval_ms: DEFAULT_REVEAL_INTERVAL_MS,
            bot_name: DEFAULT_BOT_NAME.to_owned(),
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_owned(),
            empty_reply: DEFAULT_EMPTY_REPLY.to_owned(),
            welcome_template: DEFAULT_WELCOME_TEMPLATE.to_owned(),
            suggestions: vec![
                "Como faço para participar?".to_owned(),
                "Sou menor de idade posso participar?".to_owned(),
                "Onde eu posso fazer o curso?".to_owned(),
            ],
            lead_error_message: DEFAULT_LEAD_ERROR.to_owned(),
            submit_busy_label: DEFAULT_SUBMIT_BUSY_LABEL.to_owned(),
            submit_idle_label: DEFAULT_SUBMIT_IDLE_LABEL.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Parse a host-supplied JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] if the JSON is malformed or the
    /// reveal interval is zero.
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        let config: Self = serde_json::from_str(json).map_err(|e| WidgetError::Config(e.to_string()))?;
        if config.reveal_interval_ms == 0 {
            return Err(WidgetError::Config("reveal_interval_ms must be positive".to_owned()));
        }
        Ok(config)
    }

    /// Welcome text for `name`, unescaped.
    pub fn welcome_text(&self, name: &str) -> String {
        self.welcome_template.replace(NAME_PLACEHOLDER, name)
    }
}
