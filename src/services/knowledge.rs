//! Knowledge-base grounded answers.
//!
//! The assistant may only answer from the site's knowledge base text. The
//! question and the base are packed into a single user turn; the model is
//! told not to invent anything outside it.

use std::path::Path;

use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};

/// Upper bound on reply length. Gemini 2.5 counts its reasoning against it.
pub const MAX_REPLY_TOKENS: u32 = 4096;

const SYSTEM_PROMPT: &str = "Você é o Bytezinho, assistente virtual do site. Responda em português, \
                             de forma direta e cordial.";

/// Read the knowledge base, or `None` if it cannot be read.
pub async fn load(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => {
            tracing::info!(path = %path.display(), bytes = text.len(), "knowledge base loaded");
            Some(text)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "knowledge base not readable");
            None
        }
    }
}

/// Build the grounded prompt for one question.
pub fn build_prompt(knowledge: &str, question: &str) -> String {
    format!(
        "Use o conteúdo abaixo como base para responder a pergunta de forma direta, \
         sem inventar nada que não esteja no texto.\n\n\
         === BASE DE CONHECIMENTO ===\n{knowledge}\n\n\
         === PERGUNTA ===\n{question}\n\n\
         Responda com base apenas no conteúdo da base acima."
    )
}

/// Ask `llm` about `question`, grounded in `knowledge`. Returns the trimmed
/// reply text, which may be empty.
///
/// # Errors
///
/// Propagates the provider error.
pub async fn answer(llm: &dyn LlmChat, knowledge: &str, question: &str) -> Result<String, LlmError> {
    let messages = [Message::user(build_prompt(knowledge, question))];
    let response = llm.chat(MAX_REPLY_TOKENS, SYSTEM_PROMPT, &messages).await?;
    tracing::debug!(
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        finish = %response.finish,
        "llm reply"
    );
    Ok(response.text())
}

#[cfg(test)]
#[path = "knowledge_test.rs"]
mod tests;
