//! `POST /chat`: answer a visitor question from the knowledge base.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use widget::net::types::{ChatReply, ChatRequest};

use crate::error::{ApiError, EMPTY_MESSAGE_DETAIL};
use crate::services::knowledge;
use crate::state::AppState;

/// Degraded mode wins over validation: without an LLM every request is a
/// 500, so the widget shows its offline reply.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Some(llm) = state.llm.as_deref() else {
        tracing::warn!("chat requested in degraded mode");
        return Err(ApiError::Unavailable);
    };
    let Json(body) = body?;
    let question = body.message.trim();
    if question.is_empty() {
        return Err(ApiError::BadRequest(EMPTY_MESSAGE_DETAIL.to_owned()));
    }

    let reply = knowledge::answer(llm, &state.knowledge, question)
        .await
        .inspect_err(|e| tracing::error!(error = %e, retryable = e.retryable(), "llm request failed"))?;
    tracing::info!(question_len = question.len(), reply_len = reply.len(), "chat answered");
    Ok(Json(ChatReply { response: Some(reply) }))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
