use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::*;
use crate::error::UNAVAILABLE_DETAIL;
use crate::llm::types::LlmError;
use crate::state::test_helpers::{MockLlm, TEST_KNOWLEDGE, json_rejection, test_app_state, test_app_state_with_llm};

fn request(message: &str) -> Result<Json<ChatRequest>, JsonRejection> {
    Ok(Json(ChatRequest { message: message.to_owned() }))
}

async fn detail_of(err: ApiError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, body["detail"].as_str().unwrap_or_default().to_owned())
}

// =========================================================================
// success
// =========================================================================

#[tokio::test]
async fn chat_returns_llm_reply() {
    let llm = Arc::new(MockLlm::replying("Temos cursos de IA."));
    let state = test_app_state_with_llm(llm.clone());

    let Json(reply) = chat(State(state), request("Quais cursos?")).await.unwrap();
    assert_eq!(reply.text(), Some("Temos cursos de IA."));

    let calls = llm.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].messages[0].content.contains(TEST_KNOWLEDGE));
    assert!(calls[0].messages[0].content.contains("=== PERGUNTA ===\nQuais cursos?"));
}

#[tokio::test]
async fn chat_trims_question_before_asking() {
    let llm = Arc::new(MockLlm::replying("ok"));
    let state = test_app_state_with_llm(llm.clone());

    chat(State(state), request("  Como participar?\n")).await.unwrap();
    assert!(llm.calls()[0].messages[0].content.contains("=== PERGUNTA ===\nComo participar?\n\n"));
}

#[tokio::test]
async fn chat_passes_through_empty_reply() {
    let state = test_app_state_with_llm(Arc::new(MockLlm::replying("   ")));
    let Json(reply) = chat(State(state), request("oi")).await.unwrap();
    assert_eq!(reply.response.as_deref(), Some(""));
    assert_eq!(reply.text(), None);
}

// =========================================================================
// failures
// =========================================================================

#[tokio::test]
async fn blank_message_is_400() {
    let llm = Arc::new(MockLlm::replying("never"));
    let state = test_app_state_with_llm(llm.clone());

    let err = chat(State(state), request("   ")).await.unwrap_err();
    assert_eq!(detail_of(err).await, (StatusCode::BAD_REQUEST, "A mensagem não pode ser vazia.".to_owned()));
    assert!(llm.calls().is_empty());
}

#[tokio::test]
async fn degraded_mode_is_500() {
    let err = chat(State(test_app_state()), request("Quais cursos?")).await.unwrap_err();
    assert_eq!(detail_of(err).await, (StatusCode::INTERNAL_SERVER_ERROR, UNAVAILABLE_DETAIL.to_owned()));
}

#[tokio::test]
async fn degraded_mode_wins_over_blank_message() {
    let err = chat(State(test_app_state()), request("")).await.unwrap_err();
    assert!(matches!(err, ApiError::Unavailable));
}

#[tokio::test]
async fn llm_failure_is_502() {
    let llm = Arc::new(MockLlm::new(vec![Err(LlmError::ApiRequest("timeout".into()))]));
    let err = chat(State(test_app_state_with_llm(llm)), request("oi")).await.unwrap_err();
    let (status, detail) = detail_of(err).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(detail.contains("timeout"));
}

#[tokio::test]
async fn malformed_body_is_422_with_detail() {
    let llm = Arc::new(MockLlm::replying("never"));
    let rejection = json_rejection::<ChatRequest>("{\"message\": ").await;

    let err = chat(State(test_app_state_with_llm(llm.clone())), Err(rejection)).await.unwrap_err();
    let (status, detail) = detail_of(err).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!detail.is_empty());
    assert!(llm.calls().is_empty());
}

#[tokio::test]
async fn degraded_mode_wins_over_malformed_body() {
    let rejection = json_rejection::<ChatRequest>("not json").await;
    let err = chat(State(test_app_state()), Err(rejection)).await.unwrap_err();
    assert!(matches!(err, ApiError::Unavailable));
}
