use std::sync::Arc;

use super::*;
use crate::llm::types::Role;
use crate::state::test_helpers::MockLlm;

// =========================================================================
// build_prompt
// =========================================================================

#[test]
fn prompt_contains_base_then_question() {
    let prompt = build_prompt("Cursos: IA, Python.", "Quais cursos?");
    let base_at = prompt.find("=== BASE DE CONHECIMENTO ===\nCursos: IA, Python.").unwrap();
    let question_at = prompt.find("=== PERGUNTA ===\nQuais cursos?").unwrap();
    assert!(base_at < question_at);
    assert!(prompt.starts_with("Use o conteúdo abaixo"));
    assert!(prompt.ends_with("Responda com base apenas no conteúdo da base acima."));
}

#[test]
fn prompt_with_empty_base_still_carries_question() {
    let prompt = build_prompt("", "Oi?");
    assert!(prompt.contains("=== BASE DE CONHECIMENTO ===\n\n"));
    assert!(prompt.contains("=== PERGUNTA ===\nOi?"));
}

// =========================================================================
// load
// =========================================================================

#[tokio::test]
async fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("bytezinho-kb-{}.txt", std::process::id()));
    tokio::fs::write(&path, "Horário: 9h às 18h.").await.unwrap();
    assert_eq!(load(&path).await.as_deref(), Some("Horário: 9h às 18h."));
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn load_missing_file_is_none() {
    let path = std::env::temp_dir().join("bytezinho-kb-does-not-exist.txt");
    assert!(load(&path).await.is_none());
}

// =========================================================================
// answer
// =========================================================================

#[tokio::test]
async fn answer_sends_one_grounded_user_turn() {
    let llm = Arc::new(MockLlm::replying("  Temos cursos de IA.  "));
    let reply = answer(llm.as_ref(), "base", "Quais cursos?").await.unwrap();
    assert_eq!(reply, "Temos cursos de IA.");

    let calls = llm.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].system, SYSTEM_PROMPT);
    assert_eq!(calls[0].messages.len(), 1);
    assert_eq!(calls[0].messages[0].role, Role::User);
    assert_eq!(calls[0].messages[0].content, build_prompt("base", "Quais cursos?"));
}

#[tokio::test]
async fn answer_propagates_provider_error() {
    let llm = MockLlm::new(vec![Err(LlmError::ApiResponse { status: 503, body: "down".into() })]);
    let err = answer(&llm, "base", "oi").await.unwrap_err();
    assert!(matches!(err, LlmError::ApiResponse { status: 503, .. }));
}
