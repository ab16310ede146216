use super::*;

// =============================================================
// ChatReply
// =============================================================

#[test]
fn chat_reply_parses_response() {
    let reply: ChatReply = serde_json::from_str(r#"{"response":"Oi!"}"#).unwrap();
    assert_eq!(reply.text(), Some("Oi!"));
}

#[test]
fn chat_reply_missing_or_empty_response_has_no_text() {
    let missing: ChatReply = serde_json::from_str("{}").unwrap();
    assert_eq!(missing.text(), None);
    let empty: ChatReply = serde_json::from_str(r#"{"response":""}"#).unwrap();
    assert_eq!(empty.text(), None);
    let null: ChatReply = serde_json::from_str(r#"{"response":null}"#).unwrap();
    assert_eq!(null.text(), None);
}

// =============================================================
// Requests
// =============================================================

#[test]
fn chat_request_body_shape() {
    let body = serde_json::to_value(ChatRequest { message: "Olá".into() }).unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Olá" }));
}

#[test]
fn lead_body_shape() {
    let lead = Lead { name: "Ana".into(), email: "ana@example.com".into() };
    let body = serde_json::to_value(&lead).unwrap();
    assert_eq!(body, serde_json::json!({ "name": "Ana", "email": "ana@example.com" }));
}

#[test]
fn error_detail_parses() {
    let err: ErrorDetail = serde_json::from_str(r#"{"detail":"A mensagem não pode ser vazia."}"#).unwrap();
    assert_eq!(err.detail, "A mensagem não pode ser vazia.");
}
