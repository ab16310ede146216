use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::*;
use crate::state::test_helpers::json_rejection;

fn lead(name: &str, email: &str) -> Result<Json<Lead>, JsonRejection> {
    Ok(Json(Lead { name: name.to_owned(), email: email.to_owned() }))
}

// =========================================================================
// normalize_email
// =========================================================================

#[test]
fn accepts_plain_address() {
    assert_eq!(normalize_email("ana@bytezinho.com.br").as_deref(), Some("ana@bytezinho.com.br"));
}

#[test]
fn trims_and_lowercases_domain_only() {
    assert_eq!(normalize_email("  Ana.Silva@Example.COM ").as_deref(), Some("Ana.Silva@example.com"));
}

#[test]
fn rejects_malformed_addresses() {
    for bad in ["", "ana", "ana@", "@example.com", "ana@example", "ana@@example.com", "a@b@c.com", "ana @x.com", "ana@x..com", "ana@.com"] {
        assert!(normalize_email(bad).is_none(), "{bad:?} should be rejected");
    }
}

// =========================================================================
// capture_lead
// =========================================================================

#[tokio::test]
async fn valid_lead_is_acknowledged() {
    let Json(ack) = capture_lead(lead("Ana", "ana@example.com")).await.unwrap();
    assert_eq!(ack, LeadAck { status: "success".into(), message: "Lead recebido com sucesso!".into() });
}

#[tokio::test]
async fn blank_name_is_422() {
    let err = capture_lead(lead("   ", "ana@example.com")).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn invalid_email_is_422() {
    let err = capture_lead(lead("Ana", "ana-at-example")).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err.to_string(), "E-mail inválido.");
}

#[tokio::test]
async fn missing_field_is_422_with_detail_body() {
    let rejection = json_rejection::<Lead>(r#"{"name": "Ana"}"#).await;
    let err = capture_lead(Err(rejection)).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = err.into_response();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("email")));
}
