//! `POST /leads`: accept a visitor's contact details.
//!
//! Leads are validated and logged, never stored.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use widget::net::types::{Lead, LeadAck};

use crate::error::ApiError;

pub const LEAD_ACCEPTED_MESSAGE: &str = "Lead recebido com sucesso!";

/// Trim and sanity-check an address: one `@`, a non-empty local part and a
/// dotted domain, no whitespace. The domain is lowercased.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return None;
    }
    let (local, domain) = trimmed.split_once('@')?;
    if local.is_empty() || domain.contains('@') {
        return None;
    }
    let labels = domain.split('.').collect::<Vec<_>>();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return None;
    }
    Some(format!("{local}@{}", domain.to_ascii_lowercase()))
}

pub async fn capture_lead(lead: Result<Json<Lead>, JsonRejection>) -> Result<Json<LeadAck>, ApiError> {
    let Json(lead) = lead?;
    let name = lead.name.trim();
    if name.is_empty() {
        return Err(ApiError::Unprocessable("O nome é obrigatório.".to_owned()));
    }
    let Some(email) = normalize_email(&lead.email) else {
        return Err(ApiError::Unprocessable("E-mail inválido.".to_owned()));
    };

    let domain = email.rsplit('@').next().unwrap_or_default();
    tracing::info!(email_domain = domain, name_len = name.chars().count(), "lead received");
    Ok(Json(LeadAck { status: "success".to_owned(), message: LEAD_ACCEPTED_MESSAGE.to_owned() }))
}

#[cfg(test)]
#[path = "leads_test.rs"]
mod tests;
