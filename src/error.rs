//! HTTP-facing errors.
//!
//! Every error body is `{"detail": ...}`, the shape the widget decodes as
//! `ErrorDetail`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use widget::net::types::ErrorDetail;

use crate::llm::types::LlmError;

pub const EMPTY_MESSAGE_DETAIL: &str = "A mensagem não pode ser vazia.";
pub const UNAVAILABLE_DETAIL: &str = "Desculpe, o chatbot não está disponível no momento.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request is well-formed JSON but unusable.
    #[error("{0}")]
    BadRequest(String),

    /// A field failed validation.
    #[error("{0}")]
    Unprocessable(String),

    /// No answering backend is configured.
    #[error("{UNAVAILABLE_DETAIL}")]
    Unavailable,

    /// The LLM provider failed.
    #[error("falha ao consultar o modelo: {0}")]
    Upstream(#[from] LlmError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Unreadable bodies answer 422, like any other invalid field.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorDetail { detail: self.to_string() })).into_response()
    }
}
