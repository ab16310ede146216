//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional LLM client and the knowledge base text. A server with
//! no LLM runs in degraded mode: `/chat` answers 500 and the widget falls
//! back to its offline reply.

use std::sync::Arc;

use crate::llm::LlmChat;

/// Clone is required by Axum; every field is `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// Knowledge base the assistant must answer from. Empty if the file was
    /// missing at startup.
    pub knowledge: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, knowledge: impl Into<Arc<str>>) -> Self {
        Self { llm, knowledge: knowledge.into() }
    }

    pub fn is_degraded(&self) -> bool {
        self.llm.is_none()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use axum::Json;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::extract::rejection::JsonRejection;
    use axum::http::{Request, header};

    use super::*;
    use crate::llm::types::{ChatResponse, FinishReason, LlmError, Message};

    pub const TEST_KNOWLEDGE: &str = "A Bytezinho oferece cursos de IA para iniciantes.";

    /// `AppState` in degraded mode.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, TEST_KNOWLEDGE)
    }

    /// `AppState` backed by a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn LlmChat>) -> AppState {
        AppState::new(Some(llm), TEST_KNOWLEDGE)
    }

    /// The rejection `Json<T>` produces for `body` sent as
    /// `application/json`.
    pub async fn json_rejection<T: serde::de::DeserializeOwned>(body: &'static str) -> JsonRejection {
        let request = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        match Json::<T>::from_request(request, &()).await {
            Err(rejection) => rejection,
            Ok(_) => panic!("{body:?} should not deserialize"),
        }
    }

    /// Recorded call to [`MockLlm`].
    #[derive(Debug, Clone)]
    pub struct MockCall {
        pub system: String,
        pub messages: Vec<Message>,
    }

    /// Answers with queued replies (or `"ok"` once drained) and records
    /// every call.
    pub struct MockLlm {
        replies: Mutex<Vec<Result<String, LlmError>>>,
        pub calls: Mutex<Vec<MockCall>>,
    }

    impl MockLlm {
        pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self { replies: Mutex::new(replies), calls: Mutex::new(Vec::new()) }
        }

        pub fn replying(text: &str) -> Self {
            Self::new(vec![Ok(text.to_owned())])
        }

        pub fn calls(&self) -> Vec<MockCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl LlmChat for MockLlm {
        async fn chat(&self, _max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push(MockCall { system: system.to_owned(), messages: messages.to_vec() });
            let next = {
                let mut replies = self.replies.lock().unwrap();
                if replies.is_empty() { Ok("ok".to_owned()) } else { replies.remove(0) }
            };
            next.map(|text| ChatResponse {
                parts: vec![text],
                model: "mock".into(),
                finish: FinishReason::Stop,
                input_tokens: 0,
                output_tokens: 0,
            })
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
