//! HTTP calls to the chat and lead endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: [`HttpBackend`] reports [`WidgetError::Unavailable`], which
//! the controller treats like any other network failure.
//!
//! ERROR HANDLING
//! ==============
//! Both calls return `Result`; the controller decides the policy. A failed
//! chat call degrades to the offline reply, a failed lead call is shown to
//! the visitor.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatReply, Lead};
use crate::config::WidgetConfig;
use crate::error::WidgetError;

/// The remote side of the widget. Implemented over HTTP in the browser and
/// by fakes in tests.
#[allow(async_fn_in_trait)]
pub trait ChatBackend {
    /// Ask `/chat` for a reply to `message`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status or an
    /// undecodable body.
    async fn send_chat(&self, message: &str) -> Result<ChatReply, WidgetError>;

    /// Register a lead with `/leads`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::LeadRejected`] on a non-success status and
    /// [`WidgetError::Network`] when no response arrives.
    async fn register_lead(&self, lead: &Lead) -> Result<(), WidgetError>;
}

/// [`ChatBackend`] over `fetch`, posting JSON to the configured endpoints.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    chat_endpoint: String,
    leads_endpoint: String,
}

impl HttpBackend {
    pub fn new(config: &WidgetConfig) -> Self {
        Self { chat_endpoint: config.chat_endpoint.clone(), leads_endpoint: config.leads_endpoint.clone() }
    }

    pub fn chat_endpoint(&self) -> &str {
        &self.chat_endpoint
    }

    pub fn leads_endpoint(&self) -> &str {
        &self.leads_endpoint
    }
}

impl ChatBackend for HttpBackend {
    async fn send_chat(&self, message: &str) -> Result<ChatReply, WidgetError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::ChatRequest { message: message.to_owned() };
            let resp = gloo_net::http::Request::post(&self.chat_endpoint)
                .json(&body)
                .map_err(|e| WidgetError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| WidgetError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(WidgetError::ChatRejected { status: resp.status() });
            }
            resp.json::<ChatReply>()
                .await
                .map_err(|e| WidgetError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            Err(WidgetError::Unavailable)
        }
    }

    async fn register_lead(&self, lead: &Lead) -> Result<(), WidgetError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.leads_endpoint)
                .json(lead)
                .map_err(|e| WidgetError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| WidgetError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(WidgetError::LeadRejected { status: resp.status() });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = lead;
            Err(WidgetError::Unavailable)
        }
    }
}
