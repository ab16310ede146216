//! Widget error type.

/// Errors produced by the widget's network and configuration paths.
///
/// These are logged, never shown: the visitor sees the offline reply or the
/// configured lead error instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Network(String),

    /// `/leads` answered with a non-success status.
    #[error("leads endpoint returned status {status}")]
    LeadRejected { status: u16 },

    /// `/chat` answered with a non-success status.
    #[error("chat endpoint returned status {status}")]
    ChatRejected { status: u16 },

    /// A response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// HTTP is not available in this build (no browser).
    #[error("network unavailable outside the browser")]
    Unavailable,

    /// Host-supplied configuration could not be parsed.
    #[error("invalid widget config: {0}")]
    Config(String),
}
