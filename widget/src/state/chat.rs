#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::fmt;

use crate::util::escape::escape_html;

/// Identifier of a rendered message or typing indicator.
///
/// Assigned by the widget model in increasing order; binds a streaming
/// reveal to the element it writes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

impl Author {
    /// CSS role class applied next to `chat-message`.
    pub fn css_class(self) -> &'static str {
        match self {
            Author::User => "user",
            Author::Bot => "bot",
        }
    }
}

/// Where a bot reply came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplySource {
    /// Returned by the `/chat` endpoint.
    Remote,
    /// The local offline fallback.
    Offline,
}

impl ReplySource {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplySource::Remote => "remote",
            ReplySource::Offline => "offline",
        }
    }
}

/// A single chat message as handed to the view.
///
/// `html` is already escaped. For streamed messages it starts empty and the
/// reveal appends to it one character at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub author: Author,
    pub html: String,
    pub time: String,
    pub source: Option<ReplySource>,
    pub streamed: bool,
}

impl Message {
    /// A fully rendered message.
    pub fn full(id: MessageId, author: Author, text: &str, time: String, source: Option<ReplySource>) -> Self {
        Self { id, author, html: escape_html(text), time, source, streamed: false }
    }

    /// An empty bot shell that a reveal will fill.
    pub fn shell(id: MessageId, time: String, source: ReplySource) -> Self {
        Self { id, author: Author::Bot, html: String::new(), time, source: Some(source), streamed: true }
    }
}

/// Personalized welcome shown once the lead gate unlocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Welcome {
    pub bot_name: String,
    /// Escaped greeting paragraph.
    pub greeting_html: String,
    /// Suggestion texts, escaped for both label and `data-message`.
    pub suggestions_html: Vec<String>,
    pub time: String,
}
