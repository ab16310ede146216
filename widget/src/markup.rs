//! Markup contract between the widget and the host page.
//!
//! The host page owns the HTML. These are the element IDs, classes and data
//! attributes the widget looks up or writes; renaming one here without the
//! page (or vice versa) silently detaches the affected feature.

use crate::state::chat::{Author, Message, MessageId, Welcome};

pub const TOGGLER_ID: &str = "chatbot-toggler";
pub const CONTAINER_ID: &str = "chatbot-container";
pub const CLOSE_BUTTON_ID: &str = "chatbot-close-btn";
pub const BODY_ID: &str = "chatbot-body";
pub const INPUT_ID: &str = "chatbot-input";
pub const SEND_BUTTON_ID: &str = "chatbot-send-btn";
pub const LEAD_FORM_CONTAINER_ID: &str = "lead-capture-form";
pub const LEAD_FORM_ID: &str = "chatbot-lead-form";
pub const LEAD_NAME_ID: &str = "lead-name";
pub const LEAD_EMAIL_ID: &str = "lead-email";
pub const LEAD_SUBMIT_ID: &str = "lead-submit-btn";
pub const CONVERSATION_ID: &str = "chat-conversation";
pub const CLOCK_ID: &str = "current-time";
pub const WELCOME_ID: &str = "welcome-message-content";
pub const CONFIG_SCRIPT_ID: &str = "chatbot-config";

pub const ACTIVE_CLASS: &str = "active";
pub const TOGGLER_ACTIVE_CLASS: &str = "chat-active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const SUGGESTIONS_CLASS: &str = "suggestions";
pub const SUGGESTION_BUTTON_CLASS: &str = "suggestion-btn";

/// Attribute holding the text a suggestion button sends.
pub const SUGGESTION_MESSAGE_ATTR: &str = "data-message";
/// Attribute stamped on every rendered message element.
pub const MESSAGE_ID_ATTR: &str = "data-message-id";
/// Attribute distinguishing remote replies from the offline fallback.
pub const REPLY_SOURCE_ATTR: &str = "data-reply-source";
/// Attribute stamped on a typing indicator element.
pub const TYPING_ID_ATTR: &str = "data-typing-id";

pub const MESSAGE_CLASS: &str = "chat-message";
pub const MESSAGE_TEXT_SELECTOR: &str = ".message-content p";

/// CSS selector for an element ID.
pub fn id_selector(id: &str) -> String {
    format!("#{id}")
}

/// CSS selector matching the rendered element of one message.
pub fn message_selector(id: u64) -> String {
    format!("[{MESSAGE_ID_ATTR}=\"{id}\"]")
}

/// CSS selector matching one typing indicator.
pub fn typing_selector(id: u64) -> String {
    format!("[{TYPING_ID_ATTR}=\"{id}\"]")
}

/// Outer markup of one conversation message. `message.html` and
/// `bot_name` must already be escaped.
pub fn message_html(message: &Message, bot_name: &str) -> String {
    let mut out = format!(
        "<div class=\"{MESSAGE_CLASS} {}\" {MESSAGE_ID_ATTR}=\"{}\"",
        message.author.css_class(),
        message.id
    );
    if let Some(source) = message.source {
        out.push_str(&format!(" {REPLY_SOURCE_ATTR}=\"{}\"", source.as_str()));
    }
    out.push_str("><div class=\"message-content\">");
    if message.author == Author::Bot {
        out.push_str(&format!("<strong>{bot_name}</strong>"));
    }
    out.push_str(&format!(
        "<p>{}</p><span class=\"message-time\">{}</span></div></div>",
        message.html, message.time
    ));
    out
}

/// Three-dot indicator shown while a reply is pending.
pub fn typing_html(id: MessageId) -> String {
    format!(
        "<div class=\"{MESSAGE_CLASS} bot typing-indicator-li\" {TYPING_ID_ATTR}=\"{id}\">\
         <div class=\"typing-indicator\"><span></span><span></span><span></span></div></div>"
    )
}

/// Inner markup of the welcome block.
pub fn welcome_html(welcome: &Welcome) -> String {
    let buttons: String = welcome
        .suggestions_html
        .iter()
        .map(|s| {
            format!("<button class=\"{SUGGESTION_BUTTON_CLASS}\" {SUGGESTION_MESSAGE_ATTR}=\"{s}\">{s}</button>")
        })
        .collect();
    format!(
        "<strong>{}</strong><p>{}</p><div class=\"{SUGGESTIONS_CLASS}\">{buttons}</div>\
         <span class=\"message-time\">{}</span>",
        welcome.bot_name, welcome.greeting_html, welcome.time
    )
}
