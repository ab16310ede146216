//! The controller's only way to touch the page.
//!
//! DESIGN
//! ======
//! Every DOM mutation the controller performs is a method here, so the page
//! is always a projection of the widget model. The browser implementation
//! (`dom::view::DomView`) looks elements up by id on each call and quietly does
//! nothing for markup that is missing; tests substitute a recording view.

use crate::state::chat::{Message, MessageId, Welcome};
use crate::state::widget::LeadGateState;

pub trait WidgetView {
    /// Show or hide the container (`active` + `aria-hidden`) and mark the
    /// toggler `chat-active` accordingly.
    fn set_open(&mut self, open: bool);

    /// Show the lead form or the conversation view, never both.
    fn set_lead_gate(&mut self, gate: LeadGateState);

    /// Focus the lead-name field. Returns `false` if it is not on the page.
    fn focus_lead_name(&mut self) -> bool;

    fn focus_toggler(&mut self);

    fn focus_input(&mut self);

    fn input_value(&self) -> String;

    fn set_input_value(&mut self, value: &str);

    /// Empty the input and reset any auto-grown height.
    fn clear_input(&mut self);

    /// Append a message element to the conversation log.
    fn append_message(&mut self, message: &Message);

    /// Append escaped markup to an existing message's text. Returns `false`
    /// if the element is no longer attached.
    fn append_to_message(&mut self, id: MessageId, html: &str) -> bool;

    fn show_typing(&mut self, id: MessageId);

    fn remove_typing(&mut self, id: MessageId);

    /// Scroll the conversation log to its newest content.
    fn scroll_to_bottom(&mut self);

    /// Current label of the lead submit button, if the button exists.
    fn submit_label(&self) -> Option<String>;

    /// Enable or disable the lead submit button and set its label.
    fn set_submit_state(&mut self, enabled: bool, label: &str);

    /// Replace the welcome block with a personalized greeting and its
    /// suggestion buttons.
    fn render_welcome(&mut self, welcome: &Welcome);

    fn hide_suggestions(&mut self);

    /// Blocking notice to the visitor.
    fn alert(&mut self, message: &str);

    /// Write the header clock.
    fn set_clock(&mut self, label: &str);
}
