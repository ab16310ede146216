//! `WidgetView` over the live document.
//!
//! Elements are looked up by id on every call. Missing markup is skipped
//! silently; the host page decides which parts of the widget it carries.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::markup::{
    ACTIVE_CLASS, BODY_ID, CLOCK_ID, CONTAINER_ID, CONVERSATION_ID, HIDDEN_CLASS, INPUT_ID, LEAD_FORM_CONTAINER_ID,
    LEAD_NAME_ID, LEAD_SUBMIT_ID, MESSAGE_TEXT_SELECTOR, SUGGESTIONS_CLASS, TOGGLER_ACTIVE_CLASS, TOGGLER_ID,
    WELCOME_ID, message_html, message_selector, typing_html, typing_selector, welcome_html,
};
use crate::state::chat::{Message, MessageId, Welcome};
use crate::state::widget::LeadGateState;
use crate::util::escape::escape_html;
use crate::view::WidgetView;

pub struct DomView {
    document: Document,
    /// Escaped bot name shown above bot messages.
    bot_name: String,
}

impl DomView {
    pub fn new(document: Document, bot_name: &str) -> Self {
        Self { document, bot_name: escape_html(bot_name) }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn focus(&self, id: &str) -> bool {
        match self.html_element(id) {
            Some(el) => el.focus().is_ok(),
            None => false,
        }
    }

    fn toggle_class(&self, id: &str, class: &str, on: bool) {
        if let Some(el) = self.element(id) {
            let _ = el.class_list().toggle_with_force(class, on);
        }
    }

    fn append_html(&self, html: &str) {
        if let Some(body) = self.element(BODY_ID) {
            let _ = body.insert_adjacent_html("beforeend", html);
        }
    }
}

impl WidgetView for DomView {
    fn set_open(&mut self, open: bool) {
        if let Some(container) = self.element(CONTAINER_ID) {
            let _ = container.class_list().toggle_with_force(ACTIVE_CLASS, open);
            let _ = container.set_attribute("aria-hidden", if open { "false" } else { "true" });
        }
        self.toggle_class(TOGGLER_ID, TOGGLER_ACTIVE_CLASS, open);
    }

    fn set_lead_gate(&mut self, gate: LeadGateState) {
        let unlocked = gate == LeadGateState::Unlocked;
        self.toggle_class(LEAD_FORM_CONTAINER_ID, HIDDEN_CLASS, unlocked);
        self.toggle_class(CONVERSATION_ID, HIDDEN_CLASS, !unlocked);
    }

    fn focus_lead_name(&mut self) -> bool {
        self.focus(LEAD_NAME_ID)
    }

    fn focus_toggler(&mut self) {
        self.focus(TOGGLER_ID);
    }

    fn focus_input(&mut self) {
        self.focus(INPUT_ID);
    }

    fn input_value(&self) -> String {
        let Some(el) = self.element(INPUT_ID) else {
            return String::new();
        };
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return area.value();
        }
        el.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value).unwrap_or_default()
    }

    fn set_input_value(&mut self, value: &str) {
        let Some(el) = self.element(INPUT_ID) else {
            return;
        };
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn clear_input(&mut self) {
        self.set_input_value("");
        if let Some(el) = self.html_element(INPUT_ID) {
            let _ = el.style().remove_property("height");
        }
    }

    fn append_message(&mut self, message: &Message) {
        self.append_html(&message_html(message, &self.bot_name));
    }

    fn append_to_message(&mut self, id: MessageId, html: &str) -> bool {
        let selector = format!("{} {MESSAGE_TEXT_SELECTOR}", message_selector(id.0));
        match self.document.query_selector(&selector) {
            Ok(Some(text)) if text.is_connected() => text.insert_adjacent_html("beforeend", html).is_ok(),
            _ => false,
        }
    }

    fn show_typing(&mut self, id: MessageId) {
        self.append_html(&typing_html(id));
    }

    fn remove_typing(&mut self, id: MessageId) {
        if let Ok(Some(el)) = self.document.query_selector(&typing_selector(id.0)) {
            el.remove();
        }
    }

    fn scroll_to_bottom(&mut self) {
        if let Some(body) = self.element(BODY_ID) {
            body.set_scroll_top(body.scroll_height());
        }
    }

    fn submit_label(&self) -> Option<String> {
        self.element(LEAD_SUBMIT_ID).and_then(|el| el.text_content()).map(|t| t.trim().to_owned())
    }

    fn set_submit_state(&mut self, enabled: bool, label: &str) {
        let Some(el) = self.element(LEAD_SUBMIT_ID) else {
            return;
        };
        if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(!enabled);
        }
        el.set_text_content(Some(label));
    }

    fn render_welcome(&mut self, welcome: &Welcome) {
        if let Some(el) = self.element(WELCOME_ID) {
            el.set_inner_html(&welcome_html(welcome));
        }
    }

    fn hide_suggestions(&mut self) {
        let Ok(nodes) = self.document.query_selector_all(&format!(".{SUGGESTIONS_CLASS}")) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                let _ = el.style().set_property("display", "none");
            }
        }
    }

    fn alert(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn set_clock(&mut self, label: &str) {
        if let Some(el) = self.element(CLOCK_ID) {
            el.set_text_content(Some(label));
        }
    }
}
