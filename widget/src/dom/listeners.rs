//! Event wiring between the page and the controller.
//!
//! Every closure is leaked with `Closure::forget`; the widget lives as long
//! as the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, KeyboardEvent};

use super::DomWidget;
use crate::attach::AttachStrategy;
use crate::markup::{
    CLOSE_BUTTON_ID, INPUT_ID, LEAD_EMAIL_ID, LEAD_FORM_ID, LEAD_NAME_ID, SEND_BUTTON_ID, SUGGESTION_BUTTON_CLASS,
    SUGGESTION_MESSAGE_ATTR, TOGGLER_ID, id_selector,
};
use crate::net::types::Lead;

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("[chatbot-ui] could not attach {event} listener");
    }
    closure.forget();
}

/// Closest ancestor of the event target (inclusive) matching `selector`.
fn closest(ev: &Event, selector: &str) -> Option<Element> {
    ev.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

fn field_value(doc: &Document, id: &str) -> String {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn bind(widget: &DomWidget, doc: &Document, strategy: AttachStrategy) {
    bind_visibility(widget, doc, strategy);
    bind_send(widget, doc);
    bind_suggestions(widget, doc);
    bind_lead_form(widget, doc);
}

fn bind_visibility(widget: &DomWidget, doc: &Document, strategy: AttachStrategy) {
    match strategy {
        AttachStrategy::Direct => {
            if let Some(toggler) = doc.get_element_by_id(TOGGLER_ID) {
                let w = widget.clone();
                listen(&toggler, "click", move |_| w.open());
            }
            if let Some(close) = doc.get_element_by_id(CLOSE_BUTTON_ID) {
                let w = widget.clone();
                listen(&close, "click", move |_| w.close());
            }
        }
        AttachStrategy::Delegated => {
            log::info!("[chatbot-ui] toggler or container missing at startup; delegating clicks");
            let toggler = id_selector(TOGGLER_ID);
            let close = id_selector(CLOSE_BUTTON_ID);
            let w = widget.clone();
            listen(doc, "click", move |ev| {
                if closest(&ev, &toggler).is_some() {
                    w.open();
                } else if closest(&ev, &close).is_some() {
                    w.close();
                }
            });
        }
    }
}

fn bind_send(widget: &DomWidget, doc: &Document) {
    if let Some(button) = doc.get_element_by_id(SEND_BUTTON_ID) {
        let w = widget.clone();
        listen(&button, "click", move |_| {
            let w = w.clone();
            spawn_local(async move { w.send_message().await });
        });
    } else {
        log::warn!("[chatbot-ui] send button not found");
    }

    if let Some(input) = doc.get_element_by_id(INPUT_ID) {
        let w = widget.clone();
        listen(&input, "keydown", move |ev| {
            let Some(key) = ev.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key.key() == "Enter" && !key.shift_key() {
                ev.prevent_default();
                let w = w.clone();
                spawn_local(async move { w.send_message().await });
            }
        });
    } else {
        log::warn!("[chatbot-ui] chat input not found");
    }
}

fn bind_suggestions(widget: &DomWidget, doc: &Document) {
    let selector = format!(".{SUGGESTION_BUTTON_CLASS}");
    let w = widget.clone();
    listen(doc, "click", move |ev| {
        let Some(button) = closest(&ev, &selector) else {
            return;
        };
        let text = button.get_attribute(SUGGESTION_MESSAGE_ATTR).unwrap_or_default();
        let w = w.clone();
        spawn_local(async move { w.activate_suggestion(&text).await });
    });
}

fn bind_lead_form(widget: &DomWidget, doc: &Document) {
    let Some(form) = doc.get_element_by_id(LEAD_FORM_ID) else {
        log::warn!("[chatbot-ui] lead form not found");
        return;
    };
    let w = widget.clone();
    let document = doc.clone();
    listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let lead = Lead {
            name: field_value(&document, LEAD_NAME_ID).trim().to_owned(),
            email: field_value(&document, LEAD_EMAIL_ID).trim().to_owned(),
        };
        let w = w.clone();
        spawn_local(async move { w.submit_lead(lead).await });
    });
}
