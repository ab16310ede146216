//! The chat widget controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatWidget` owns the widget model, the running reveals and the view,
//! and talks to the endpoints through a [`ChatBackend`]. Browser glue calls
//! its operations from event listeners; tests call them directly.
//!
//! DESIGN
//! ======
//! The handle is `Rc<RefCell<..>>` inside and cheap to clone, which is how
//! listeners and spawned tasks share it on the single browser thread. Async
//! operations are split into synchronous steps around each `.await` so no
//! borrow is ever held while a request is pending; overlapping sends and
//! concurrent reveals interleave freely.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::net::api::ChatBackend;
use crate::net::types::{ChatReply, Lead};
use crate::reveal::{RevealRegistry, RevealStep};
use crate::state::chat::{Author, Message, MessageId, ReplySource, Welcome};
use crate::state::widget::{LeadGateState, WidgetModel};
use crate::util::clock::now_label;
use crate::util::escape::escape_html;
use crate::view::WidgetView;

struct Inner<V> {
    model: WidgetModel,
    reveals: RevealRegistry,
    view: V,
}

impl<V: WidgetView> Inner<V> {
    /// Render a message and return its id. Streamed bot messages get an
    /// empty shell plus a registered reveal; the caller starts the ticking.
    fn render(&mut self, text: &str, author: Author, stream: bool, source: Option<ReplySource>) -> MessageId {
        let id = self.model.allocate_id();
        let time = now_label();
        if author == Author::Bot && stream {
            let source = source.unwrap_or(ReplySource::Remote);
            self.view.append_message(&Message::shell(id, time, source));
            self.reveals.start(id, text);
        } else {
            self.view.append_message(&Message::full(id, author, text, time, source));
        }
        self.view.scroll_to_bottom();
        id
    }
}

/// Handle to one mounted chat widget.
pub struct ChatWidget<V, B> {
    inner: Rc<RefCell<Inner<V>>>,
    backend: Rc<B>,
    config: Rc<WidgetConfig>,
}

impl<V, B> Clone for ChatWidget<V, B> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner), backend: Rc::clone(&self.backend), config: Rc::clone(&self.config) }
    }
}

impl<V, B> ChatWidget<V, B>
where
    V: WidgetView + 'static,
    B: ChatBackend + 'static,
{
    pub fn new(view: V, backend: B, config: WidgetConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner { model: WidgetModel::default(), reveals: RevealRegistry::default(), view })),
            backend: Rc::new(backend),
            config: Rc::new(config),
        }
    }

    /// Snapshot of the current model.
    pub fn model(&self) -> WidgetModel {
        self.inner.borrow().model.clone()
    }

    /// Read access to the view.
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.inner.borrow().view)
    }

    /// Push the whole model to the view. Called once at mount so the page
    /// matches the model regardless of the markup's initial classes.
    pub fn sync(&self) {
        let mut inner = self.inner.borrow_mut();
        let open = inner.model.is_open();
        let gate = inner.model.lead_gate;
        inner.view.set_open(open);
        inner.view.set_lead_gate(gate);
        inner.view.set_clock(&now_label());
    }

    // =========================================================================
    // VISIBILITY
    // =========================================================================

    /// Open the widget. While the lead gate is closed, focus moves to the
    /// lead-name field.
    pub fn open(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.model.open() {
            log::debug!("[chatbot-ui] opened");
        }
        inner.view.set_open(true);
        if !inner.model.is_unlocked() && !inner.view.focus_lead_name() {
            log::debug!("[chatbot-ui] lead-name field missing; focus unchanged");
        }
    }

    /// Close the widget and hand focus back to the toggler.
    pub fn close(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.model.close() {
            log::debug!("[chatbot-ui] closed");
        }
        inner.view.set_open(false);
        inner.view.focus_toggler();
    }

    /// Rewrite the header clock with the current time.
    pub fn refresh_clock(&self) {
        self.inner.borrow_mut().view.set_clock(&now_label());
    }

    // =========================================================================
    // MESSAGES
    // =========================================================================

    /// Append a message to the conversation log.
    ///
    /// User messages and non-streamed bot messages appear in full. A
    /// streamed bot message starts empty and is revealed one character per
    /// tick.
    pub fn add_message(&self, text: &str, author: Author, stream: bool) -> MessageId {
        let source = (author == Author::Bot).then_some(ReplySource::Remote);
        let id = self.inner.borrow_mut().render(text, author, stream, source);
        if self.is_revealing(id) {
            self.spawn_reveal(id);
        }
        id
    }

    /// Advance the reveal of `id` by one character.
    ///
    /// A reveal whose element has been detached is cancelled here rather
    /// than left writing into nothing.
    pub fn reveal_tick(&self, id: MessageId) -> RevealStep {
        let mut inner = self.inner.borrow_mut();
        let Inner { reveals, view, .. } = &mut *inner;
        let Some(chunk) = reveals.next_chunk(id) else {
            return RevealStep::Done;
        };
        if !view.append_to_message(id, &chunk) {
            reveals.cancel(id);
            log::debug!("[chatbot-ui] reveal {id} cancelled: message detached");
            return RevealStep::Done;
        }
        view.scroll_to_bottom();
        RevealStep::Continue
    }

    /// Stop the reveal of `id`. Returns `true` if it was still running.
    pub fn cancel_reveal(&self, id: MessageId) -> bool {
        self.inner.borrow_mut().reveals.cancel(id)
    }

    pub fn is_revealing(&self, id: MessageId) -> bool {
        self.inner.borrow().reveals.is_active(id)
    }

    /// Ids of reveals still in progress, oldest first.
    pub fn active_reveals(&self) -> Vec<MessageId> {
        self.inner.borrow().reveals.active_ids()
    }

    /// Run every pending reveal to completion without waiting on timers.
    pub fn flush_reveals(&self) {
        for id in self.active_reveals() {
            while !self.reveal_tick(id).is_done() {}
        }
    }

    fn spawn_reveal(&self, id: MessageId) {
        #[cfg(feature = "hydrate")]
        {
            let widget = self.clone();
            let interval = self.config.reveal_interval_ms;
            wasm_bindgen_futures::spawn_local(async move {
                loop {
                    gloo_timers::future::TimeoutFuture::new(interval).await;
                    if widget.reveal_tick(id).is_done() {
                        break;
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::trace!("[chatbot-ui] reveal {id} registered without a timer");
        }
    }

    // =========================================================================
    // SEND FLOW
    // =========================================================================

    /// Send the input field's text.
    ///
    /// Blank input is ignored. Otherwise the user message is rendered, the
    /// input cleared and a typing indicator shown while `/chat` is asked for
    /// a reply. The indicator is removed before the reply (or the offline
    /// fallback) is revealed, so the visitor always gets exactly one answer.
    pub async fn send_message(&self) {
        let Some((text, typing)) = self.begin_send() else {
            return;
        };
        let reply = self.backend.send_chat(&text).await;
        self.finish_send(typing, reply);
    }

    fn begin_send(&self) -> Option<(String, MessageId)> {
        let mut inner = self.inner.borrow_mut();
        let text = inner.view.input_value().trim().to_owned();
        if text.is_empty() {
            return None;
        }
        inner.render(&text, Author::User, false, None);
        inner.view.clear_input();

        let (typing, replaced) = inner.model.start_typing();
        if let Some(old) = replaced {
            inner.view.remove_typing(old);
        }
        inner.view.show_typing(typing);
        inner.view.scroll_to_bottom();
        Some((text, typing))
    }

    fn finish_send(&self, typing: MessageId, reply: Result<ChatReply, WidgetError>) {
        let (text, source) = match reply {
            Ok(reply) => (reply.text().unwrap_or(self.config.empty_reply.as_str()).to_owned(), ReplySource::Remote),
            Err(e) => {
                log::warn!("[chatbot-ui] /chat failed, using offline reply: {e}");
                (self.config.fallback_reply.clone(), ReplySource::Offline)
            }
        };

        let id = {
            let mut inner = self.inner.borrow_mut();
            if inner.model.stop_typing(typing) {
                inner.view.remove_typing(typing);
            }
            inner.render(&text, Author::Bot, true, Some(source))
        };
        self.spawn_reveal(id);
    }

    /// Fill the input with a suggestion's text, send it, then hide the
    /// suggestions block. Empty suggestions are ignored.
    pub async fn activate_suggestion(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        {
            let mut inner = self.inner.borrow_mut();
            inner.view.set_input_value(text);
            inner.view.focus_input();
        }
        log::info!("[chatbot-ui] suggestion clicked, sending: {text}");
        self.send_message().await;

        let mut inner = self.inner.borrow_mut();
        if inner.model.hide_suggestions() {
            inner.view.hide_suggestions();
        }
    }

    // =========================================================================
    // LEAD GATE
    // =========================================================================

    /// Submit the lead form.
    ///
    /// The submit button is disabled for the duration of the request. On
    /// success the gate unlocks and the personalized welcome is rendered; on
    /// failure the configured lead error is alerted and the button gets its
    /// previous label back. The gate stays closed for a retry.
    pub async fn submit_lead(&self, lead: Lead) {
        let original_label = {
            let mut inner = self.inner.borrow_mut();
            if !inner.model.begin_lead_submission() {
                log::debug!("[chatbot-ui] lead submission ignored: already pending or unlocked");
                return;
            }
            let label = inner
                .view
                .submit_label()
                .unwrap_or_else(|| self.config.submit_idle_label.clone());
            inner.view.set_submit_state(false, &self.config.submit_busy_label);
            label
        };

        let result = self.backend.register_lead(&lead).await;

        let mut inner = self.inner.borrow_mut();
        match result {
            Ok(()) => {
                log::info!("[chatbot-ui] lead registered");
                if inner.model.finish_lead_submission(true) {
                    inner.view.set_lead_gate(LeadGateState::Unlocked);
                    inner.view.render_welcome(&welcome_for(&self.config, &lead.name));
                }
            }
            Err(e) => {
                log::error!("[chatbot-ui] lead capture failed: {e}");
                inner.model.finish_lead_submission(false);
                inner.view.alert(&self.config.lead_error_message);
                inner.view.set_submit_state(true, &original_label);
            }
        }
    }
}

fn welcome_for(config: &WidgetConfig, name: &str) -> Welcome {
    Welcome {
        bot_name: escape_html(&config.bot_name),
        greeting_html: escape_html(&config.welcome_text(name)),
        suggestions_html: config.suggestions.iter().map(|s| escape_html(s)).collect(),
        time: now_label(),
    }
}
