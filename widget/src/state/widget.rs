#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use super::chat::MessageId;

/// Whether the widget container is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetState {
    #[default]
    Closed,
    Open,
}

/// Lead-capture gate in front of the conversation view.
///
/// Only moves forward: once `Unlocked` it stays so for the page session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeadGateState {
    #[default]
    AwaitingLead,
    Unlocked,
}

/// Whether a lead submission is currently in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeadSubmission {
    #[default]
    Idle,
    InFlight,
}

/// Explicit in-memory state of one widget instance.
///
/// The view is rendered from this model. Transition methods return whether
/// anything changed so callers can skip redundant DOM writes.
#[derive(Clone, Debug)]
pub struct WidgetModel {
    pub visibility: WidgetState,
    pub lead_gate: LeadGateState,
    pub lead_submission: LeadSubmission,
    /// The single typing indicator currently shown, if any.
    pub typing: Option<MessageId>,
    pub suggestions_visible: bool,
    next_id: u64,
}

impl Default for WidgetModel {
    fn default() -> Self {
        Self {
            visibility: WidgetState::Closed,
            lead_gate: LeadGateState::AwaitingLead,
            lead_submission: LeadSubmission::Idle,
            typing: None,
            suggestions_visible: true,
            next_id: 1,
        }
    }
}

impl WidgetModel {
    /// Allocate the next message/indicator id.
    pub fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn is_open(&self) -> bool {
        self.visibility == WidgetState::Open
    }

    pub fn is_unlocked(&self) -> bool {
        self.lead_gate == LeadGateState::Unlocked
    }

    pub fn open(&mut self) -> bool {
        let changed = self.visibility != WidgetState::Open;
        self.visibility = WidgetState::Open;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.visibility != WidgetState::Closed;
        self.visibility = WidgetState::Closed;
        changed
    }

    /// Start a lead submission. Refused while one is in flight or once the
    /// gate is already unlocked.
    pub fn begin_lead_submission(&mut self) -> bool {
        if self.is_unlocked() || self.lead_submission == LeadSubmission::InFlight {
            return false;
        }
        self.lead_submission = LeadSubmission::InFlight;
        true
    }

    /// Settle the in-flight submission. Returns `true` when this call moved
    /// the gate from `AwaitingLead` to `Unlocked`.
    pub fn finish_lead_submission(&mut self, accepted: bool) -> bool {
        self.lead_submission = LeadSubmission::Idle;
        if accepted && !self.is_unlocked() {
            self.lead_gate = LeadGateState::Unlocked;
            return true;
        }
        false
    }

    /// Show a new typing indicator. Returns its id and the indicator it
    /// replaces, which the caller must remove from the view.
    pub fn start_typing(&mut self) -> (MessageId, Option<MessageId>) {
        let id = self.allocate_id();
        let previous = self.typing.replace(id);
        (id, previous)
    }

    /// Clear the indicator `id`. Returns `true` if it was still the current
    /// one; a newer send may already have replaced it.
    pub fn stop_typing(&mut self, id: MessageId) -> bool {
        if self.typing == Some(id) {
            self.typing = None;
            true
        } else {
            false
        }
    }

    pub fn hide_suggestions(&mut self) -> bool {
        std::mem::replace(&mut self.suggestions_visible, false)
    }
}
