use super::*;

// =============================================================
// WidgetModel defaults
// =============================================================

#[test]
fn widget_model_starts_closed_and_gated() {
    let model = WidgetModel::default();
    assert_eq!(model.visibility, WidgetState::Closed);
    assert_eq!(model.lead_gate, LeadGateState::AwaitingLead);
    assert_eq!(model.lead_submission, LeadSubmission::Idle);
    assert!(model.typing.is_none());
    assert!(model.suggestions_visible);
    assert!(!model.is_unlocked());
}

#[test]
fn allocate_id_is_monotonic() {
    let mut model = WidgetModel::default();
    let a = model.allocate_id();
    let b = model.allocate_id();
    assert!(a < b);
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn open_and_close_report_changes() {
    let mut model = WidgetModel::default();
    assert!(model.open());
    assert!(!model.open());
    assert!(model.is_open());
    assert!(model.close());
    assert!(!model.close());
    assert!(!model.is_open());
}

// =============================================================
// Lead gate
// =============================================================

#[test]
fn lead_gate_unlocks_once() {
    let mut model = WidgetModel::default();
    assert!(model.begin_lead_submission());
    assert!(model.finish_lead_submission(true));
    assert!(model.is_unlocked());
    assert!(!model.finish_lead_submission(true));
}

#[test]
fn duplicate_submission_refused_while_in_flight() {
    let mut model = WidgetModel::default();
    assert!(model.begin_lead_submission());
    assert!(!model.begin_lead_submission());
}

#[test]
fn rejected_submission_stays_gated_and_allows_retry() {
    let mut model = WidgetModel::default();
    assert!(model.begin_lead_submission());
    assert!(!model.finish_lead_submission(false));
    assert_eq!(model.lead_gate, LeadGateState::AwaitingLead);
    assert_eq!(model.lead_submission, LeadSubmission::Idle);
    assert!(model.begin_lead_submission());
}

#[test]
fn submission_refused_after_unlock() {
    let mut model = WidgetModel::default();
    model.begin_lead_submission();
    model.finish_lead_submission(true);
    assert!(!model.begin_lead_submission());
}

// =============================================================
// Typing indicator
// =============================================================

#[test]
fn start_typing_replaces_previous_indicator() {
    let mut model = WidgetModel::default();
    let (first, none) = model.start_typing();
    assert!(none.is_none());
    let (second, replaced) = model.start_typing();
    assert_eq!(replaced, Some(first));
    assert_eq!(model.typing, Some(second));
}

#[test]
fn stop_typing_ignores_stale_ids() {
    let mut model = WidgetModel::default();
    let (first, _) = model.start_typing();
    let (second, _) = model.start_typing();
    assert!(!model.stop_typing(first));
    assert_eq!(model.typing, Some(second));
    assert!(model.stop_typing(second));
    assert!(model.typing.is_none());
}

#[test]
fn hide_suggestions_is_one_shot() {
    let mut model = WidgetModel::default();
    assert!(model.hide_suggestions());
    assert!(!model.hide_suggestions());
    assert!(!model.suggestions_visible);
}
