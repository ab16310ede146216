//! Client-side state for the chat widget.
//!
//! DESIGN
//! ======
//! State is split by concern: `widget` holds the visibility and lead-gate
//! state machine, `chat` the message types the controller renders. The DOM
//! is derived from these, never read back as the source of truth.

pub mod chat;
pub mod widget;
