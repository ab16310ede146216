//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure text and time helpers kept free of browser types so the controller
//! can be tested natively.

pub mod clock;
pub mod escape;
