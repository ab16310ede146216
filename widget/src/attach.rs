//! How the open/close controls are wired to the page.
//!
//! Some host pages render the toggler and container after the widget
//! loads. When either is missing at startup the widget listens on the
//! document and matches clicks by ancestor id instead of binding the
//! buttons directly. The choice is made once at mount.

/// Listener wiring for the open and close controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachStrategy {
    /// Click listeners bound straight to the toggler and close button.
    Direct,
    /// One document-level click listener resolving targets with `closest`.
    Delegated,
}

impl AttachStrategy {
    /// Pick the strategy from what the page had at startup.
    pub fn choose(toggler_present: bool, container_present: bool) -> Self {
        if toggler_present && container_present {
            AttachStrategy::Direct
        } else {
            AttachStrategy::Delegated
        }
    }
}
