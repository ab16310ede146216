//! Streaming reveal of bot replies.
//!
//! A reply is revealed one escaped character per tick into its own message
//! element. Each reveal is a task keyed by the message id it writes into, so
//! several reveals can run at once without sharing state. A task ends when
//! the text is exhausted, when it is cancelled, or when the controller finds
//! its element detached.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::{BTreeMap, VecDeque};

use crate::state::chat::MessageId;
use crate::util::escape::escape_char;

/// Milliseconds between revealed characters.
pub const DEFAULT_REVEAL_INTERVAL_MS: u32 = 30;

/// Outcome of one reveal tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// One more character was written; schedule another tick.
    Continue,
    /// The reveal is finished or was cancelled; stop ticking.
    Done,
}

impl RevealStep {
    pub fn is_done(&self) -> bool {
        matches!(self, RevealStep::Done)
    }
}

/// Remaining characters of one reveal.
#[derive(Clone, Debug)]
pub struct RevealTask {
    pending: VecDeque<char>,
}

impl RevealTask {
    pub fn new(text: &str) -> Self {
        Self { pending: text.chars().collect() }
    }

    /// The next escaped character, or `None` when the text is exhausted.
    pub fn next_chunk(&mut self) -> Option<String> {
        self.pending.pop_front().map(escape_char)
    }

    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

/// All reveals in progress, keyed by message id.
#[derive(Clone, Debug, Default)]
pub struct RevealRegistry {
    tasks: BTreeMap<MessageId, RevealTask>,
}

impl RevealRegistry {
    pub fn start(&mut self, id: MessageId, text: &str) {
        self.tasks.insert(id, RevealTask::new(text));
    }

    /// Pop the next chunk for `id`. A finished task is removed and yields
    /// `None`, as does an unknown or cancelled id.
    pub fn next_chunk(&mut self, id: MessageId) -> Option<String> {
        let task = self.tasks.get_mut(&id)?;
        let chunk = task.next_chunk();
        if chunk.is_none() {
            self.tasks.remove(&id);
        }
        chunk
    }

    /// Stop a reveal. Returns `true` if it was still running.
    pub fn cancel(&mut self, id: MessageId) -> bool {
        self.tasks.remove(&id).is_some()
    }

    pub fn is_active(&self, id: MessageId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// Ids of running reveals, oldest first.
    pub fn active_ids(&self) -> Vec<MessageId> {
        self.tasks.keys().copied().collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
