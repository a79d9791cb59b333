use std::sync::Arc;

use arc_swap::ArcSwap;

/// Single-slot store for the most recent generated answer.
///
/// Starts empty. Every successful generation replaces the value and no
/// history is kept. Reads and writes never block: a request that renders
/// while another request is storing a new answer sees either the old or the
/// new string, whichever was current when it called [`AnswerSlot::get`].
/// Last writer wins.
#[derive(Debug)]
pub struct AnswerSlot {
    current: ArcSwap<String>,
}

impl AnswerSlot {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(String::new()),
        }
    }

    /// Snapshot of the current answer.
    pub fn get(&self) -> Arc<String> {
        self.current.load_full()
    }

    pub fn set(&self, answer: impl Into<String>) {
        self.current.store(Arc::new(answer.into()));
    }
}

impl Default for AnswerSlot {
    fn default() -> Self {
        Self::new()
    }
}
