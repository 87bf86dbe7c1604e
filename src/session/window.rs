//! Bounded FIFO memory window over recent conversation turns.
//!
//! Distinct from the transcript: the window only ever holds the last `cap`
//! non-system turns and exists solely to build outbound completion
//! requests. Oldest entries are evicted first once capacity is exceeded.

use std::collections::VecDeque;

use super::Turn;

/// Default number of recent turns carried into each request.
pub const DEFAULT_WINDOW_CAP: usize = 3;

#[derive(Debug, Clone)]
pub struct MemoryWindow {
    cap: usize,
    turns: VecDeque<Turn>,
}

impl MemoryWindow {
    pub fn new(cap: usize) -> Self {
        Self { cap, turns: VecDeque::with_capacity(cap) }
    }

    /// Append a turn, evicting the oldest if the window is full.
    pub fn push(&mut self, turn: Turn) {
        if self.turns.len() == self.cap {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    /// Turns in arrival order, oldest first.
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    /// Snapshot of the current window contents, oldest first.
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for MemoryWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_CAP)
    }
}
