// This is intentionally thin:
// append-only
// no reordering, no deduplication
// reads are borrowed views

use crate::history::turn::Turn;

/// The ordered record of one session's conversation.
///
/// Grows by exactly one Human and one Assistant turn per completed
/// question/answer cycle; `clear` is the only other mutation. Each session
/// owns its `History` exclusively — callers serialize access.
#[derive(Debug, Clone, Default)]
pub struct History {
    turns: Vec<Turn>,
}

impl History {
    pub fn new() -> Self {
        History { turns: Vec::new() }
    }

    /// Append one turn at the end. Never rejects input.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// The last `min(2 * max_turns, len)` turns, in chronological order.
    ///
    /// A conversational turn is a Human/Assistant pair, so `max_turns`
    /// conversational turns span twice that many records. `max_turns == 0`
    /// yields the empty slice.
    pub fn recent_window(&self, max_turns: usize) -> &[Turn] {
        let take = max_turns.saturating_mul(2).min(self.turns.len());
        &self.turns[self.turns.len() - take..]
    }

    /// Reset to empty. Irreversible; effective for all subsequent reads.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
