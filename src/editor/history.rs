use crate::graph::GraphSnapshot;
use std::collections::VecDeque;

/// Maximum number of snapshots kept on the undo side.
pub const HISTORY_LIMIT: usize = 50;

/// Bounded undo/redo stacks over whole-graph snapshots.
///
/// The manager never touches the live graph. It only exchanges snapshots
/// with the caller: the caller hands over its current state and applies
/// whatever comes back.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: VecDeque<GraphSnapshot>,
    future: VecDeque<GraphSnapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the state that is about to be replaced.
    ///
    /// Any fresh action invalidates the redo chain, so `future` is
    /// cleared; once the limit is reached the oldest snapshot is dropped.
    pub fn take_snapshot(&mut self, snapshot: GraphSnapshot) {
        self.past.push_back(snapshot);
        while self.past.len() > HISTORY_LIMIT {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Steps back one snapshot, shifting the current state onto the redo
    /// side. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: GraphSnapshot) -> Option<GraphSnapshot> {
        let previous = self.past.pop_back()?;
        self.future.push_front(current);
        Some(previous)
    }

    /// Steps forward one snapshot, shifting the current state back onto
    /// the undo side. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: GraphSnapshot) -> Option<GraphSnapshot> {
        let next = self.future.pop_front()?;
        self.past.push_back(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of snapshots available to undo.
    pub fn depth(&self) -> usize {
        self.past.len()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
