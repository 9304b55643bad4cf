use std::collections::VecDeque;

use crate::bridge::BridgeChange;

/// Bounded record of the most recent bridge toggles.
///
/// Once `capacity` entries are held, recording another evicts the oldest one.
/// Slots that were never filled are simply absent; there is no placeholder entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UndoHistory {
    entries: VecDeque<BridgeChange>,
    capacity: usize,
}

impl UndoHistory {
    /// An empty history keeping at most `capacity` entries; `0` keeps nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            // limits come from the command line and may be huge
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub(crate) fn record(&mut self, change: BridgeChange) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(change);
    }

    pub(crate) fn pop(&mut self) -> Option<BridgeChange> {
        self.entries.pop_back()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// The most entries kept at once.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries currently available to undo.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether [`Board::undo`](crate::Board::undo) has nothing to revert.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry [`Board::undo`](crate::Board::undo) would revert next.
    pub fn newest(&self) -> Option<&BridgeChange> {
        self.entries.back()
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item=&BridgeChange> {
        self.entries.iter()
    }
}
