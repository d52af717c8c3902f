//! Visited-state history with undo/redo navigation.
//!
//! History is a single append/truncate log plus a cursor rather than a pair
//! of undo and redo stacks. Recording truncates everything after the cursor
//! before pushing, so navigating back and then recording a new state
//! permanently discards the abandoned branch.

use super::key::StateKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single visited-state record.
///
/// The timestamp is bookkeeping for diagnostics and serialized logs; it
/// never affects navigation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct HistoryEntry<S: StateKey> {
    /// The state that was visited.
    pub state: S,
    /// When the visit was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Ordered log of visited states supporting undo/redo via a cursor.
///
/// The cursor marks the entry currently loaded in the owning machine.
/// `None` means "no position": a fresh or cleared log where neither
/// [`back`](History::back) nor [`forward`](History::forward) can move.
///
/// # Example
///
/// ```rust
/// use turnstile::core::History;
///
/// let mut history: History<String> = History::new();
/// history.record("draft".to_string());
/// history.record("review".to_string());
/// history.record("published".to_string());
///
/// assert_eq!(history.back(), Some(&"review".to_string()));
/// assert_eq!(history.back(), Some(&"draft".to_string()));
/// assert_eq!(history.back(), None);
/// assert_eq!(history.forward(), Some(&"review".to_string()));
///
/// // Recording from the middle discards the branch ahead of the cursor.
/// history.record("retracted".to_string());
/// assert_eq!(history.forward(), None);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct History<S: StateKey> {
    entries: Vec<HistoryEntry<S>>,
    cursor: Option<usize>,
}

impl<S: StateKey> History<S> {
    /// Create an empty log with no position.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Record a visited state.
    ///
    /// Entries after the cursor are dropped first, then the state is pushed
    /// and the cursor moves to it. Recording works from any starting point,
    /// including an empty or cleared log.
    pub fn record(&mut self, state: S) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.entries.truncate(keep);
        self.entries.push(HistoryEntry {
            state,
            recorded_at: Utc::now(),
        });
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step the cursor back and return the entry it lands on.
    ///
    /// Returns `None` without moving when already at the first entry or
    /// when the log has no position.
    pub fn back(&mut self) -> Option<&S> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                Some(&self.entries[cursor - 1].state)
            }
            _ => None,
        }
    }

    /// Step the cursor forward and return the entry it lands on.
    ///
    /// Returns `None` without moving when already at the last entry or
    /// when the log has no position.
    pub fn forward(&mut self) -> Option<&S> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                Some(&self.entries[cursor + 1].state)
            }
            _ => None,
        }
    }

    /// Drop all entries and reset the cursor to no position.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// The state under the cursor, if the log has a position.
    pub fn current(&self) -> Option<&S> {
        self.cursor
            .and_then(|cursor| self.entries.get(cursor))
            .map(|entry| &entry.state)
    }

    /// Cursor position, if any.
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// The visited states in order, ignoring the cursor.
    pub fn path(&self) -> Vec<&S> {
        self.entries.iter().map(|entry| &entry.state).collect()
    }

    /// All entries in order.
    pub fn entries(&self) -> &[HistoryEntry<S>] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: StateKey> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}
