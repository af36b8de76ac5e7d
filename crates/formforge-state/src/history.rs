//! Bounded undo/redo history.
//!
//! An index-navigated ring of immutable field-list snapshots. The snapshot
//! at the cursor always mirrors the store's current state; recording a new
//! state discards any redo tail and evicts the oldest snapshot once the
//! ring is full.

use std::collections::VecDeque;

use formforge_core::Field;

/// Maximum number of retained snapshots.
pub const HISTORY_CAP: usize = 50;

/// Index-navigated ring of field-list snapshots.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Vec<Field>>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            snapshots: VecDeque::from([Vec::new()]),
            cursor: 0,
        }
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `state` as the new head, discarding any redo tail.
    pub fn record(&mut self, state: Vec<Field>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(state);
        self.cursor += 1;
        while self.snapshots.len() > HISTORY_CAP {
            self.snapshots.pop_front();
            self.cursor -= 1;
        }
    }

    /// Step back one snapshot, returning the state to restore.
    pub fn undo(&mut self) -> Option<&[Field]> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one snapshot, returning the state to restore.
    pub fn redo(&mut self) -> Option<&[Field]> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formforge_core::FieldKind;

    fn state(names: &[&str]) -> Vec<Field> {
        names
            .iter()
            .map(|n| Field::new(FieldKind::Text, *n))
            .collect()
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());

        history.record(state(&["a"]));
        history.record(state(&["a", "b"]));

        let back = history.undo().unwrap();
        assert_eq!(back.len(), 1);
        assert!(history.can_redo());

        let forward = history.redo().unwrap();
        assert_eq!(forward.len(), 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_discards_redo_tail() {
        let mut history = History::new();
        history.record(state(&["a"]));
        history.record(state(&["a", "b"]));
        history.undo();

        history.record(state(&["a", "c"]));
        assert!(!history.can_redo());

        let back = history.undo().unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].name, "a");
    }

    #[test]
    fn test_ring_is_bounded() {
        let mut history = History::new();
        for i in 0..200 {
            history.record(vec![Field::new(FieldKind::Text, format!("f{i}"))]);
        }

        let mut undos = 0;
        while history.undo().is_some() {
            undos += 1;
        }
        // The ring keeps HISTORY_CAP snapshots in total, so at most
        // HISTORY_CAP - 1 steps back from the head.
        assert_eq!(undos, HISTORY_CAP - 1);
    }
}
