//! Undo/redo for designer state.

use super::DesignerState;
use crate::commands::HistoryEntry;

impl DesignerState {
    /// Reverts the most recent applied action.
    pub fn undo(&mut self) {
        if self.history.undo(&mut self.layers) {
            self.after_change();
        }
    }

    /// Reapplies the next undone action.
    pub fn redo(&mut self) {
        if self.history.redo(&mut self.layers) {
            self.after_change();
        }
    }

    /// Jumps to a history point by replaying from the baseline.
    ///
    /// `None` is the state before the first retained action. An index past
    /// the end is ignored.
    pub fn set_history_index(&mut self, index: Option<usize>) {
        if self.history.seek(index, &mut self.layers) {
            self.after_change();
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Retained history entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Index of the last applied entry, `None` before the first one.
    pub fn history_index(&self) -> Option<usize> {
        self.history.index()
    }

    /// Forgets every recorded action, keeping the current layers.
    pub fn clear_history(&mut self) {
        self.history.reset(self.layers.clone());
    }
}
