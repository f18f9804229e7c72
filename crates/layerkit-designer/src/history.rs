//! Undo/redo history with a movable cursor.
//!
//! The history is a linear list of [`HistoryEntry`] values and a cursor at the
//! last applied entry (`None` before the first one). Undo and redo apply a
//! single entry's delta. Seeking rebuilds the layer sequence from the
//! baseline, the document state before the first retained entry, by
//! replaying entries forwards.

use crate::commands::HistoryEntry;
use crate::model::Layer;
use layerkit_settings::MAX_HISTORY_ENTRIES;

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    baseline: Vec<Layer>,
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(MAX_HISTORY_ENTRIES)
    }
}

impl History {
    /// Creates an empty history starting from an empty document.
    pub fn new(max_entries: usize) -> Self {
        Self::with_baseline(Vec::new(), max_entries)
    }

    /// Creates an empty history whose replay starts from `baseline`.
    ///
    /// `max_entries` is clamped to `1..=MAX_HISTORY_ENTRIES`.
    pub fn with_baseline(baseline: Vec<Layer>, max_entries: usize) -> Self {
        Self {
            baseline,
            entries: Vec::new(),
            cursor: None,
            max_entries: max_entries.clamp(1, MAX_HISTORY_ENTRIES),
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the last applied entry; `None` means before the first action.
    pub fn index(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn baseline(&self) -> &[Layer] {
        &self.baseline
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.next_index() < self.entries.len()
    }

    fn next_index(&self) -> usize {
        self.cursor.map_or(0, |c| c + 1)
    }

    /// Records an entry that has already been applied to the document.
    ///
    /// Redoable entries past the cursor are discarded. When the retention cap
    /// is exceeded the oldest entry is folded into the baseline.
    pub fn record(&mut self, entry: HistoryEntry) {
        let keep = self.next_index();
        if keep < self.entries.len() {
            tracing::trace!("Discarding {} redoable entries", self.entries.len() - keep);
            self.entries.truncate(keep);
        }

        tracing::debug!("Recorded {}", entry.label());
        self.entries.push(entry);

        while self.entries.len() > self.max_entries {
            let evicted = self.entries.remove(0);
            evicted.apply(&mut self.baseline);
            tracing::trace!("Evicted oldest history entry {}", evicted.label());
        }
        self.cursor = self.entries.len().checked_sub(1);
    }

    /// Reverts the entry at the cursor. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self, layers: &mut Vec<Layer>) -> bool {
        let Some(current) = self.cursor else {
            return false;
        };
        let entry = &self.entries[current];
        entry.revert(layers);
        tracing::debug!("Undo {}", entry.label());
        self.cursor = current.checked_sub(1);
        true
    }

    /// Reapplies the entry after the cursor. Returns `false` at the end of history.
    pub fn redo(&mut self, layers: &mut Vec<Layer>) -> bool {
        let next = self.next_index();
        let Some(entry) = self.entries.get(next) else {
            return false;
        };
        entry.apply(layers);
        tracing::debug!("Redo {}", entry.label());
        self.cursor = Some(next);
        true
    }

    /// Rebuilds `layers` by replaying the baseline through `target`.
    ///
    /// `None` replays nothing and restores the baseline. A target past the
    /// last entry leaves everything untouched and returns `false`.
    pub fn seek(&mut self, target: Option<usize>, layers: &mut Vec<Layer>) -> bool {
        let end = match target {
            Some(index) if index >= self.entries.len() => return false,
            Some(index) => index + 1,
            None => 0,
        };

        let mut replayed = self.baseline.clone();
        for entry in &self.entries[..end] {
            entry.apply(&mut replayed);
        }
        *layers = replayed;
        self.cursor = target;
        tracing::debug!("Seek to history index {:?}", target);
        true
    }

    /// Drops every entry and starts over from `baseline`.
    pub fn reset(&mut self, baseline: Vec<Layer>) {
        self.baseline = baseline;
        self.entries.clear();
        self.cursor = None;
    }
}
