use crate::entry::{Entry, EntryKind};
use crate::error::{FsError, FsResult};
use crate::MAX_ENTRIES;

/// Slot index of the root directory.
pub const ROOT: usize = 0;

// ──────────────────────────────────────────────────────────────
//  Entry store — flat fixed-capacity array, dense at all times
// ──────────────────────────────────────────────────────────────

/// Owns every entry. Slot 0 is always the root directory. Indices are
/// positional: removing a slot shifts every later entry down by one, so
/// an index is only a stable identity between mutations.
pub struct EntryStore {
    entries: heapless::Vec<Entry, MAX_ENTRIES>,
}

impl EntryStore {
    pub fn new() -> Self {
        let mut entries = heapless::Vec::new();
        let _ = entries.push(Entry::root());
        EntryStore { entries }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Append at the next free slot and return its index.
    pub fn append(&mut self, entry: Entry) -> FsResult<usize> {
        self.entries.push(entry).map_err(|_| FsError::NoSpace)?;
        Ok(self.entries.len() - 1)
    }

    /// Remove a slot, shifting every entry past it down by one to keep
    /// the store dense. Stored `parent` fields still hold the old
    /// positions afterwards; the caller owns that fix-up (see
    /// [`EntryStore::shift_parents_after`]).
    pub fn remove(&mut self, index: usize) -> FsResult<Entry> {
        if index >= self.entries.len() {
            return Err(FsError::NotFound);
        }
        Ok(self.entries.remove(index))
    }

    /// Rewrite parent links that pointed past a just-removed slot.
    pub fn shift_parents_after(&mut self, removed: usize) {
        for entry in self.entries.iter_mut() {
            if let Some(parent) = entry.parent {
                if parent > removed {
                    entry.parent = Some(parent - 1);
                }
            }
        }
    }

    pub fn get(&self, index: usize) -> FsResult<&Entry> {
        self.entries.get(index).ok_or(FsError::NotFound)
    }

    pub fn get_mut(&mut self, index: usize) -> FsResult<&mut Entry> {
        self.entries.get_mut(index).ok_or(FsError::NotFound)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// First entry of any kind named `name` under `parent`, in store order.
    pub fn find_child(&self, parent: usize, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.parent == Some(parent) && e.name.as_str() == name)
    }

    /// Same-kind sibling lookup, used by the duplicate-name checks.
    pub fn find_child_of_kind(&self, parent: usize, name: &str, kind: EntryKind) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.parent == Some(parent) && e.kind == kind && e.name.as_str() == name)
    }

    pub fn has_children(&self, index: usize) -> bool {
        self.entries.iter().any(|e| e.parent == Some(index))
    }
}
