use crate::error::{FsError, FsResult};
use crate::{MAX_FILE_SIZE, MAX_NAME_LEN};

/// Entry name buffer.
pub type NameString = heapless::String<MAX_NAME_LEN>;

/// Type of filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One file or directory record in the entry store.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: NameString,
    pub kind: EntryKind,
    /// Slot index of the containing directory; `None` only for the root.
    pub parent: Option<usize>,
    /// File content (files only, always empty for directories).
    pub data: heapless::Vec<u8, MAX_FILE_SIZE>,
}

impl Entry {
    pub fn new(name: &str, kind: EntryKind, parent: Option<usize>) -> FsResult<Self> {
        let mut buf = NameString::new();
        buf.push_str(name).map_err(|_| FsError::PathTooLong)?;
        Ok(Entry {
            name: buf,
            kind,
            parent,
            data: heapless::Vec::new(),
        })
    }

    /// The root directory, always held in slot 0.
    pub(crate) fn root() -> Self {
        let mut name = NameString::new();
        let _ = name.push('/');
        Entry {
            name,
            kind: EntryKind::Directory,
            parent: None,
            data: heapless::Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        match self.kind {
            EntryKind::File => self.data.len(),
            EntryKind::Directory => 0,
        }
    }
}

/// A listing entry — what `Filesystem::list` reports per child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: NameString,
    pub kind: EntryKind,
    pub size: usize,
}
