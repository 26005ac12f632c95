use crate::entry::{Entry, EntryKind, ListEntry};
use crate::error::{FsError, FsResult};
use crate::resolver;
use crate::store::{EntryStore, ROOT};
use crate::{PathString, MAX_ENTRIES, MAX_FILE_SIZE};

/// One independent in-memory filesystem: the entry store plus the
/// current-directory cursor. Construct as many as you like; each is a
/// fully isolated tree with its own root.
pub struct Filesystem {
    store: EntryStore,
    cwd: usize,
}

impl Filesystem {
    /// A fresh tree holding only the root directory.
    pub fn new() -> Self {
        Filesystem {
            store: EntryStore::new(),
            cwd: ROOT,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.store.count()
    }

    /// Resolve a path the way every public operation does: absolute paths
    /// walk from the root, relative paths from the current directory.
    fn resolve_at(&self, path: &str) -> FsResult<usize> {
        let start = if path.starts_with('/') { ROOT } else { self.cwd };
        resolver::resolve(&self.store, path, start)
    }

    /// Absolute form of `path`, joining relative paths onto the current
    /// directory with a single separator. The only place the path-length
    /// ceiling is checked.
    fn full_path(&self, path: &str) -> FsResult<PathString> {
        if path.starts_with('/') {
            let mut full = PathString::new();
            full.push_str(path).map_err(|_| FsError::PathTooLong)?;
            return Ok(full);
        }
        let mut full = self.working_dir()?;
        if !full.ends_with('/') {
            full.push('/').map_err(|_| FsError::PathTooLong)?;
        }
        full.push_str(path).map_err(|_| FsError::PathTooLong)?;
        Ok(full)
    }

    // ──────────────────────────────────────────────────────────────
    //  Tree mutation — create, mkdir, delete
    // ──────────────────────────────────────────────────────────────

    /// Create an empty file. The duplicate check only looks at files, so
    /// a directory of the same name under the same parent is allowed.
    pub fn create_file(&mut self, path: &str) -> FsResult<()> {
        self.create_entry(path, EntryKind::File).map(|_| ())
    }

    /// Create a directory. Same-kind duplicate check, mirror of
    /// [`Filesystem::create_file`].
    pub fn make_dir(&mut self, path: &str) -> FsResult<()> {
        self.create_entry(path, EntryKind::Directory).map(|_| ())
    }

    fn create_entry(&mut self, path: &str, kind: EntryKind) -> FsResult<usize> {
        if self.store.is_full() {
            return Err(FsError::NoSpace);
        }

        let full = self.full_path(path)?;
        let full = full.as_str();
        let split = full.rfind('/').ok_or(FsError::InvalidPath)?;
        let (dir_part, name) = (&full[..split], &full[split + 1..]);
        if name.is_empty() {
            return Err(FsError::InvalidPath);
        }

        // Empty directory portion means the leaf sits directly under root.
        let parent = if dir_part.is_empty() {
            ROOT
        } else {
            resolver::resolve(&self.store, dir_part, ROOT)?
        };
        if self.store.get(parent)?.kind != EntryKind::Directory {
            return Err(FsError::NotADirectory);
        }
        if self.store.find_child_of_kind(parent, name, kind).is_some() {
            return Err(FsError::AlreadyExists);
        }

        self.store.append(Entry::new(name, kind, Some(parent))?)
    }

    /// Remove a file or empty directory. The store compacts on removal,
    /// which shifts every later slot down by one; the parent links and
    /// the cwd cursor are re-pointed here so the tree stays intact.
    pub fn delete(&mut self, path: &str) -> FsResult<()> {
        let index = self.resolve_at(path)?;
        if index == ROOT {
            return Err(FsError::InvalidPath);
        }
        let entry = self.store.get(index)?;
        if entry.kind == EntryKind::Directory && self.store.has_children(index) {
            return Err(FsError::DirectoryNotEmpty);
        }

        self.store.remove(index)?;
        self.store.shift_parents_after(index);
        if self.cwd == index {
            // The current directory itself was deleted; fall back to root.
            self.cwd = ROOT;
        } else if self.cwd > index {
            self.cwd -= 1;
        }
        Ok(())
    }

    // ──────────────────────────────────────────────────────────────
    //  Content — bounded whole-file read and write
    // ──────────────────────────────────────────────────────────────

    /// Replace the contents of a file, creating it first if the path does
    /// not resolve. The size ceiling is checked before anything mutates.
    pub fn write_file(&mut self, path: &str, contents: &[u8]) -> FsResult<()> {
        if contents.len() > MAX_FILE_SIZE {
            return Err(FsError::NoSpace);
        }

        let full = self.full_path(path)?;
        let index = match resolver::resolve(&self.store, &full, ROOT) {
            Ok(index) => index,
            Err(FsError::NotFound) => self.create_entry(&full, EntryKind::File)?,
            Err(e) => return Err(e),
        };

        let entry = self.store.get_mut(index)?;
        if entry.kind == EntryKind::Directory {
            return Err(FsError::IsADirectory);
        }
        entry.data.clear();
        entry
            .data
            .extend_from_slice(contents)
            .map_err(|_| FsError::NoSpace)?;
        Ok(())
    }

    /// Copy up to `buf.len()` bytes of a file into `buf` and return how
    /// many were copied. A zero-size file reads as `Ok(0)`.
    pub fn read_file(&self, path: &str, buf: &mut [u8]) -> FsResult<usize> {
        let index = self.resolve_at(path)?;
        let entry = self.store.get(index)?;
        if entry.kind == EntryKind::Directory {
            return Err(FsError::IsADirectory);
        }
        let n = entry.data.len().min(buf.len());
        buf[..n].copy_from_slice(&entry.data[..n]);
        Ok(n)
    }

    // ──────────────────────────────────────────────────────────────
    //  Navigation — chdir and the derived working directory
    // ──────────────────────────────────────────────────────────────

    /// Change the current directory. `/` resets to root, `..` moves to
    /// the parent (a no-op at root), anything else must resolve to a
    /// directory. State is untouched on failure.
    pub fn change_dir(&mut self, path: &str) -> FsResult<()> {
        if path == "/" {
            self.cwd = ROOT;
            return Ok(());
        }
        if path == ".." {
            if let Some(parent) = self.store.get(self.cwd)?.parent {
                self.cwd = parent;
            }
            return Ok(());
        }

        let index = self.resolve_at(path)?;
        if self.store.get(index)?.kind != EntryKind::Directory {
            return Err(FsError::NotADirectory);
        }
        self.cwd = index;
        Ok(())
    }

    /// The current directory's absolute path, derived by walking parent
    /// links up to the root — there is no cached textual copy to drift.
    pub fn working_dir(&self) -> FsResult<PathString> {
        let mut chain: heapless::Vec<usize, MAX_ENTRIES> = heapless::Vec::new();
        let mut current = self.cwd;
        while current != ROOT {
            chain.push(current).map_err(|_| FsError::PathTooLong)?;
            current = self.store.get(current)?.parent.ok_or(FsError::NotFound)?;
        }

        let mut out = PathString::new();
        if chain.is_empty() {
            out.push('/').map_err(|_| FsError::PathTooLong)?;
            return Ok(out);
        }
        for &index in chain.iter().rev() {
            out.push('/').map_err(|_| FsError::PathTooLong)?;
            out.push_str(self.store.get(index)?.name.as_str())
                .map_err(|_| FsError::PathTooLong)?;
        }
        Ok(out)
    }

    // ──────────────────────────────────────────────────────────────
    //  Listing and lookups
    // ──────────────────────────────────────────────────────────────

    /// Direct children of a directory, in store order. Empty string or
    /// `.` lists the current directory. An empty result is a valid "no
    /// children" answer, not an error.
    pub fn list(&self, path: &str) -> FsResult<heapless::Vec<ListEntry, MAX_ENTRIES>> {
        let index = if path.is_empty() || path == "." {
            self.cwd
        } else {
            self.resolve_at(path)?
        };
        if self.store.get(index)?.kind != EntryKind::Directory {
            return Err(FsError::NotADirectory);
        }

        let mut out = heapless::Vec::new();
        for entry in self.store.iter() {
            if entry.parent == Some(index) {
                out.push(ListEntry {
                    name: entry.name.clone(),
                    kind: entry.kind,
                    size: entry.size(),
                })
                .map_err(|_| FsError::NoSpace)?;
            }
        }
        Ok(out)
    }

    /// Check if a path resolves at all.
    pub fn exists(&self, path: &str) -> bool {
        self.resolve_at(path).is_ok()
    }

    /// Check if a path resolves to a directory.
    pub fn is_dir(&self, path: &str) -> bool {
        match self.resolve_at(path) {
            Ok(index) => self
                .store
                .get(index)
                .map(|e| e.kind == EntryKind::Directory)
                .unwrap_or(false),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_dir_is_derived_from_parent_links() {
        let mut fs = Filesystem::new();
        fs.make_dir("/a").unwrap();
        fs.make_dir("/a/b").unwrap();
        fs.change_dir("a").unwrap();
        fs.change_dir("b").unwrap();
        assert_eq!(fs.working_dir().unwrap().as_str(), "/a/b");
    }

    #[test]
    fn dotdot_at_root_is_a_no_op() {
        let mut fs = Filesystem::new();
        fs.change_dir("..").unwrap();
        assert_eq!(fs.working_dir().unwrap().as_str(), "/");
    }

    #[test]
    fn change_dir_into_file_fails_unchanged() {
        let mut fs = Filesystem::new();
        fs.create_file("/notes").unwrap();
        assert_eq!(fs.change_dir("notes"), Err(FsError::NotADirectory));
        assert_eq!(fs.working_dir().unwrap().as_str(), "/");
    }

    #[test]
    fn relative_paths_resolve_against_cwd() {
        let mut fs = Filesystem::new();
        fs.make_dir("/a").unwrap();
        fs.change_dir("a").unwrap();
        fs.create_file("inner").unwrap();
        assert!(fs.exists("/a/inner"));
        assert!(fs.exists("inner"));
        assert!(!fs.exists("/inner"));
    }

    #[test]
    fn delete_repoints_parent_links_and_cwd() {
        let mut fs = Filesystem::new();
        fs.create_file("/junk").unwrap();
        fs.make_dir("/a").unwrap();
        fs.make_dir("/a/b").unwrap();
        fs.change_dir("/a/b").unwrap();

        // Removing slot 1 shifts /a and /a/b down by one each.
        fs.delete("/junk").unwrap();

        assert_eq!(fs.working_dir().unwrap().as_str(), "/a/b");
        assert!(fs.is_dir("/a/b"));
        fs.change_dir("..").unwrap();
        assert_eq!(fs.working_dir().unwrap().as_str(), "/a");
    }

    #[test]
    fn deleting_the_current_directory_falls_back_to_root() {
        let mut fs = Filesystem::new();
        fs.make_dir("/tmp").unwrap();
        fs.change_dir("tmp").unwrap();
        fs.delete("/tmp").unwrap();
        assert_eq!(fs.working_dir().unwrap().as_str(), "/");
    }

    #[test]
    fn deleting_root_is_invalid() {
        let mut fs = Filesystem::new();
        assert_eq!(fs.delete("/"), Err(FsError::InvalidPath));
        assert_eq!(fs.entry_count(), 1);
    }
}
