use crate::error::{FsError, FsResult};
use crate::store::EntryStore;

/// Walk a `/`-separated path through parent links, starting at `start`.
///
/// Empty segments are skipped, so a leading slash contributes nothing and
/// `a//b` reads as `a/b`. Matching is exact and case-sensitive; the first
/// entry in store order whose parent is the running index wins, regardless
/// of kind. There is no `.` or `..` handling here — `..` belongs to the
/// navigator. Fails at the first unmatched segment.
///
/// O(segments × live entries); fine for a store this small.
pub fn resolve(store: &EntryStore, path: &str, start: usize) -> FsResult<usize> {
    let mut current = start;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        current = store.find_child(current, segment).ok_or(FsError::NotFound)?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, EntryKind};
    use crate::store::ROOT;

    fn sample_store() -> EntryStore {
        let mut store = EntryStore::new();
        let docs = store
            .append(Entry::new("docs", EntryKind::Directory, Some(ROOT)).unwrap())
            .unwrap();
        store
            .append(Entry::new("readme", EntryKind::File, Some(docs)).unwrap())
            .unwrap();
        store
    }

    #[test]
    fn walks_segments_from_start() {
        let store = sample_store();
        assert_eq!(resolve(&store, "docs", ROOT).unwrap(), 1);
        assert_eq!(resolve(&store, "docs/readme", ROOT).unwrap(), 2);
    }

    #[test]
    fn leading_and_doubled_slashes_are_skipped() {
        let store = sample_store();
        assert_eq!(resolve(&store, "/docs/readme", ROOT).unwrap(), 2);
        assert_eq!(resolve(&store, "docs//readme", ROOT).unwrap(), 2);
    }

    #[test]
    fn empty_path_resolves_to_start() {
        let store = sample_store();
        assert_eq!(resolve(&store, "", ROOT).unwrap(), ROOT);
        assert_eq!(resolve(&store, "readme", 1).unwrap(), 2);
    }

    #[test]
    fn fails_on_first_unmatched_segment() {
        let store = sample_store();
        assert_eq!(resolve(&store, "nope", ROOT), Err(FsError::NotFound));
        assert_eq!(resolve(&store, "docs/nope/readme", ROOT), Err(FsError::NotFound));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let store = sample_store();
        assert_eq!(resolve(&store, "Docs", ROOT), Err(FsError::NotFound));
    }
}
