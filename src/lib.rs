//! shellfs — a minimal hierarchical filesystem held entirely in RAM,
//! backing the command shell on a small embedded target.
//!
//! Everything lives in a flat fixed-capacity entry store; the hierarchy is
//! encoded purely through per-entry parent links. No heap: all buffers are
//! `heapless` containers sized by the limits below.

#![cfg_attr(not(test), no_std)]

pub mod entry;
pub mod error;
pub mod fs;
pub mod resolver;
pub mod store;

use lazy_static::lazy_static;
use spin::Mutex;

pub use entry::{Entry, EntryKind, ListEntry, NameString};
pub use error::{FsError, FsResult};
pub use fs::Filesystem;
pub use store::ROOT;

/// Maximum number of live entries, root included.
pub const MAX_ENTRIES: usize = 64;
/// Maximum entry name length in bytes.
pub const MAX_NAME_LEN: usize = 32;
/// Maximum file content length in bytes.
pub const MAX_FILE_SIZE: usize = 1024;
/// Maximum absolute path length in bytes.
pub const MAX_PATH_LEN: usize = 256;

/// Absolute path buffer.
pub type PathString = heapless::String<MAX_PATH_LEN>;

lazy_static! {
    /// Process-wide instance for the shell. Library users wanting isolated
    /// trees should construct their own [`Filesystem`] instead.
    pub static ref FS: Mutex<Filesystem> = Mutex::new(Filesystem::new());
}

/// Reset the shared instance to a single root directory.
pub fn init() {
    *FS.lock() = Filesystem::new();
    log::info!("filesystem initialized, root directory created");
}
