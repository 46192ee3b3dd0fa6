use crate::error::SweepError;
use crate::log_debug;
use crate::utils::filesystem::{to_slash, with_trailing_slash};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir; // Recursive, non-following directory traversal.

/// Raw OS error codes that mean "the device is there but not ready".
#[cfg(windows)]
const NOT_READY_CODES: &[i32] = &[21]; // ERROR_NOT_READY
#[cfg(target_os = "linux")]
const NOT_READY_CODES: &[i32] = &[123]; // ENOMEDIUM
#[cfg(not(any(windows, target_os = "linux")))]
const NOT_READY_CODES: &[i32] = &[6]; // ENXIO

/// Named classification of an error met while walking a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkErrorKind {
    /// The entry or subtree is not readable by the current user.
    PermissionDenied,
    /// The device behind the path is disconnected, empty or spinning up.
    NotReady,
    /// Anything else. Aborts the walk of the current root.
    Other,
}

impl WalkErrorKind {
    /// Classifies an I/O error.
    pub fn of_io(err: &io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            return WalkErrorKind::PermissionDenied;
        }
        match err.raw_os_error() {
            Some(code) if NOT_READY_CODES.contains(&code) => WalkErrorKind::NotReady,
            _ => WalkErrorKind::Other,
        }
    }

    /// Classifies a `walkdir` error. Errors without an I/O cause (loops) are `Other`.
    pub fn of(err: &walkdir::Error) -> Self {
        err.io_error().map_or(WalkErrorKind::Other, Self::of_io)
    }

    /// Skippable errors drop the entry or subtree and let the walk continue.
    pub fn is_skippable(self) -> bool {
        matches!(self, WalkErrorKind::PermissionDenied | WalkErrorKind::NotReady)
    }
}

/// One filesystem object found by the walk.
///
/// `text` is the forward-slash form the matchers and listings work on (a
/// directory's ends with `/`). It is lossy for names that are not valid
/// UTF-8, so removal always goes through `path`, which is exactly what the
/// OS returned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entry {
    text: String,
    path: PathBuf,
}

impl Entry {
    /// Builds the entry for a walked path.
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let text = to_slash(&path);
        let text = if is_dir { with_trailing_slash(text) } else { text };
        Entry { text, path }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The on-disk path, byte for byte.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Entry { text: text.to_string(), path: PathBuf::from(text) }
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        let path = PathBuf::from(&text);
        Entry { text, path }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<str> for Entry {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Entry {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for Entry {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}

/// Everything found below one root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkedTree {
    /// Every directory, root included, each ending with `/`.
    pub directories: Vec<Entry>,
    /// Every non-directory entry (files, symlinks, special files).
    pub files: Vec<Entry>,
    /// Number of entries or subtrees skipped because of permission/not-ready errors.
    pub skipped: usize,
}

/// Walks every directory and file below `root`.
///
/// Symbolic links are not followed and are reported as files. Unreadable or
/// not-ready entries are skipped; any other error aborts this root only.
///
/// # Arguments
/// * `root` - Absolute, forward-slash, trailing-slash terminated root path.
///
/// # Errors
/// `SweepError::Walk` carrying the classified kind (always `Other`).
pub fn walk_root(root: &str) -> Result<WalkedTree, SweepError> {
    let mut tree = WalkedTree::default();

    for result in WalkDir::new(root) {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                let kind = WalkErrorKind::of(&err);
                if kind.is_skippable() {
                    // Expected on restricted or offline subtrees; walkdir resumes with the next sibling.
                    log_debug!("Skipping {:?} entry under {}: {}", kind, root, err);
                    tree.skipped += 1;
                    continue;
                }
                return Err(SweepError::Walk { root: root.to_string(), kind, source: err });
            }
        };

        let is_dir = entry.file_type().is_dir();
        let found = Entry::new(entry.into_path(), is_dir);
        if is_dir {
            tree.directories.push(found);
        } else {
            tree.files.push(found);
        }
    }

    log_debug!(
        "Walked {}: {} directories, {} files, {} skipped",
        root,
        tree.directories.len(),
        tree.files.len(),
        tree.skipped
    );
    Ok(tree)
}
