use crate::{log_debug, log_info};
// Imports the logging macros used to trace every removal.
use std::fs;
// Imports the standard library's file system module for deleting files and directories.
use std::io;
// Imports the standard library's I/O module, primarily for `io::Result`.
use std::path::{Component, Path, PathBuf};
// `Path`/`PathBuf` for filesystem paths, `Component` for lexical cleaning.

/// Converts a path into the forward-slash string form used by the matchers.
///
/// On Windows every `\` becomes `/`. On Unix a backslash is a legal file name
/// character, so the string is left untouched.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use junksweep::utils::filesystem::to_slash;
/// assert_eq!(to_slash(Path::new("/vol1/a/b")), "/vol1/a/b");
/// ```
pub fn to_slash(path: &Path) -> String {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '\\' {
        text.replace('\\', "/")
    } else {
        text.into_owned()
    }
}

/// Appends a `/` unless the string already ends with one.
pub fn with_trailing_slash(mut path: String) -> String {
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}

/// Returns the parent directory of a forward-slash path, including its trailing slash.
///
/// `"/vol1/Users/alice/Desktop.ini"` yields `"/vol1/Users/alice/"`.
/// Returns `None` for a path without any `/`.
pub fn parent_dir(path: &str) -> Option<&str> {
    // A trailing slash belongs to the entry itself (directory form), not to its parent.
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    trimmed.rfind('/').map(|idx| &path[..=idx])
}

/// Lexically cleans a path: drops `.` components and resolves `..` against
/// preceding normal components. The filesystem is never consulted.
pub fn lexical_clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {} // `.` adds nothing.
            Component::ParentDir => {
                // Only step back over a real name; `/..` stays at the root.
                let last_is_normal = matches!(cleaned.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    cleaned.pop();
                } else if !cleaned.has_root() {
                    cleaned.push(component);
                }
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

/// Deletes a single file (or symlink) without recursing.
///
/// Unlike a "make sure it's gone" helper, a missing path is reported as an
/// error: the caller wants to know that the entry disappeared out of band.
///
/// # Arguments
/// * `path` - The file to remove.
/// * `show_details` - Log a confirmation line at info level after a successful removal.
///
/// # Errors
///
/// Returns the underlying `io::Error` (not found, permission denied, in use, ...).
pub fn remove_file_entry(path: &Path, show_details: bool) -> io::Result<()> {
    // Log the attempt to remove the path at debug level.
    log_debug!("Attempting to remove file: {}", path.display());
    fs::remove_file(path)?; // The `?` operator propagates any `io::Error` that occurs.
    if show_details {
        log_info!("Successfully removed: {}", path.display());
    }
    Ok(())
}

/// Recursively deletes a directory and everything left inside it.
///
/// # Arguments
/// * `path` - The directory to remove.
/// * `show_details` - Log a confirmation line at info level after a successful removal.
///
/// # Errors
///
/// Returns the underlying `io::Error`; a directory that no longer exists is an error too.
pub fn remove_dir_tree(path: &Path, show_details: bool) -> io::Result<()> {
    log_debug!("Recursively removing directory: {}", path.display());
    fs::remove_dir_all(path)?; // Propagates any `io::Error`.
    if show_details {
        log_info!("Successfully removed: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parent_dir_keeps_trailing_slash() {
        assert_eq!(parent_dir("/vol1/Users/alice/Desktop.ini"), Some("/vol1/Users/alice/"));
        assert_eq!(parent_dir("/vol1/Thumbs.db"), Some("/vol1/"));
        assert_eq!(parent_dir("/vol1/sub/"), Some("/vol1/"));
        assert_eq!(parent_dir("Thumbs.db"), None);
    }

    #[test]
    fn trailing_slash_is_appended_only_once() {
        assert_eq!(with_trailing_slash("/vol1".to_string()), "/vol1/");
        assert_eq!(with_trailing_slash("/vol1/".to_string()), "/vol1/");
    }

    #[cfg(unix)]
    #[test]
    fn lexical_clean_resolves_dots() {
        assert_eq!(lexical_clean(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(lexical_clean(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(lexical_clean(Path::new("/a//b/")), PathBuf::from("/a/b"));
    }

    #[test]
    fn removing_missing_entries_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(remove_file_entry(&missing, false).is_err());
        assert!(remove_dir_tree(&missing, false).is_err());
    }

    #[test]
    fn remove_dir_tree_removes_contents() {
        let dir = tempdir().unwrap();
        let junk = dir.path().join("__MACOSX");
        fs::create_dir_all(junk.join("nested")).unwrap();
        fs::write(junk.join("nested/file"), "x").unwrap();

        remove_dir_tree(&junk, false).unwrap();
        assert!(!junk.exists());
    }
}
