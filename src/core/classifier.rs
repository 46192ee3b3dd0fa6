use crate::core::catalog::{self, JunkPattern, OsFamily};
use crate::core::matcher::RootMatchers;
use crate::core::walker::{Entry, WalkedTree};
use crate::log_debug;
use crate::utils::filesystem::{parent_dir, with_trailing_slash};
use std::collections::HashSet;

/// Per-user known folders, used only by the `Desktop.ini` exclusion rule.
///
/// Paths are stored lower-cased with a trailing `/`. The collection is an
/// unordered set; nothing depends on iteration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserDirectories {
    dirs: HashSet<String>,
}

impl UserDirectories {
    /// Builds the set from forward-slash paths, normalizing case and the trailing slash.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dirs = paths
            .into_iter()
            .map(|path| with_trailing_slash(path.as_ref().to_lowercase()))
            .collect();
        UserDirectories { dirs }
    }

    /// Returns `true` if `dir` is exactly one of the user directories.
    pub fn contains(&self, dir: &str) -> bool {
        self.dirs.contains(&with_trailing_slash(dir.to_lowercase()))
    }

    /// Returns `true` if the file sits directly inside a user directory.
    /// Deeper descendants do not count.
    pub fn is_direct_parent_of(&self, file: &str) -> bool {
        parent_dir(file).is_some_and(|parent| self.contains(parent))
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

/// Matches found below one or more roots.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Matched directories, original case, trailing `/`.
    pub matched_directories: Vec<Entry>,
    /// Matched files, original case.
    pub matched_files: Vec<Entry>,
}

impl MatchResult {
    /// Appends another root's matches after this one's.
    pub fn merge(&mut self, other: MatchResult) {
        self.matched_directories.extend(other.matched_directories);
        self.matched_files.extend(other.matched_files);
    }

    /// Drops repeated entries, keeping the first occurrence and the original order.
    pub fn dedup(&mut self) {
        dedup_in_order(&mut self.matched_directories);
        dedup_in_order(&mut self.matched_files);
    }

    /// Drops every matched directory that sits inside another matched
    /// directory. Removing the outer one takes the inner one with it.
    pub fn drop_nested_directories(&mut self) {
        let matched: HashSet<String> = self.matched_directories.iter().map(|d| d.as_str().to_string()).collect();
        self.matched_directories.retain(|dir| {
            let nested = has_matched_ancestor(dir.as_str(), &matched);
            if nested {
                log_debug!("Not listing {}: an enclosing directory is already matched", dir);
            }
            !nested
        });
    }

    pub fn len(&self) -> usize {
        self.matched_directories.len() + self.matched_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn dedup_in_order(entries: &mut Vec<Entry>) {
    let mut seen = HashSet::with_capacity(entries.len());
    entries.retain(|entry| seen.insert(entry.clone()));
}

fn has_matched_ancestor(dir: &str, matched: &HashSet<String>) -> bool {
    let mut current = dir;
    while let Some(parent) = parent_dir(current) {
        if matched.contains(parent) {
            return true;
        }
        current = parent;
    }
    false
}

/// Returns `true` when a file match must be dropped because it is legitimate where it sits.
fn is_excluded(pattern: JunkPattern, file: &str, user_dirs: &UserDirectories) -> bool {
    pattern == catalog::DESKTOP_INI && user_dirs.is_direct_parent_of(file)
}

fn trace_match(pattern: JunkPattern, path: &Entry) {
    let family = catalog::family_of(pattern).map_or("?", OsFamily::label);
    log_debug!("{} rule '{}' matched {}", family, pattern.text(), path);
}

/// Classifies one walked root.
///
/// Directory rules are tested against directories and file rules against
/// files, both on lower-cased paths; matches keep their original case. Pure:
/// nothing on disk is touched. An entry hit by several rules is listed once
/// per rule; call [`MatchResult::dedup`] before presenting.
pub fn classify(matchers: &RootMatchers, tree: &WalkedTree, user_dirs: &UserDirectories) -> MatchResult {
    let lowered_dirs: Vec<String> = tree.directories.iter().map(|d| d.as_str().to_lowercase()).collect();
    let lowered_files: Vec<String> = tree.files.iter().map(|f| f.as_str().to_lowercase()).collect();

    let mut result = MatchResult::default();
    for (pattern, compiled) in matchers.iter() {
        if pattern.is_directory() {
            for (dir, lowered) in tree.directories.iter().zip(&lowered_dirs) {
                if RootMatchers::matches(compiled, lowered) {
                    trace_match(pattern, dir);
                    result.matched_directories.push(dir.clone());
                }
            }
        } else {
            for (file, lowered) in tree.files.iter().zip(&lowered_files) {
                if !RootMatchers::matches(compiled, lowered) {
                    continue;
                }
                if is_excluded(pattern, file.as_str(), user_dirs) {
                    log_debug!("Keeping {}: top-level file of a user folder", file);
                    continue;
                }
                trace_match(pattern, file);
                result.matched_files.push(file.clone());
            }
        }
    }
    result
}
