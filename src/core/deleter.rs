use crate::core::classifier::MatchResult;
use crate::core::walker::Entry;
use crate::log_warn;
use crate::utils::filesystem::{remove_dir_tree, remove_file_entry};
use colored::Colorize;
use tabled::Tabled; // Failed deletions are rendered as a table in the summary.

/// What happened to one matched entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    Removed,
    Failed(String),
}

/// One attempted deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRecord {
    pub path: String,
    pub outcome: DeletionOutcome,
}

/// Row of the failure table printed after the run.
#[derive(Tabled, Clone)]
pub struct FailedEntry {
    #[tabled(rename = "Path")]
    pub path: String,
    #[tabled(rename = "Error")]
    pub error: String,
}

/// Outcome of the whole deletion pass, in attempt order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeletionReport {
    pub records: Vec<DeletionRecord>,
}

impl DeletionReport {
    pub fn attempted(&self) -> usize {
        self.records.len()
    }

    pub fn removed(&self) -> usize {
        self.records.iter().filter(|r| r.outcome == DeletionOutcome::Removed).count()
    }

    /// Failed deletions as table rows.
    pub fn failures(&self) -> Vec<FailedEntry> {
        self.records
            .iter()
            .filter_map(|record| match &record.outcome {
                DeletionOutcome::Failed(error) => Some(FailedEntry {
                    path: record.path.clone(),
                    error: error.clone(),
                }),
                DeletionOutcome::Removed => None,
            })
            .collect()
    }
}

/// Deletes every matched entry, best effort.
///
/// Files go first, one at a time and never recursively; directories follow
/// and are removed with everything still inside them. A failure is logged and
/// recorded, and the pass moves on: every entry is attempted exactly once.
///
/// # Arguments
/// * `matches` - The aggregated matches of all roots.
/// * `show_details` - Log each successful removal.
pub fn delete_matches(matches: &MatchResult, show_details: bool) -> DeletionReport {
    let mut report = DeletionReport::default();

    for file in &matches.matched_files {
        println!("Deleting '{}' ...", file.as_str().bright_white());
        let result = remove_file_entry(file.path(), show_details);
        report.records.push(record(file, result));
    }

    for dir in &matches.matched_directories {
        println!("Deleting '{}' ...", dir.as_str().bright_white());
        let result = remove_dir_tree(dir.path(), show_details);
        report.records.push(record(dir, result));
    }

    report
}

fn record(entry: &Entry, result: std::io::Result<()>) -> DeletionRecord {
    let outcome = match result {
        Ok(()) => DeletionOutcome::Removed,
        Err(e) => {
            log_warn!("{} {}: {}", "Failed to delete".bright_yellow(), entry, e);
            DeletionOutcome::Failed(e.to_string())
        }
    };
    DeletionRecord { path: entry.as_str().to_string(), outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::filesystem::{to_slash, with_trailing_slash};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn entries(paths: &[String]) -> Vec<Entry> {
        paths.iter().map(|p| Entry::from(p.as_str())).collect()
    }

    #[test]
    fn every_entry_is_attempted_and_out_of_band_removals_fail() {
        let dir = tempdir().unwrap();
        let root = with_trailing_slash(to_slash(dir.path()));

        let files: Vec<String> = (0..4).map(|i| format!("{}junk{}.tmp", root, i)).collect();
        let dirs: Vec<String> = (0..3).map(|i| format!("{}.Trash-{}/", root, i)).collect();
        for file in &files {
            fs::write(file, "x").unwrap();
        }
        for d in &dirs {
            fs::create_dir_all(format!("{}files", d)).unwrap();
            fs::write(format!("{}files/old", d), "x").unwrap();
        }

        // k = 2 entries disappear before the executor runs.
        fs::remove_file(&files[1]).unwrap();
        fs::remove_dir_all(&dirs[2]).unwrap();

        let matches = MatchResult { matched_directories: entries(&dirs), matched_files: entries(&files) };
        let report = delete_matches(&matches, false);

        assert_eq!(report.attempted(), 7);
        assert_eq!(report.removed(), 5);
        let failed: Vec<String> = report.failures().into_iter().map(|f| f.path).collect();
        assert_eq!(failed, vec![files[1].clone(), dirs[2].clone()]);

        for path in files.iter().chain(&dirs) {
            assert!(!Path::new(path).exists());
        }
    }

    #[test]
    fn files_are_deleted_before_directories() {
        let dir = tempdir().unwrap();
        let root = with_trailing_slash(to_slash(dir.path()));
        let junk_dir = format!("{}__MACOSX/", root);
        let inner = format!("{}__MACOSX/._a", root);
        fs::create_dir_all(&junk_dir).unwrap();
        fs::write(&inner, "x").unwrap();

        let matches = MatchResult {
            matched_directories: entries(&[junk_dir.clone()]),
            matched_files: entries(&[inner.clone()]),
        };
        let report = delete_matches(&matches, false);

        // The inner file is removed individually, then the directory: no failures.
        assert_eq!(report.records[0].path, inner);
        assert_eq!(report.records[1].path, junk_dir);
        assert_eq!(report.removed(), 2);
        assert!(report.failures().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn names_that_are_not_utf8_are_still_removed() {
        use crate::core::walker::walk_root;
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let raw = dir.path().join(OsStr::from_bytes(b"caf\xe9.tmp"));
        if fs::write(&raw, "x").is_err() {
            return;
        }

        let tree = walk_root(&with_trailing_slash(to_slash(dir.path()))).unwrap();
        let matches = MatchResult { matched_directories: vec![], matched_files: tree.files };
        let report = delete_matches(&matches, false);

        assert_eq!(report.attempted(), 1);
        assert_eq!(report.removed(), 1);
        assert!(report.failures().is_empty());
        assert!(!raw.exists());
    }
}
