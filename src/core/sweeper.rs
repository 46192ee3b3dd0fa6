use crate::cli::prompt::confirm;
use crate::config::Config;
use crate::core::classifier::{classify, MatchResult, UserDirectories};
use crate::core::deleter::{delete_matches, DeletionReport};
use crate::core::discovery::{discover_roots, discover_user_directories, normalize_override_path};
use crate::core::matcher::RootMatchers;
use crate::core::walker::walk_root;
use crate::error::SweepError;
use crate::{log_debug, log_error, log_info};
use colored::Colorize;
use rayon::prelude::*; // Each root is compiled, walked and classified on its own worker.
use std::io::{self, BufRead, Write};
use tabled::{settings::Style, Table};

/// How a sweep ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Nothing matched; no question was asked.
    NothingFound,
    /// The user did not answer `y`; nothing was touched.
    Declined { matched: usize },
    /// Deletion ran.
    Deleted(DeletionReport),
}

/// Matches of a single root plus the number of entries its walk skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootScan {
    pub matches: MatchResult,
    pub skipped: usize,
}

/// Compiles, walks and classifies one root.
///
/// # Errors
/// `SweepError::Pattern` (fatal) or `SweepError::Walk` (this root only).
pub fn scan_root(root: &str, user_dirs: &UserDirectories) -> Result<RootScan, SweepError> {
    log_debug!("Scanning root {}", root);
    let matchers = RootMatchers::compile(root)?;
    let tree = walk_root(root)?;
    let matches = classify(&matchers, &tree, user_dirs);
    Ok(RootScan { matches, skipped: tree.skipped })
}

/// Scans every root in parallel and merges the matches in root order.
///
/// A root whose walk hits a hard I/O error is reported and left out; the
/// others still contribute. The merged result is deduplicated, and matched
/// directories nested in another matched directory are folded into it.
///
/// # Errors
/// Only fatal errors (a catalog pattern that does not compile) are returned.
pub fn scan_roots(roots: &[String], user_dirs: &UserDirectories, config: &Config) -> Result<MatchResult, SweepError> {
    // `collect` on an indexed parallel iterator keeps the input order, so the merge below is in discovery order.
    let scans: Vec<Result<RootScan, SweepError>> = roots.par_iter().map(|root| scan_root(root, user_dirs)).collect();

    let mut all = MatchResult::default();
    for (root, scan) in roots.iter().zip(scans) {
        match scan {
            Ok(scan) => {
                if config.show_skipped && scan.skipped > 0 {
                    log_info!("Skipped {} unreadable entries under {}", scan.skipped, root.bright_white());
                }
                all.merge(scan.matches);
            }
            Err(e) if e.is_root_local() => log_error!("{}", e),
            Err(e) => return Err(e),
        }
    }
    all.dedup();
    all.drop_nested_directories();
    Ok(all)
}

/// Writes the two listings shown before the confirmation prompt.
pub fn print_matches<W: Write>(matches: &MatchResult, output: &mut W) -> io::Result<()> {
    writeln!(output, "Matched files:")?;
    for file in &matches.matched_files {
        writeln!(output, "- {}", file)?;
    }
    writeln!(output, "Matched directories:")?;
    for dir in &matches.matched_directories {
        writeln!(output, "- {}", dir)?;
    }
    Ok(())
}

/// Prints the removal count and, if any, the table of failed deletions.
pub fn print_summary(report: &DeletionReport) {
    let failures = report.failures();
    if !failures.is_empty() {
        let table = Table::new(&failures).with(Style::modern()).to_string();
        println!("\n{}", "⚠️ Deletion Failures".bold().underline().yellow());
        println!("{}", table);
    }
    log_info!(
        "Removed {} of {} matched entries.",
        report.removed().to_string().bright_green().bold(),
        report.attempted()
    );
}

/// Runs a sweep over explicit roots: scan, list, ask, delete.
///
/// # Arguments
/// * `roots` - Normalized roots to scan, in the order results should be listed.
/// * `user_dirs` - Known folders for the `Desktop.ini` exclusion.
/// * `config` - Runtime settings.
/// * `input` / `output` - Where the answer is read from and the listing is written to.
pub fn sweep<R: BufRead, W: Write>(
    roots: &[String],
    user_dirs: &UserDirectories,
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> Result<SweepOutcome, SweepError> {
    let matches = scan_roots(roots, user_dirs, config)?;

    print_matches(&matches, output).map_err(SweepError::Console)?;
    if matches.is_empty() {
        log_info!("No junk found.");
        return Ok(SweepOutcome::NothingFound);
    }

    let accepted = confirm(input, output, "Do you want to delete these files and directories?")
        .map_err(SweepError::Console)?;
    if !accepted {
        log_debug!("Deletion declined; {} entries left in place.", matches.len());
        return Ok(SweepOutcome::Declined { matched: matches.len() });
    }

    let report = delete_matches(&matches, config.show_details);
    print_summary(&report);
    Ok(SweepOutcome::Deleted(report))
}

/// Full run: resolve roots and user folders, then [`sweep`] on stdin/stdout.
///
/// # Errors
/// Fatal errors only: discovery failures, catalog defects, console I/O.
pub fn run(config: &Config) -> Result<SweepOutcome, SweepError> {
    let roots = match &config.path {
        Some(path) => vec![normalize_override_path(path)?],
        None => discover_roots()?,
    };
    let user_dirs = discover_user_directories()?;
    log_debug!("Scanning {} root(s) with {} user directories", roots.len(), user_dirs.len());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    sweep(&roots, &user_dirs, config, &mut input, &mut output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::filesystem::{to_slash, with_trailing_slash};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn root_of(dir: &tempfile::TempDir) -> String {
        with_trailing_slash(to_slash(dir.path()))
    }

    fn populate(root: &str) {
        fs::create_dir_all(format!("{}$RECYCLE.BIN/S-1-5", root)).unwrap();
        fs::write(format!("{}$RECYCLE.BIN/S-1-5/old.doc", root), "x").unwrap();
        fs::create_dir_all(format!("{}photos", root)).unwrap();
        fs::write(format!("{}photos/Thumbs.db", root), "x").unwrap();
        fs::write(format!("{}photos/cat.jpg", root), "x").unwrap();
    }

    #[test]
    fn declining_leaves_the_tree_untouched() {
        let dir = tempdir().unwrap();
        let root = root_of(&dir);
        populate(&root);

        for answer in ["n\n", "\n", ""] {
            let mut output = Vec::new();
            let outcome = sweep(
                &[root.clone()],
                &UserDirectories::default(),
                &Config::default(),
                &mut answer.as_bytes(),
                &mut output,
            )
            .unwrap();
            assert_eq!(outcome, SweepOutcome::Declined { matched: 2 });
        }
        assert!(Path::new(&format!("{}photos/Thumbs.db", root)).exists());
        assert!(Path::new(&format!("{}$RECYCLE.BIN/S-1-5/old.doc", root)).exists());
    }

    #[test]
    fn accepting_deletes_every_match() {
        let dir = tempdir().unwrap();
        let root = root_of(&dir);
        populate(&root);

        let mut output = Vec::new();
        let outcome = sweep(
            &[root.clone()],
            &UserDirectories::default(),
            &Config::default(),
            &mut "y\n".as_bytes(),
            &mut output,
        )
        .unwrap();

        match outcome {
            SweepOutcome::Deleted(report) => {
                assert_eq!(report.attempted(), 2);
                assert_eq!(report.removed(), 2);
            }
            other => panic!("expected deletion, got {:?}", other),
        }
        assert!(!Path::new(&format!("{}photos/Thumbs.db", root)).exists());
        assert!(!Path::new(&format!("{}$RECYCLE.BIN/", root)).exists());
        assert!(Path::new(&format!("{}photos/cat.jpg", root)).exists());

        let listing = String::from_utf8(output).unwrap();
        assert!(listing.contains(&format!("Matched files:\n- {}photos/Thumbs.db\n", root)));
        assert!(listing.contains(&format!("Matched directories:\n- {}$RECYCLE.BIN/\n", root)));
    }

    #[test]
    fn broken_root_does_not_hide_other_roots() {
        let good = tempdir().unwrap();
        let good_root = root_of(&good);
        populate(&good_root);
        let missing_root = format!("{}missing/", good_root);

        let matches = scan_roots(
            &[missing_root, good_root.clone()],
            &UserDirectories::default(),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(matches.matched_files, vec![format!("{}photos/Thumbs.db", good_root)]);
        assert_eq!(matches.matched_directories, vec![format!("{}$RECYCLE.BIN/", good_root)]);
    }

    #[test]
    fn results_follow_root_order() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let (a, b) = (root_of(&first), root_of(&second));
        fs::write(format!("{}Thumbs.db", a), "x").unwrap();
        fs::write(format!("{}Thumbs.db", b), "x").unwrap();

        let matches = scan_roots(&[b.clone(), a.clone()], &UserDirectories::default(), &Config::default()).unwrap();
        assert_eq!(matches.matched_files, vec![format!("{}Thumbs.db", b), format!("{}Thumbs.db", a)]);
    }

    #[test]
    fn empty_tree_asks_nothing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("keep.txt"), "x").unwrap();

        let mut output = Vec::new();
        let outcome = sweep(
            &[root_of(&dir)],
            &UserDirectories::default(),
            &Config::default(),
            &mut "y\n".as_bytes(),
            &mut output,
        )
        .unwrap();
        assert_eq!(outcome, SweepOutcome::NothingFound);
        assert_eq!(String::from_utf8(output).unwrap(), "Matched files:\nMatched directories:\n");
    }

    #[test]
    fn nested_matches_are_listed_and_deleted_once() {
        let dir = tempdir().unwrap();
        let root = root_of(&dir);
        fs::create_dir_all(format!("{}.Trashes/501/.AppleDouble", root)).unwrap();
        fs::write(format!("{}.Trashes/501/.AppleDouble/x", root), "x").unwrap();

        let mut output = Vec::new();
        let outcome = sweep(
            &[root.clone()],
            &UserDirectories::default(),
            &Config::default(),
            &mut "y\n".as_bytes(),
            &mut output,
        )
        .unwrap();

        match outcome {
            SweepOutcome::Deleted(report) => {
                assert_eq!(report.attempted(), 1);
                assert!(report.failures().is_empty());
            }
            other => panic!("expected deletion, got {:?}", other),
        }
        let listing = String::from_utf8(output).unwrap();
        assert!(!listing.contains(".AppleDouble"));
        assert!(!Path::new(&format!("{}.Trashes", root)).exists());
    }

    #[cfg(unix)]
    #[test]
    fn junk_with_a_non_utf8_name_is_deleted() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let raw = dir.path().join(OsStr::from_bytes(b"caf\xe9.tmp"));
        if fs::write(&raw, "x").is_err() {
            return;
        }

        let mut output = Vec::new();
        let outcome = sweep(
            &[root_of(&dir)],
            &UserDirectories::default(),
            &Config::default(),
            &mut "y\n".as_bytes(),
            &mut output,
        )
        .unwrap();

        match outcome {
            SweepOutcome::Deleted(report) => {
                assert_eq!(report.attempted(), 1);
                assert_eq!(report.removed(), 1);
            }
            other => panic!("expected deletion, got {:?}", other),
        }
        assert!(!raw.exists());
    }
}
