// Centralized error type for the sweep.
// Every fatal or per-root failure is funneled through `SweepError`.

use crate::core::walker::WalkErrorKind;
use std::fmt;
use std::io;

/// Errors surfaced by discovery, matcher compilation, tree walking and the prompt.
///
/// Whether an error is fatal depends on where it is raised: `Walk` only aborts
/// the root it belongs to, everything else stops the whole run.
#[derive(Debug)]
pub enum SweepError {
    /// Volumes or known folders could not be resolved at startup.
    Discovery { what: String, source: io::Error },
    /// A catalog pattern failed to compile. Indicates a defect in the catalog.
    Pattern { pattern: String, source: glob::PatternError },
    /// A non-skippable I/O error while walking one root.
    Walk { root: String, kind: WalkErrorKind, source: walkdir::Error },
    /// Writing the listing or reading the confirmation answer failed.
    Console(io::Error),
}

impl SweepError {
    /// Returns `true` if the run can continue with the next root.
    pub fn is_root_local(&self) -> bool {
        matches!(self, SweepError::Walk { .. })
    }
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Discovery { what, source } => {
                write!(f, "failed to discover {}: {}", what, source)
            }
            SweepError::Pattern { pattern, source } => {
                write!(f, "invalid junk pattern '{}': {}", pattern, source)
            }
            SweepError::Walk { root, kind, source } => {
                write!(f, "walking '{}' aborted ({:?}): {}", root, kind, source)
            }
            SweepError::Console(source) => write!(f, "console I/O failed: {}", source),
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Discovery { source, .. } => Some(source),
            SweepError::Pattern { source, .. } => Some(source),
            SweepError::Walk { source, .. } => Some(source),
            SweepError::Console(source) => Some(source),
        }
    }
}
