use crate::core::catalog::{self, JunkPattern};
use crate::error::SweepError;
use crate::log_debug;
use glob::{MatchOptions, Pattern}; // Compiled globs and the options they are tested with.

/// Options every root-scoped glob is tested with.
///
/// Paths and patterns are both lower-cased up front, so the comparison itself
/// is case-sensitive. `*` must not cross a `/`; `**` spans any depth.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// The whole catalog compiled against a single root.
///
/// Each glob is the lower-cased root (with glob metacharacters escaped)
/// followed by the lower-cased catalog pattern, so a matcher can only ever
/// accept paths that start with its own root.
pub struct RootMatchers {
    matchers: Vec<(JunkPattern, Pattern)>,
}

impl RootMatchers {
    /// Compiles every catalog pattern for `root`.
    ///
    /// # Arguments
    /// * `root` - Absolute, forward-slash, trailing-slash terminated root path.
    ///
    /// # Errors
    /// Returns `SweepError::Pattern` if a catalog entry does not compile. The
    /// catalog is fixed, so callers treat this as fatal.
    pub fn compile(root: &str) -> Result<Self, SweepError> {
        let anchor = Pattern::escape(&root.to_lowercase());
        let mut matchers = Vec::with_capacity(catalog::CATALOG.len());
        for pattern in catalog::patterns() {
            let expression = format!("{}{}", anchor, pattern.text().to_lowercase());
            let compiled = Pattern::new(&expression).map_err(|source| SweepError::Pattern {
                pattern: expression.clone(),
                source,
            })?;
            matchers.push((pattern, compiled));
        }
        log_debug!("Compiled {} matchers for {}", matchers.len(), root);
        Ok(RootMatchers { matchers })
    }

    /// Iterates over `(pattern, matcher)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (JunkPattern, &Pattern)> {
        self.matchers.iter().map(|(pattern, compiled)| (*pattern, compiled))
    }

    /// Tests an already lower-cased absolute path against one compiled matcher.
    pub fn matches(compiled: &Pattern, lowered_path: &str) -> bool {
        compiled.matches_with(lowered_path, MATCH_OPTIONS)
    }
}
