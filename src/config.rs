use std::env;

/// Environment variable that logs every successful removal.
pub const SHOW_DETAILS_ENV: &str = "JUNKSWEEP_SHOW_DETAILS";
/// Environment variable that reports skipped (unreadable / not ready) entries per root.
pub const SHOW_SKIPPED_ENV: &str = "JUNKSWEEP_SHOW_SKIPPED";

/// Runtime settings, assembled once from the command line and the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Scan only this folder instead of every data volume.
    pub path: Option<String>,
    /// Print debug-level log lines.
    pub debug: bool,
    /// Log each successful removal.
    pub show_details: bool,
    /// Report how many entries were skipped while walking each root.
    pub show_skipped: bool,
}

impl Config {
    /// Builds the configuration, reading the `JUNKSWEEP_*` variables from the process environment.
    pub fn new(path: Option<String>, debug: bool) -> Self {
        Self::with_env(path, debug, |key| env::var(key).is_ok())
    }

    /// Same as [`Config::new`] with an injectable "is this variable set" lookup.
    pub fn with_env(path: Option<String>, debug: bool, is_set: impl Fn(&str) -> bool) -> Self {
        Config {
            path,
            debug,
            show_details: is_set(SHOW_DETAILS_ENV),
            show_skipped: debug || is_set(SHOW_SKIPPED_ENV),
        }
    }
}
