//! `junksweep` finds operating-system and application junk (trash folders,
//! thumbnail caches, desktop metadata files, editor backups, ...) on every
//! mounted volume and deletes it after the user confirms.
//!
//! The crate is split the same way the binary runs:
//! * [`core`] holds the classification engine: the pattern catalog, the
//!   root-scoped matchers, the tree walker, the classifier and the deleter.
//! * [`cli`] defines the command line and the confirmation prompt.
//! * [`utils`] contains filesystem helpers shared by the engine.
//! * [`config`] and [`error`] carry runtime settings and the crate error type.
//! * [`logger`] provides the `log_*!` macros used everywhere.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logger;
pub mod utils;
