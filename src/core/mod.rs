//! The junk classification engine.
//!
//! Data flows leaf-first through the submodules: [`catalog`] patterns are
//! compiled per root by [`matcher`], [`walker`] lists the root's entries,
//! [`classifier`] partitions them, and [`deleter`] removes the survivors of
//! the confirmation step. [`sweeper`] wires them together, [`discovery`]
//! supplies the default roots and user folders.

pub mod catalog;
pub mod classifier;
pub mod deleter;
pub mod discovery;
#[cfg(windows)]
pub mod known_folders;
pub mod matcher;
pub mod sweeper;
pub mod walker;
