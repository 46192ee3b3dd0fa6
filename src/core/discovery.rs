//! Default discovery of scan roots and per-user known folders.
//!
//! Roots are the mounted data volumes, never the system volume. User
//! directories come from the shell's known folders on Windows and from
//! `dirs` elsewhere.

use crate::core::classifier::UserDirectories;
use crate::error::SweepError;
use crate::utils::filesystem::{lexical_clean, to_slash, with_trailing_slash};
use crate::{log_debug, log_warn};
#[cfg(unix)]
use glob::glob; // Enumerates volume mount points such as `/Volumes/*`.
#[cfg(unix)]
use std::collections::BTreeSet;
use std::env;
#[cfg(unix)]
use std::fs;
#[cfg(unix)]
use std::io;
use std::path::{Path, PathBuf};

/// Mount point globs scanned on Unix-like systems.
#[cfg(target_os = "macos")]
const VOLUME_GLOBS: &[&str] = &["/Volumes/*"];
#[cfg(all(unix, not(target_os = "macos")))]
const VOLUME_GLOBS: &[&str] = &["/media/*/*", "/run/media/*/*", "/mnt/*"];

/// Returns the data volumes to scan, sorted and normalized (`/` separators, trailing `/`).
///
/// # Errors
/// `SweepError::Discovery` when the volume list cannot be enumerated.
pub fn discover_roots() -> Result<Vec<String>, SweepError> {
    let roots = platform_roots()?;
    if roots.is_empty() {
        log_warn!("No data volumes found. Pass a path to scan a specific folder.");
    }
    for root in &roots {
        log_debug!("Discovered root: {}", root);
    }
    Ok(roots)
}

/// Drive letters, skipping the system drive.
#[cfg(windows)]
fn platform_roots() -> Result<Vec<String>, SweepError> {
    let system = env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
    let system_letter = system.chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('C');

    let roots = (b'A'..=b'Z')
        .map(char::from)
        .filter(|letter| *letter != system_letter)
        .map(|letter| format!("{}:/", letter))
        .filter(|root| Path::new(root).is_dir())
        .collect();
    Ok(roots)
}

/// Mounted volumes, skipping symlinks (macOS links the boot volume into `/Volumes`).
#[cfg(unix)]
fn platform_roots() -> Result<Vec<String>, SweepError> {
    let mut roots = BTreeSet::new();
    for pattern in VOLUME_GLOBS {
        let entries = glob(pattern).map_err(|e| SweepError::Discovery {
            what: format!("volumes matching {}", pattern),
            source: io::Error::new(io::ErrorKind::InvalidInput, e),
        })?;
        // Unreadable mount points are not volumes we could clean anyway.
        for path in entries.flatten() {
            let is_link = fs::symlink_metadata(&path).map(|m| m.file_type().is_symlink()).unwrap_or(true);
            if !is_link && path.is_dir() {
                roots.insert(with_trailing_slash(to_slash(&path)));
            }
        }
    }
    Ok(roots.into_iter().collect())
}

/// Resolves the known folders that exist as directories.
///
/// A folder that is not present is simply left out. An empty result is
/// logged, not fatal: it only disables the `Desktop.ini` exclusion.
///
/// # Errors
/// `SweepError::Discovery` when the platform lookup itself fails.
pub fn discover_user_directories() -> Result<UserDirectories, SweepError> {
    let resolved: Vec<String> = platform_user_directories()?
        .into_iter()
        .filter(|dir| dir.is_dir())
        .map(|dir| with_trailing_slash(to_slash(&dir)))
        .collect();

    if resolved.is_empty() {
        log_warn!("No user known folders could be resolved; Desktop.ini files will not be exempted.");
    }
    log_debug!("Resolved {} user directories", resolved.len());
    Ok(UserDirectories::from_paths(resolved))
}

#[cfg(windows)]
fn platform_user_directories() -> Result<Vec<PathBuf>, SweepError> {
    crate::core::known_folders::resolve()
}

/// `dirs` reports an unresolvable folder as `None`, never as an error.
#[cfg(not(windows))]
fn platform_user_directories() -> Result<Vec<PathBuf>, SweepError> {
    let candidates: Vec<Option<PathBuf>> = vec![
        dirs::home_dir(),
        dirs::desktop_dir(),
        dirs::document_dir(),
        dirs::download_dir(),
        dirs::picture_dir(),
        dirs::audio_dir(),
        dirs::video_dir(),
        dirs::public_dir(),
        dirs::template_dir(),
        dirs::font_dir(),
        dirs::config_dir(),
        dirs::data_dir(),
        dirs::data_local_dir(),
        dirs::cache_dir(),
    ];
    Ok(candidates.into_iter().flatten().collect())
}

/// Normalizes an explicit path argument into a root.
///
/// Relative paths are resolved against the current directory, `.`/`..` are
/// cleaned lexically, separators become `/`, and a trailing `/` is appended
/// only when missing.
///
/// # Errors
/// `SweepError::Discovery` if the current directory cannot be determined.
pub fn normalize_override_path(raw: &str) -> Result<String, SweepError> {
    let path = Path::new(raw);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|source| SweepError::Discovery {
            what: "the current directory".to_string(),
            source,
        })?;
        cwd.join(path)
    };
    Ok(with_trailing_slash(to_slash(&lexical_clean(&absolute))))
}
