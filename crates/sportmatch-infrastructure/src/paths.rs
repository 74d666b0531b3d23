//! Unified path management for SportMatch data files.
//!
//! All persisted state lives under a single per-user directory resolved via
//! the platform config directory. This keeps the layout consistent across
//! Linux, macOS, and Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for SportMatch.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/sportmatch/        # Config directory (platform dependent)
/// ├── events.toml              # Event store
/// └── profile_image.json       # Avatar slot (data: URL)
/// ```
pub struct SportMatchPaths;

impl SportMatchPaths {
    /// Returns the SportMatch configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/sportmatch/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("sportmatch"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the event store file.
    pub fn events_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("events.toml"))
    }

    /// Returns the path to the avatar slot file.
    pub fn profile_image_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("profile_image.json"))
    }
}
