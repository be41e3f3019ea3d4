//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-review/`, `~/.cache/gh-review/`
//! - macOS: `~/Library/Application Support/gh-review/`, `~/Library/Caches/gh-review/`
//! - Windows: `%APPDATA%\gh-review\`, `%LOCALAPPDATA%\gh-review\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gh-review";
const SOCKET_FILE: &str = "gh-review-host.sock";

/// Get the application config directory
/// Returns ~/.config/gh-review/ on Linux, ~/Library/Application Support/gh-review/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
/// Returns ~/.cache/gh-review/ on Linux, ~/Library/Caches/gh-review/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Default location of the host process socket
///
/// Prefers the per-user runtime dir (`$XDG_RUNTIME_DIR`) and falls back to
/// the system temp dir.
pub fn default_socket_path() -> PathBuf {
    dirs::runtime_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(SOCKET_FILE)
}
