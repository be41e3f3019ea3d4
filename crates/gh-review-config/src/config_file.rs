use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".gh-review.toml";

/// Load config file content from CWD first, then home directory, then the
/// app config directory
///
/// Searches for:
/// 1. `.gh-review.toml` in the current working directory
/// 2. `~/.gh-review.toml`
/// 3. `config.toml` in the app config directory (see [`crate::paths::app_config_path`])
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home_config) = get_home_config_path() {
        paths.push(home_config);
    }
    if let Ok(app_config) = crate::paths::app_config_path() {
        paths.push(app_config);
    }
    paths
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.gh-review.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
