//! Application configuration
//!
//! Configuration loaded from `.gh-review.toml`.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding [`BridgeConfig::socket_path`]
pub const SOCKET_ENV_VAR: &str = "GH_REVIEW_SOCKET";

/// Smallest allowed gap between the server's polling interval and ours
const MIN_POLL_GRACE_SECS: u64 = 1;

/// Application configuration loaded from .gh-review.toml
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// How to reach the host process
    #[serde(default)]
    pub bridge: BridgeConfig,

    /// Device flow tuning
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Host process connection settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Unix socket the host process listens on
    #[serde(default = "default_socket_path")]
    pub socket_path: PathBuf,
}

/// Device authorization grant settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Seconds added on top of the server's polling interval
    ///
    /// Values below 1 are raised to 1 so polls never hit the server's
    /// minimum interval exactly.
    #[serde(default = "default_poll_grace_secs")]
    pub poll_grace_secs: u64,
}

fn default_socket_path() -> PathBuf {
    crate::paths::default_socket_path()
}

fn default_poll_grace_secs() -> u64 {
    MIN_POLL_GRACE_SECS
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            poll_grace_secs: default_poll_grace_secs(),
        }
    }
}

impl AuthConfig {
    /// Grace period added to every device flow polling interval
    pub fn poll_grace(&self) -> Duration {
        Duration::from_secs(self.poll_grace_secs.max(MIN_POLL_GRACE_SECS))
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// `GH_REVIEW_SOCKET` overrides the socket path from any source.
    pub fn load() -> Self {
        let mut config = Self::from_file().unwrap_or_default();
        if let Some(socket) = env::var_os(SOCKET_ENV_VAR) {
            log::info!("Using host socket from {}", SOCKET_ENV_VAR);
            config.bridge.socket_path = PathBuf::from(socket);
        }
        config
    }

    fn from_file() -> Option<Self> {
        let content = crate::load_config_file()?;
        match toml::from_str(&content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    }
}
