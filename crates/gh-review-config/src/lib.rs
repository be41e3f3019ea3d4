//! Configuration and file management for gh-review
//!
//! This crate provides:
//! - File path utilities for config, cache and socket files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, AuthConfig, BridgeConfig, SOCKET_ENV_VAR};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir, default_socket_path};
