//! Shared integration test helpers for profile-toggle.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{config_file_in_tmp_dir, toggled};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use profile_toggle::config::Config;
use profile_toggle::ui::ProfileToggle;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `yaml` to `<tmp>/profile-toggle/config.yaml` and returns its path.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn config_file_in_tmp_dir(yaml: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join("profile-toggle");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    let path = config_dir.join("config.yaml");
    fs::write(&path, yaml).expect("Failed to write config");
    (temp_dir, path)
}

/// Default config saved into a fresh temp dir.
pub fn saved_default_config() -> (Config, TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    let config = Config::default();
    config.save_to(&path).expect("Failed to save config");
    (config, temp_dir, path)
}

/// A fresh component after `n` toggle activations.
pub fn toggled(n: usize) -> ProfileToggle {
    let mut component = ProfileToggle::new();
    for _ in 0..n {
        component.toggle_visibility();
    }
    component
}
