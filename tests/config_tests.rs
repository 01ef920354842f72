mod common;

use common::{config_file_in_tmp_dir, saved_default_config};
use profile_toggle::config::{Config, ConfigError, LogLevel, ThemeMode};

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.window_title, "profile-toggle");
    assert_eq!(config.window_width, 480);
    assert_eq!(config.window_height, 640);
    assert_eq!(config.theme, ThemeMode::Dark);
    assert_eq!(config.log_level, LogLevel::Off);
    assert_eq!(config.image_fetch_timeout_secs, 10);
    assert_eq!(config.image_max_size_bytes, 4 * 1024 * 1024);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_mapping_loads_defaults() {
    let (_tmp, path) = config_file_in_tmp_dir("{}\n");
    let config = Config::load_from(&path).expect("Failed to load config");
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_yaml_round_trip_through_disk() {
    let yaml = "\
window_title: Checkpoint
window_width: 600
window_height: 700
theme: light
log_level: trace
image_fetch_timeout_secs: 3
image_max_size_bytes: 1024
";
    let (_tmp, path) = config_file_in_tmp_dir(yaml);
    let config = Config::load_from(&path).expect("Failed to load config");
    assert_eq!(config.window_title, "Checkpoint");
    assert_eq!(config.window_width, 600);
    assert_eq!(config.theme, ThemeMode::Light);
    assert_eq!(config.log_level, LogLevel::Trace);
    assert_eq!(config.image_fetch_timeout_secs, 3);
    assert_eq!(config.image_max_size_bytes, 1024);
}

#[test]
fn test_saved_defaults_reload_equal() {
    let (config, _tmp, path) = saved_default_config();
    let loaded = Config::load_from(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn test_zero_timeout_fails_validation_on_load() {
    let (_tmp, path) = config_file_in_tmp_dir("image_fetch_timeout_secs: 0\n");
    let err = Config::load_from(&path).expect_err("load should fail");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}

#[test]
fn test_unknown_theme_is_parse_error() {
    let (_tmp, path) = config_file_in_tmp_dir("theme: neon\n");
    let err = Config::load_from(&path).expect_err("load should fail");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}
