//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use dragme::config::AppConfig;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;

/// Scratch config directory unique to one test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dragme-config-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("DRAGME_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("DRAGME_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_default_file_matches_defaults() {
    std::env::remove_var("DRAGME_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load_from(cwd.join("config")).unwrap();
    let defaults = AppConfig::default();
    assert_eq!(config.window.title, defaults.window.title);
    assert_eq!(config.window.width, defaults.window.width);
    assert_eq!(config.physics.gravity, defaults.physics.gravity);
    assert_eq!(config.physics.solver_iterations, 12);
    assert_eq!(config.physics.tick_interval_ms, 16);
    assert_eq!(config.scene.pixels_per_meter, 30.0);
    assert_eq!(config.scene.boundary_restitution, 0.5);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_dir("user");
    fs::write(dir.join("default.toml"), "[scene]\npixels_per_meter = 30.0\n").unwrap();
    fs::write(dir.join("user.toml"), "[scene]\npixels_per_meter = 45.0\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.scene.pixels_per_meter, 45.0);
    // Untouched sections keep their defaults
    assert_eq!(config.window.width, 800);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_nested_env_override_of_numbers() {
    let dir = scratch_dir("env-number");
    std::env::set_var("DRAGME_PHYSICS__TICK_INTERVAL_MS", "8");
    let config = AppConfig::load_from(&dir).unwrap();
    std::env::remove_var("DRAGME_PHYSICS__TICK_INTERVAL_MS");

    assert_eq!(config.physics.tick_interval_ms, 8);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    let dir = scratch_dir("invalid");
    fs::write(dir.join("user.toml"), "[scene]\npixels_per_meter = 0.0\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().contains("pixels_per_meter"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_walls_inside_the_window_are_rejected() {
    let dir = scratch_dir("offset");
    fs::write(dir.join("user.toml"), "[scene]\nboundary_offset = 0.9\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().contains("boundary_offset"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_malformed_file_is_an_error() {
    let dir = scratch_dir("malformed");
    fs::write(dir.join("default.toml"), "[window]\nwidth = \"wide\"\n").unwrap();

    assert!(AppConfig::load_from(&dir).is_err());

    let _ = fs::remove_dir_all(&dir);
}
