//! The app-level command surface: config loading and initialization.

use blobworld_lib::app::App;
use std::io::Write;

#[test]
fn test_config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [world]
        width = 32
        height = 24

        [reproduction]
        mating_radius = 4.0
        "#
    )
    .unwrap();

    let config = App::load_config(file.path()).unwrap();
    assert_eq!(config.world.width, 32);
    assert_eq!(config.world.height, 24);
    assert_eq!(config.reproduction.mating_radius, 4.0);

    let app = App::initialize(7, config).unwrap();
    assert_eq!(app.world.width, 32);
    assert_eq!(app.world.height, 24);
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    let config = App::load_config(&path).unwrap();
    assert_eq!(config.world.width, 60);
}

#[test]
fn test_invalid_config_file_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[world]\nwidth = 0").unwrap();
    assert!(App::load_config(file.path()).is_err());
}
