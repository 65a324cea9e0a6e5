//! Settings persistence tests.

use visionboard::settings::Settings;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.media.jpeg_quality = 55;
    settings.persistence.export_prefix = "moodboard_".into();
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = Settings::load_or_default(&dir.path().join("absent.json"));
    assert_eq!(loaded, Settings::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ nope").unwrap();

    assert!(Settings::load_from(&path).is_err());
    assert_eq!(Settings::load_or_default(&path), Settings::default());
}

#[test]
fn test_out_of_range_values_are_sanitized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"media":{"jpeg_quality":0,"max_compressed_width":0}}"#).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.media.jpeg_quality, 1);
    assert_eq!(loaded.media.max_compressed_width, 1);
}
