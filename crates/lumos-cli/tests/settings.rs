use std::path::PathBuf;

use lumos_cli::config::{load_settings_from, save_settings_to, LumosSettings};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = load_settings_from(&dir.path().join("settings.json")).unwrap();
    assert_eq!(settings, LumosSettings::default());
    assert_eq!(settings.font_css_base, "https://fonts.googleapis.com/css");
    assert!(!settings.prefetch_fonts);
}

#[test]
fn save_then_load_keeps_values_and_stamps_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = LumosSettings {
        config_version: 0,
        output_dir: Some(PathBuf::from("/tmp/lumos-out")),
        font_css_base: "https://fonts.example/css".to_string(),
        prefetch_fonts: true,
    };

    save_settings_to(&path, &settings).unwrap();
    let loaded = load_settings_from(&path).unwrap();

    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.output_dir, settings.output_dir);
    assert_eq!(loaded.font_css_base, settings.font_css_base);
    assert!(loaded.prefetch_fonts);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn unversioned_files_are_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "prefetch_fonts": true }"#).unwrap();

    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert!(loaded.prefetch_fonts);
    assert_eq!(loaded.font_css_base, "https://fonts.googleapis.com/css");
}

#[test]
fn newer_versions_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "config_version": 7 }"#).unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn versions_beyond_u32_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "config_version": 4294967297 }"#).unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}
