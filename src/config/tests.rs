//! Configuration tests
//!
//! Precedence is checked through `Config::resolve` with a fake environment,
//! so none of these tests read or mutate the real process environment.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_when_nothing_configured() {
    let config = Config::resolve(FileConfig::default(), no_env);

    assert_eq!(config.properties_dir, PathBuf::from("./properties"));
    assert_eq!(config.themes_dir, PathBuf::from("./themes"));
    assert_eq!(config.readme_path, PathBuf::from("./README.md"));
    assert_eq!(config.theme_type, ThemeType::Dark);
    assert_eq!(config.swatch_url, DEFAULT_SWATCH_URL);
    assert_eq!(config.logging.level, "warn");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_derived_paths() {
    let config = Config::default();
    assert_eq!(
        config.template_path(),
        PathBuf::from("./properties/README.template.md")
    );
    assert_eq!(
        config.theme_path(),
        PathBuf::from("./themes/generated-color-theme.json")
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// File layer
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_file_values_override_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
properties_dir = "assets"
theme_file = "midnight-color-theme.json"
theme_name = "Midnight"
theme_type = "light"
swatch_url = "https://swatches.example/{hex}.png"

[logging]
level = "debug"
file = "logs/themegen.log"
rotation = "never"
"#,
    )
    .unwrap();

    let config = Config::resolve(file, no_env);
    assert_eq!(config.properties_dir, PathBuf::from("assets"));
    assert_eq!(config.theme_file, "midnight-color-theme.json");
    assert_eq!(config.theme_name, "Midnight");
    assert_eq!(config.theme_type, ThemeType::Light);
    assert_eq!(config.swatch_url, "https://swatches.example/{hex}.png");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, Some(PathBuf::from("logs/themegen.log")));
    assert_eq!(config.logging.rotation, LogRotation::Never);
    // Untouched keys keep their defaults
    assert_eq!(config.colors_manifest, "colors.json");
}

#[test]
fn test_env_beats_file() {
    let file: FileConfig = toml::from_str(
        r#"
properties_dir = "from-file"
theme_name = "File Name"
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("THEMEGEN_PROPERTIES_DIR", "/tmp/props"),
        ("THEMEGEN_THEME_NAME", "Env Name"),
        ("THEMEGEN_README", "docs/README.md"),
        ("THEMEGEN_LOG_FILE", "/tmp/themegen.log"),
    ]);
    let config = Config::resolve(file, env);

    assert_eq!(config.properties_dir, PathBuf::from("/tmp/props"));
    assert_eq!(config.theme_name, "Env Name");
    assert_eq!(config.readme_path, PathBuf::from("docs/README.md"));
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/themegen.log")));
}

#[test]
fn test_unknown_rotation_is_rejected() {
    let parsed = toml::from_str::<FileConfig>("[logging]\nrotation = \"weekly\"\n");
    let err = parsed.unwrap_err();
    assert!(err.to_string().contains("weekly"), "unexpected error: {}", err);
}

#[test]
fn test_rotation_defaults_to_daily() {
    let logging = LoggingConfig::resolve(
        Some(FileLogging {
            level: Some("info".to_string()),
            ..Default::default()
        }),
        no_env,
    );
    assert_eq!(logging.level, "info");
    assert_eq!(logging.rotation, LogRotation::Daily);
    assert!(logging.file.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading from disk
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_config_file_is_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = Config::load_file_config(&dir.path().join("themegen.toml")).unwrap();
    assert!(file.properties_dir.is_none());
    assert!(file.logging.is_none());
}

#[test]
fn test_broken_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("themegen.toml");
    std::fs::write(&path, "theme_name = \n").unwrap();

    let err = Config::load_file_config(&path).unwrap_err();
    assert!(
        format!("{:#}", err).contains("themegen.toml"),
        "error should name the file: {:#}",
        err
    );
}

#[test]
fn test_bad_rotation_in_config_file_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("themegen.toml");
    std::fs::write(&path, "[logging]\nrotation = \"fortnightly\"\n").unwrap();

    let err = Config::load_file_config(&path).unwrap_err();
    let shown = format!("{:#}", err);
    assert!(shown.contains("themegen.toml"), "{}", shown);
    assert!(shown.contains("fortnightly"), "{}", shown);
}

#[test]
fn test_rooted_at_redirects_everything() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::rooted_at(dir.path());
    assert!(config.template_path().starts_with(dir.path()));
    assert!(config.theme_path().starts_with(dir.path()));
    assert!(config.readme_path.starts_with(dir.path()));
}
