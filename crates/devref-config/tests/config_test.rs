#![allow(clippy::unwrap_used)]
// Loading configuration and translation bundles from files on disk.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use devref_config::{Config, ConfigError, load_config_from};
use devref_core::{Locale, TlsVerification};

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "config.toml",
        r#"
            [service]
            base_url = "https://devices.example.test/api"
            timeout = 5

            [ui]
            language = "ru"
        "#,
    );

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.ui.language, Locale::Ru);

    let service = config.service_config().unwrap();
    assert_eq!(service.base_url.as_str(), "https://devices.example.test/api");
    assert_eq!(service.timeout, Duration::from_secs(5));
    assert_eq!(service.tls, TlsVerification::SystemDefaults);
}

#[test]
fn test_unknown_language_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "config.toml", "[ui]\nlanguage = \"de\"\n");
    assert!(matches!(load_config_from(&path), Err(ConfigError::Figment(_))));
}

#[test]
fn test_translation_files_feed_the_catalog() {
    let dir = TempDir::new().unwrap();
    let bundle = write(&dir, "ru.toml", "[ru]\nPump01 = \"Насос\"\n");
    let path = write(
        &dir,
        "config.toml",
        &format!("[translations]\nfiles = [{:?}]\n", bundle.display().to_string()),
    );

    let catalog = load_config_from(&path).unwrap().catalog().unwrap();
    assert_eq!(catalog.translate("Pump01", Locale::Ru), Some("Насос"));
    assert_eq!(
        catalog.translate("TempSensor01", Locale::Ru),
        Some("Датчик температуры")
    );
}

#[test]
fn test_broken_translation_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.translations.files = vec![write(&dir, "bad.toml", "[ru\n")];

    assert!(matches!(config.catalog(), Err(ConfigError::Translations(_))));
}
