//! Shared configuration for the devref CLI and TUI.
//!
//! TOML file + `DEVREF_*` environment layering, and translation to
//! `devref_core::ServiceConfig` and `LocalizationCatalog`. Both binaries
//! depend on this crate; the CLI applies its flag overrides on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use devref_core::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, Locale, LocalizationCatalog, ServiceConfig,
    TlsVerification,
};

/// Prefix of environment overrides. `__` separates nested keys, so
/// `DEVREF_SERVICE__TIMEOUT=5` sets `service.timeout`.
pub const ENV_PREFIX: &str = "DEVREF_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("translations: {0}")]
    Translations(#[from] devref_core::CoreError),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceSection,

    #[serde(default)]
    pub ui: UiSection,

    #[serde(default)]
    pub translations: TranslationsSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceSection {
    /// Root URL of the device service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Accept any TLS certificate.
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate (PEM).
    pub ca_cert: Option<PathBuf>,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            insecure: false,
            ca_cert: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSection {
    /// Language at start-up.
    #[serde(default)]
    pub language: Locale,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslationsSection {
    /// TOML bundles merged over the built-in translations, in order.
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "devref", "devref").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("devref");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Defaults, then the TOML file at `path` (if it exists), then environment.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load the full Config from `path` + environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = figment(path).extract()?;
    Ok(config)
}

// ── Translation to runtime types ────────────────────────────────────

impl Config {
    /// Build the runtime service configuration.
    ///
    /// `insecure` wins over `ca_cert`.
    pub fn service_config(&self) -> Result<ServiceConfig, ConfigError> {
        let base_url: url::Url =
            self.service
                .base_url
                .parse()
                .map_err(|e| ConfigError::Validation {
                    field: "service.base_url".into(),
                    reason: format!("invalid URL '{}': {e}", self.service.base_url),
                })?;

        if self.service.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "service.timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        let tls = if self.service.insecure {
            TlsVerification::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.service.ca_cert {
            TlsVerification::CustomCa(ca_path.clone())
        } else {
            TlsVerification::SystemDefaults
        };

        Ok(ServiceConfig {
            base_url,
            tls,
            timeout: Duration::from_secs(self.service.timeout),
        })
    }

    /// Built-in translations with every configured bundle merged over them.
    pub fn catalog(&self) -> Result<LocalizationCatalog, ConfigError> {
        Ok(LocalizationCatalog::with_overrides(&self.translations.files)?)
    }

    /// Render as TOML, as `config show` prints it.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_point_at_public_service() {
        let config = Config::default();
        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.service.timeout, 30);
        assert_eq!(config.ui.language, Locale::En);
        assert!(config.translations.files.is_empty());

        let service = config.service_config().unwrap();
        assert_eq!(service.tls, TlsVerification::SystemDefaults);
        assert_eq!(service.timeout, Duration::from_secs(30));
    }

    #[test]
    fn insecure_wins_over_ca_cert() {
        let mut config = Config::default();
        config.service.ca_cert = Some(PathBuf::from("/etc/devref/ca.pem"));
        assert_eq!(
            config.service_config().unwrap().tls,
            TlsVerification::CustomCa(PathBuf::from("/etc/devref/ca.pem"))
        );

        config.service.insecure = true;
        assert_eq!(
            config.service_config().unwrap().tls,
            TlsVerification::DangerAcceptInvalid
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut config = Config::default();
        config.service.base_url = "::nope".into();
        assert!(matches!(
            config.service_config(),
            Err(ConfigError::Validation { ref field, .. }) if field == "service.base_url"
        ));

        let mut config = Config::default();
        config.service.timeout = 0;
        assert!(config.service_config().is_err());
    }

    #[test]
    fn toml_round_trips_language() {
        let rendered = Config::default().to_toml().unwrap();
        assert!(rendered.contains("language = \"en\""), "{rendered}");
        assert!(rendered.contains("[service]"), "{rendered}");
    }
}
