//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text. Fetch failures carry the localized prefix the
//! session would show (`Error loading data: ...`).

use miette::Diagnostic;
use thiserror::Error;

use devref_config::ConfigError;
use devref_core::{BrowserState, CoreError, FetchKind};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("{prefix}: cannot reach the device service at {url}")]
    #[diagnostic(
        code(devref::service_unavailable),
        help(
            "Check the service URL and your network connection.\n\
             Reason: {reason}\n\
             Override the URL with --base-url, or use --insecure for self-signed certificates."
        )
    )]
    ServiceUnavailable {
        prefix: String,
        url: String,
        reason: String,
    },

    #[error("{prefix}: request timed out after {seconds}s")]
    #[diagnostic(
        code(devref::timeout),
        help("Increase the timeout with --timeout or check service responsiveness.")
    )]
    Timeout { prefix: String, seconds: u64 },

    // ── Service ──────────────────────────────────────────────────────
    #[error("{prefix}: {message}")]
    #[diagnostic(code(devref::api_error))]
    Api {
        prefix: String,
        message: String,
        status: Option<u16>,
    },

    #[error("{prefix}: {message}")]
    #[diagnostic(
        code(devref::invalid_response),
        help("The service answered with data that is not a device list. Run with -vv for details.")
    )]
    InvalidResponse { prefix: String, message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(devref::not_found),
        help("Run: devref {list_command} to see what is available")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation / configuration ───────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(devref::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(
        code(devref::config),
        help("Inspect the effective configuration with: devref config show")
    )]
    Config(#[from] ConfigError),

    #[error("Cannot load translations from {source_name}: {message}")]
    #[diagnostic(
        code(devref::translations),
        help("Translation bundles are TOML files with one table per language, e.g. [ru].")
    )]
    Translations {
        source_name: String,
        message: String,
    },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error("Cannot render JSON: {0}")]
    #[diagnostic(code(devref::json))]
    Json(#[from] serde_json::Error),

    #[error("Cannot render YAML: {0}")]
    #[diagnostic(code(devref::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ServiceUnavailable { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. }
            | Self::Api {
                status: Some(404), ..
            } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Config(_) | Self::Translations { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }

    /// Convert a core error raised while fetching `kind`, prefixing fetch
    /// failures with the localized message the session uses.
    pub fn from_fetch(err: CoreError, state: &BrowserState, kind: FetchKind) -> Self {
        let prefix = state.label(kind.error_label()).to_owned();
        match err {
            CoreError::ServiceUnavailable { url, reason } => Self::ServiceUnavailable {
                prefix,
                url,
                reason,
            },
            CoreError::Timeout { timeout_secs } => Self::Timeout {
                prefix,
                seconds: timeout_secs,
            },
            CoreError::Api { message, status } => Self::Api {
                prefix,
                message,
                status,
            },
            CoreError::InvalidResponse { message } => Self::InvalidResponse { prefix, message },
            other => Self::from(other),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ServiceUnavailable { url, reason } => Self::ServiceUnavailable {
                prefix: "Error".into(),
                url,
                reason,
            },
            CoreError::Timeout { timeout_secs } => Self::Timeout {
                prefix: "Error".into(),
                seconds: timeout_secs,
            },
            CoreError::Api { message, status } => Self::Api {
                prefix: "Error".into(),
                message,
                status,
            },
            CoreError::InvalidResponse { message } => Self::InvalidResponse {
                prefix: "Error".into(),
                message,
            },
            CoreError::CategoryNotFound { key } => Self::NotFound {
                resource_type: "device type".into(),
                identifier: key,
                list_command: "categories".into(),
            },
            CoreError::DeviceNotFound { category, id } => Self::NotFound {
                resource_type: "device".into(),
                identifier: id.to_string(),
                list_command: format!("devices {category}"),
            },
            CoreError::NoCategorySelected => Self::Validation {
                field: "category".into(),
                reason: "a device type is required".into(),
            },
            CoreError::NoDeviceSelected => Self::Validation {
                field: "id".into(),
                reason: "a device ID is required".into(),
            },
            CoreError::Catalog {
                source_name,
                message,
            } => Self::Translations {
                source_name,
                message,
            },
            CoreError::Config { message } => Self::Validation {
                field: "configuration".into(),
                reason: message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use devref_core::{Locale, LocalizationCatalog};

    use super::*;

    #[test]
    fn fetch_errors_carry_localized_prefix() {
        let state = BrowserState::new(LocalizationCatalog::builtin(), Locale::Ru);
        let err = CliError::from_fetch(
            CoreError::Api {
                message: "HTTP 500".into(),
                status: Some(500),
            },
            &state,
            FetchKind::Devices,
        );
        assert_eq!(err.to_string(), "Ошибка загрузки данных: HTTP 500");
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn exit_codes_follow_error_kind() {
        let not_found = CliError::from(CoreError::DeviceNotFound {
            category: "sensors".into(),
            id: 4,
        });
        assert_eq!(not_found.exit_code(), exit_code::NOT_FOUND);

        let missing = CliError::Api {
            prefix: String::new(),
            message: String::new(),
            status: Some(404),
        };
        assert_eq!(missing.exit_code(), exit_code::NOT_FOUND);

        let timeout = CliError::from(CoreError::Timeout { timeout_secs: 3 });
        assert_eq!(timeout.exit_code(), exit_code::TIMEOUT);
    }
}
