// ── Core error types ──
//
// User-facing errors from devref-core. Consumers never match on reqwest or
// serde errors directly; the `From<devref_api::Error>` impl translates
// transport-layer failures into these variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach device service at {url}: {reason}")]
    ServiceUnavailable { url: String, reason: String },

    #[error("Device service timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Service errors ───────────────────────────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    #[error("Invalid response from device service: {message}")]
    InvalidResponse { message: String },

    // ── Selection errors ─────────────────────────────────────────────
    #[error("No device type selected")]
    NoCategorySelected,

    #[error("No device selected")]
    NoDeviceSelected,

    #[error("Device type not found: {key}")]
    CategoryNotFound { key: String },

    #[error("Device {id} not found in {category}")]
    DeviceNotFound { category: String, id: i64 },

    // ── Localization errors ──────────────────────────────────────────
    #[error("Cannot load translations from {source_name}: {message}")]
    Catalog {
        source_name: String,
        message: String,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<devref_api::Error> for CoreError {
    fn from(err: devref_api::Error) -> Self {
        match err {
            devref_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    Self::Timeout { timeout_secs: 0 }
                } else if e.is_connect() || e.is_request() {
                    Self::ServiceUnavailable {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    Self::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            devref_api::Error::InvalidBaseUrl(url) => Self::Config {
                message: format!("Base URL cannot be used for requests: {url}"),
            },
            devref_api::Error::Timeout { timeout_secs } => Self::Timeout { timeout_secs },
            devref_api::Error::Tls(msg) => Self::ServiceUnavailable {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            devref_api::Error::Http { status, message } => Self::Api {
                message: if message.is_empty() {
                    format!("HTTP {status}")
                } else {
                    format!("HTTP {status}: {message}")
                },
                status: Some(status),
            },
            devref_api::Error::Deserialization { message, body: _ } => {
                Self::InvalidResponse { message }
            }
        }
    }
}
