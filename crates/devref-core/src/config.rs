// ── Runtime service configuration ──
//
// Describes how to reach the device service. Never touches disk: the CLI
// and TUI build a `ServiceConfig` from `devref-config` and hand it in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use devref_api::{TlsMode, TransportConfig};

use crate::error::CoreError;

/// Service root used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://2392bb8b-2589-4515-a05d-bff3882c6c75.mock.pstmn.io";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification.
    DangerAcceptInvalid,
}

impl From<TlsVerification> for TlsMode {
    fn from(tls: TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => Self::System,
            TlsVerification::CustomCa(path) => Self::CustomCa(path),
            TlsVerification::DangerAcceptInvalid => Self::DangerAcceptInvalid,
        }
    }
}

/// Where the device service lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: Url,
    pub tls: TlsVerification,
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Config for `base_url` with default TLS and timeout.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Parse `base_url`, mapping failures to a config error.
    pub fn parse(base_url: &str) -> Result<Self, CoreError> {
        let url = Url::parse(base_url).map_err(|e| CoreError::Config {
            message: format!("invalid base URL '{base_url}': {e}"),
        })?;
        Ok(Self::new(url))
    }

    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: self.tls.clone().into(),
            timeout: self.timeout,
        }
    }
}
