//! Device browsing core shared by the `devref` CLI and TUI.
//!
//! - **[`projector`]** turns a [`DeviceRecord`] into ordered, typed
//!   [`PropertyRow`]s and localizes category and device names.
//! - **[`LocalizationCatalog`]** holds the UI labels and device-name
//!   translations for both [`Locale`]s, built in and overridable from TOML
//!   bundles.
//! - **[`BrowserState`]** is the session: categories, the loaded device
//!   list, selections, and the active locale.
//! - **[`DeviceService`]** fetches through `devref-api` and converts wire
//!   responses into domain records.

pub mod browser;
pub mod config;
pub mod convert;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod model;
pub mod projector;
pub mod service;

// ── Primary re-exports ──────────────────────────────────────────────
pub use browser::{BrowserState, FetchKind};
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ServiceConfig, TlsVerification};
pub use error::CoreError;
pub use i18n::{Label, LocalizationCatalog};
pub use locale::Locale;
pub use model::{DeviceCategory, DeviceRecord, ExtensionValue, PropertyRow, PropertyValue};
pub use service::DeviceService;
