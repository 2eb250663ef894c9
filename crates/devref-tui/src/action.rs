//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::sync::Arc;

use devref_core::{CoreError, DeviceCategory, DeviceRecord};

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }
}

/// Outcome of a spawned fetch. The error is shared so actions stay `Clone`.
pub type FetchResult<T> = Result<T, Arc<CoreError>>;

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,

    // ── Overlays ──────────────────────────────────────────────────
    ToggleHelp,
    Notify(Notification),
    DismissNotification,

    // ── Fetch requests (handled by the app loop) ──────────────────
    FetchCategories,
    FetchDevices(String),

    // ── Fetch results (posted by spawned tasks) ───────────────────
    CategoriesLoaded(FetchResult<Vec<DeviceCategory>>),
    DevicesLoaded {
        category: String,
        result: FetchResult<Vec<DeviceRecord>>,
    },

    // ── Browsing ──────────────────────────────────────────────────
    SelectCategory(usize),
    RequestLoad,
    SelectDevice(Option<usize>),
    ScrollProperties(usize),
    ToggleLanguage,
}
