// ── Device category ──

use serde::{Deserialize, Serialize};

/// A kind of device the service can list, e.g. `sensors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCategory {
    /// Server `Name`. Identifies the category and forms its fetch path.
    pub key: String,
    /// Server `Description`, the secondary-language display text.
    pub description: Option<String>,
    /// Derived from `key` or `description` for the active locale.
    pub display_name: String,
}

impl DeviceCategory {
    /// A category whose display name is not yet localized.
    pub fn new(key: impl Into<String>, description: Option<String>) -> Self {
        let key = key.into();
        Self {
            display_name: key.clone(),
            key,
            description,
        }
    }

    /// Whether `key` names this category, ignoring case.
    pub fn matches(&self, key: &str) -> bool {
        self.key.to_lowercase() == key.to_lowercase()
    }
}
