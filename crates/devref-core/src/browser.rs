// ── Browsing session state ──
//
// The single writer behind the window: which categories exist, which one is
// selected, the devices of the last loaded category, and the active locale.
// Fetches happen elsewhere; their results are handed in here.

use tracing::debug;

use crate::error::CoreError;
use crate::i18n::{Label, LocalizationCatalog};
use crate::locale::Locale;
use crate::model::{DeviceCategory, DeviceRecord, PropertyRow};
use crate::projector;

/// Which fetch an error came from. Picks the message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Categories,
    Devices,
}

impl FetchKind {
    pub const fn error_label(self) -> Label {
        match self {
            Self::Categories => Label::ErrorLoadingDevices,
            Self::Devices => Label::ErrorLoadingData,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrowserState {
    catalog: LocalizationCatalog,
    locale: Locale,
    categories: Vec<DeviceCategory>,
    selected_category: Option<usize>,
    loaded_category: Option<String>,
    devices: Vec<DeviceRecord>,
    selected_device: Option<usize>,
}

impl BrowserState {
    pub fn new(catalog: LocalizationCatalog, locale: Locale) -> Self {
        Self {
            catalog,
            locale,
            categories: Vec::new(),
            selected_category: None,
            loaded_category: None,
            devices: Vec::new(),
            selected_device: None,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn catalog(&self) -> &LocalizationCatalog {
        &self.catalog
    }

    pub fn categories(&self) -> &[DeviceCategory] {
        &self.categories
    }

    pub fn devices(&self) -> &[DeviceRecord] {
        &self.devices
    }

    pub fn selected_category_index(&self) -> Option<usize> {
        self.selected_category
    }

    pub fn selected_category(&self) -> Option<&DeviceCategory> {
        self.selected_category.and_then(|i| self.categories.get(i))
    }

    /// Key of the category whose devices are currently held.
    pub fn loaded_category(&self) -> Option<&str> {
        self.loaded_category.as_deref()
    }

    pub fn selected_device_index(&self) -> Option<usize> {
        self.selected_device
    }

    pub fn selected_device(&self) -> Option<&DeviceRecord> {
        self.selected_device.and_then(|i| self.devices.get(i))
    }

    /// Text of a UI label in the active locale.
    pub fn label(&self, label: Label) -> &str {
        self.catalog.label(label, self.locale)
    }

    // ── Categories ───────────────────────────────────────────────────

    /// Replace the category list. The selection survives when its key is
    /// still present.
    pub fn set_categories(&mut self, mut categories: Vec<DeviceCategory>) {
        projector::localize_category_names(&mut categories, self.locale);
        let previous = self.selected_category().map(|c| c.key.clone());
        self.selected_category =
            previous.and_then(|key| categories.iter().position(|c| c.matches(&key)));
        debug!(count = categories.len(), "categories replaced");
        self.categories = categories;
    }

    /// Select by list position. Out-of-range positions are ignored.
    pub fn select_category(&mut self, index: usize) -> bool {
        if index < self.categories.len() {
            self.selected_category = Some(index);
            true
        } else {
            false
        }
    }

    /// Select by key, ignoring case.
    pub fn select_category_key(&mut self, key: &str) -> Result<&DeviceCategory, CoreError> {
        let index = self
            .categories
            .iter()
            .position(|c| c.matches(key))
            .ok_or_else(|| CoreError::CategoryNotFound { key: key.to_owned() })?;
        self.selected_category = Some(index);
        Ok(&self.categories[index])
    }

    /// The category a load trigger should fetch.
    pub fn pending_load(&self) -> Result<DeviceCategory, CoreError> {
        self.selected_category()
            .cloned()
            .ok_or(CoreError::NoCategorySelected)
    }

    // ── Devices ──────────────────────────────────────────────────────

    /// Replace the device list with a fetch result for `category_key`.
    /// Descriptions are localized and the device selection is cleared.
    pub fn set_devices(&mut self, category_key: &str, mut devices: Vec<DeviceRecord>) {
        projector::localize_device_descriptions(&mut devices, &self.catalog, self.locale);
        debug!(category = category_key, count = devices.len(), "devices replaced");
        self.devices = devices;
        self.loaded_category = Some(category_key.to_owned());
        self.selected_device = None;
    }

    /// Select a device row, or clear the selection with `None`.
    /// Out-of-range positions clear it too.
    pub fn select_device(&mut self, index: Option<usize>) {
        self.selected_device = index.filter(|&i| i < self.devices.len());
    }

    /// Select the device with `id` in the loaded list.
    pub fn select_device_id(&mut self, id: i64) -> Result<&DeviceRecord, CoreError> {
        let index = self.devices.iter().position(|d| d.id == id).ok_or_else(|| {
            CoreError::DeviceNotFound {
                category: self.loaded_category.clone().unwrap_or_default(),
                id,
            }
        })?;
        self.selected_device = Some(index);
        Ok(&self.devices[index])
    }

    /// Property rows of the selected device; empty when nothing is selected.
    pub fn selected_properties(&self) -> Vec<PropertyRow> {
        self.selected_device()
            .map(projector::project_properties)
            .unwrap_or_default()
    }

    /// Property rows of the selected device, or a selection error.
    pub fn require_selected_properties(&self) -> Result<Vec<PropertyRow>, CoreError> {
        self.selected_device()
            .map(projector::project_properties)
            .ok_or(CoreError::NoDeviceSelected)
    }

    // ── Locale ───────────────────────────────────────────────────────

    /// Switch to the other locale and re-localize everything in memory.
    pub fn toggle_locale(&mut self) -> Locale {
        self.set_locale(LocalizationCatalog::toggle(self.locale));
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        projector::localize_category_names(&mut self.categories, locale);
        projector::localize_device_descriptions(&mut self.devices, &self.catalog, locale);
        debug!(%locale, "locale changed");
    }

    // ── Messages ─────────────────────────────────────────────────────

    /// User-facing text for an error in the active locale.
    ///
    /// Selection errors become the matching prompt. Everything else is
    /// prefixed with the fetch-specific error label.
    pub fn describe_error(&self, err: &CoreError, kind: FetchKind) -> String {
        match err {
            CoreError::NoCategorySelected => self.label(Label::SelectDeviceType).to_owned(),
            CoreError::NoDeviceSelected => self.label(Label::SelectDevice).to_owned(),
            other => format!("{}: {other}", self.label(kind.error_label())),
        }
    }
}
