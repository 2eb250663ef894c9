// ── Fetch facade ──
//
// Owns the HTTP client and turns wire responses into domain records. Both
// the CLI and the TUI fetch through here; the TUI clones it into spawned
// tasks.

use tracing::{debug, info, warn};

use devref_api::CatalogClient;

use crate::browser::BrowserState;
use crate::config::ServiceConfig;
use crate::error::CoreError;
use crate::model::{DeviceCategory, DeviceRecord};

#[derive(Debug, Clone)]
pub struct DeviceService {
    client: CatalogClient,
}

impl DeviceService {
    pub fn new(config: &ServiceConfig) -> Result<Self, CoreError> {
        let client = CatalogClient::new(config.base_url.clone(), &config.transport())?;
        Ok(Self { client })
    }

    pub fn base_url(&self) -> &url::Url {
        self.client.base_url()
    }

    /// Every device category, display names not yet localized.
    pub async fn fetch_categories(&self) -> Result<Vec<DeviceCategory>, CoreError> {
        let types = self.client.list_device_types().await?;
        info!(count = types.len(), "device types fetched");
        Ok(types.into_iter().map(DeviceCategory::from).collect())
    }

    /// Devices of one category, descriptions not yet localized.
    pub async fn fetch_devices(&self, category_key: &str) -> Result<Vec<DeviceRecord>, CoreError> {
        let devices = self.client.list_devices(category_key).await?;
        info!(category = category_key, count = devices.len(), "devices fetched");
        Ok(devices.into_iter().map(DeviceRecord::from).collect())
    }

    // ── Session helpers ──────────────────────────────────────────────

    /// Fetch categories into `state`, keeping the selection by key.
    /// On failure `state` is untouched.
    pub async fn load_categories(&self, state: &mut BrowserState) -> Result<(), CoreError> {
        let categories = self.fetch_categories().await.inspect_err(|e| {
            warn!(error = %e, "loading device types failed");
        })?;
        state.set_categories(categories);
        Ok(())
    }

    /// Fetch the devices of the selected category into `state`.
    ///
    /// With no category selected nothing is fetched and
    /// [`CoreError::NoCategorySelected`] is returned. On failure `state` is
    /// untouched.
    pub async fn load_devices(&self, state: &mut BrowserState) -> Result<(), CoreError> {
        let category = state.pending_load().inspect_err(|_| {
            debug!("load requested without a category");
        })?;
        let devices = self.fetch_devices(&category.key).await.inspect_err(|e| {
            warn!(category = %category.key, error = %e, "loading devices failed");
        })?;
        state.set_devices(&category.key, devices);
        Ok(())
    }
}
