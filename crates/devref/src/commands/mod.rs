//! Command handlers: fetch through `devref_core`, then format.

pub mod categories;
pub mod config_cmd;
pub mod devices;
pub mod properties;

use devref_core::{BrowserState, DeviceService, FetchKind};

use crate::error::CliError;

/// Fetch the device types into `state` and select `key` among them.
pub async fn select_category(
    service: &DeviceService,
    state: &mut BrowserState,
    key: &str,
) -> Result<(), CliError> {
    load_categories(service, state).await?;
    state.select_category_key(key)?;
    Ok(())
}

pub async fn load_categories(
    service: &DeviceService,
    state: &mut BrowserState,
) -> Result<(), CliError> {
    service
        .load_categories(state)
        .await
        .map_err(|e| CliError::from_fetch(e, state, FetchKind::Categories))
}

/// Fetch the devices of the selected type into `state`.
pub async fn load_devices(
    service: &DeviceService,
    state: &mut BrowserState,
) -> Result<(), CliError> {
    service
        .load_devices(state)
        .await
        .map_err(|e| CliError::from_fetch(e, state, FetchKind::Devices))
}
