// HTTP client for the device reference service
//
// Wraps `reqwest::Client` with base-URL path construction, status checking,
// and JSON decoding that keeps the raw body around for diagnostics.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::wire::{DeviceResponse, DeviceTypeResponse};

/// Path segment of the category list endpoint.
const DEVICE_TYPES_PATH: &str = "devices";

/// Longest body excerpt carried in an error message.
const BODY_PREVIEW_LEN: usize = 200;

/// Raw HTTP client for the device reference service.
///
/// Cheap to clone: the inner `reqwest::Client` is reference-counted, so a
/// clone can be moved into a spawned fetch task.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl CatalogClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// The `base_url` is the service root; endpoint paths are appended to it
    /// as additional segments, so a base with a path prefix
    /// (`https://host/api`) is honoured.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        ensure_base(&base_url)?;
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            timeout: transport.timeout,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Result<Self, Error> {
        ensure_base(&base_url)?;
        Ok(Self {
            http,
            base_url,
            timeout: TransportConfig::default().timeout,
        })
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// `GET /devices`: the list of device categories.
    pub async fn list_device_types(&self) -> Result<Vec<DeviceTypeResponse>, Error> {
        let url = self.endpoint_url(DEVICE_TYPES_PATH)?;
        self.get_json(url).await
    }

    /// `GET /{category}`: the devices of one category.
    ///
    /// The category key is lower-cased before it becomes the path segment.
    pub async fn list_devices(&self, category_key: &str) -> Result<Vec<DeviceResponse>, Error> {
        let url = self.endpoint_url(&category_key.to_lowercase())?;
        self.get_json(url).await
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Append a single, percent-encoded path segment to the base URL.
    pub fn endpoint_url(&self, segment: &str) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!(%url, "GET");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.map_send_error(e))?;
        trace!(status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                message: preview(&body).to_owned(),
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            Error::Transport(err)
        }
    }
}

fn ensure_base(url: &Url) -> Result<(), Error> {
    if url.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl(url.to_string()));
    }
    Ok(())
}

/// Leading slice of a body, cut on a character boundary.
fn preview(body: &str) -> &str {
    match body.char_indices().nth(BODY_PREVIEW_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
