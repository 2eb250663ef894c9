// devref-api: Async Rust client for the device reference service
//
// Two endpoints: `GET /devices` (the category list) and `GET /{category}`
// (the devices of one category). Responses are JSON arrays whose member
// names are matched case-insensitively.

pub mod client;
pub mod error;
pub mod transport;
pub mod wire;

pub use client::CatalogClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use wire::{DEVICE_FIXED_FIELDS, DeviceResponse, DeviceTypeResponse, FieldError};
