// ── Domain model ──
//
// Display-ready forms of what the service returns. Records are built once
// per fetch (see `convert`) and re-localized in place when the language
// changes.

pub mod category;
pub mod device;
pub mod property;

pub use category::DeviceCategory;
pub use device::{DeviceRecord, ExtensionValue};
pub use property::{PropertyRow, PropertyValue};
