// ── Localization ──

mod bundle;
pub mod catalog;
pub mod label;

pub use catalog::LocalizationCatalog;
pub use label::Label;
