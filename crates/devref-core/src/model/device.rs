// ── Device domain types ──

use indexmap::IndexMap;
use serde::Serialize;

/// An extension member, typed once when the record is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtensionValue {
    Integer(i32),
    Float(f64),
    Boolean(bool),
    Text(String),
    /// Compact JSON text of a value with no scalar form (array, object,
    /// null, or a number outside `f64`).
    Raw(String),
}

/// One device of the loaded category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRecord {
    pub id: i64,
    pub code: Option<String>,
    pub name: Option<String>,
    /// Localized from `name` after every fetch and locale change.
    pub description: Option<String>,
    /// Category-specific members, in arrival order. Never contains a key
    /// that matches a fixed field.
    pub extensions: IndexMap<String, ExtensionValue>,
}

impl DeviceRecord {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            code: None,
            name: None,
            description: None,
            extensions: IndexMap::new(),
        }
    }
}
