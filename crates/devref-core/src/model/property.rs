// ── Property rows ──

use std::fmt;

use serde::Serialize;

use super::device::ExtensionValue;

/// A projected property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Integer(i32),
    Float(f64),
    Boolean(bool),
    Null,
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<Option<String>> for PropertyValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Text)
    }
}

impl From<ExtensionValue> for PropertyValue {
    fn from(value: ExtensionValue) -> Self {
        match value {
            ExtensionValue::Text(s) | ExtensionValue::Raw(s) => Self::Text(s),
            ExtensionValue::Integer(n) => Self::Integer(n),
            ExtensionValue::Float(x) => Self::Float(x),
            ExtensionValue::Boolean(b) => Self::Boolean(b),
        }
    }
}

/// Null renders as an empty cell.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => Ok(()),
        }
    }
}

/// One line of the property table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRow {
    pub property_name: String,
    pub value: PropertyValue,
}

impl PropertyRow {
    pub fn new(property_name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            property_name: property_name.into(),
            value: value.into(),
        }
    }
}
