// Wire types for the device reference service.
//
// The service is loose about member casing (`Name`, `name`, `NAME` all
// occur), so responses are first read as an ordered JSON object and the
// known members are picked out case-insensitively. Everything left over is
// kept, in arrival order, as `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Fixed members of every device object, in declaration order.
///
/// Anything outside this list is an extension member.
pub const DEVICE_FIXED_FIELDS: [&str; 4] = ["Id", "Code", "Name", "Description"];

/// A known member carried a value of the wrong JSON kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("member `{field}` must be {expected}, got {found}")]
pub struct FieldError {
    pub field: &'static str,
    pub expected: &'static str,
    pub found: &'static str,
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Split an object into the requested fixed members and the remainder.
///
/// Matching is ASCII case-insensitive. When several spellings of the same
/// member are present the last one wins, and none of them reach the remainder.
fn split_members<const N: usize>(
    object: Map<String, Value>,
    fields: [&'static str; N],
) -> ([Option<Value>; N], Map<String, Value>) {
    let mut fixed: [Option<Value>; N] = std::array::from_fn(|_| None);
    let mut rest = Map::new();

    for (key, value) in object {
        match fields.iter().position(|f| f.eq_ignore_ascii_case(&key)) {
            Some(slot) => fixed[slot] = Some(value),
            None => {
                rest.insert(key, value);
            }
        }
    }

    (fixed, rest)
}

fn optional_string(field: &'static str, value: Option<Value>) -> Result<Option<String>, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(FieldError {
            field,
            expected: "a string",
            found: kind_name(&other),
        }),
    }
}

// ── Device types ─────────────────────────────────────────────────────

/// One entry of `GET /devices`: a device category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", rename_all = "PascalCase")]
pub struct DeviceTypeResponse {
    /// Category key, also the path segment of its device list.
    pub name: String,
    /// Server-provided display text for the secondary language.
    pub description: Option<String>,
}

impl TryFrom<Map<String, Value>> for DeviceTypeResponse {
    type Error = FieldError;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let ([name, description], _) = split_members(object, ["Name", "Description"]);

        let name = optional_string("Name", name)?.ok_or(FieldError {
            field: "Name",
            expected: "a string",
            found: "nothing",
        })?;

        Ok(Self {
            name,
            description: optional_string("Description", description)?,
        })
    }
}

// ── Devices ──────────────────────────────────────────────────────────

/// One entry of `GET /{category}`: a device with its extension members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", rename_all = "PascalCase")]
pub struct DeviceResponse {
    pub id: i64,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Every member outside [`DEVICE_FIXED_FIELDS`], in arrival order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for DeviceResponse {
    type Error = FieldError;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let ([id, code, name, description], extra) = split_members(object, DEVICE_FIXED_FIELDS);

        let id = match id {
            None => 0,
            Some(Value::Number(n)) => n.as_i64().ok_or(FieldError {
                field: "Id",
                expected: "an integer",
                found: "a fractional or out-of-range number",
            })?,
            Some(other) => {
                return Err(FieldError {
                    field: "Id",
                    expected: "an integer",
                    found: kind_name(&other),
                });
            }
        };

        Ok(Self {
            id,
            code: optional_string("Code", code)?,
            name: optional_string("Name", name)?,
            description: optional_string("Description", description)?,
            extra,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn device_members_match_case_insensitively() {
        let device: DeviceResponse = serde_json::from_value(json!({
            "id": 7,
            "CODE": "TS-01",
            "name": "TempSensor01",
            "Description": "raw",
        }))
        .unwrap();

        assert_eq!(device.id, 7);
        assert_eq!(device.code.as_deref(), Some("TS-01"));
        assert_eq!(device.name.as_deref(), Some("TempSensor01"));
        assert_eq!(device.description.as_deref(), Some("raw"));
        assert!(device.extra.is_empty());
    }

    #[test]
    fn extra_members_keep_arrival_order() {
        let device: DeviceResponse = serde_json::from_str(
            r#"{"Id":1,"zeta":1,"Name":"n","alpha":"a","mid":true}"#,
        )
        .unwrap();

        let keys: Vec<&str> = device.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn duplicate_fixed_spellings_never_reach_extra() {
        let device: DeviceResponse =
            serde_json::from_str(r#"{"Description":"first","description":"second"}"#).unwrap();

        assert_eq!(device.description.as_deref(), Some("second"));
        assert!(device.extra.is_empty());
    }

    #[test]
    fn missing_id_defaults_to_zero_and_null_strings_are_absent() {
        let device: DeviceResponse =
            serde_json::from_value(json!({ "Code": null, "Name": "x" })).unwrap();
        assert_eq!(device.id, 0);
        assert_eq!(device.code, None);
    }

    #[test]
    fn non_integer_id_is_rejected() {
        let err = serde_json::from_value::<DeviceResponse>(json!({ "Id": "7" })).unwrap_err();
        assert!(err.to_string().contains("member `Id` must be an integer"));

        let err = serde_json::from_value::<DeviceResponse>(json!({ "Id": 1.5 })).unwrap_err();
        assert!(err.to_string().contains("`Id`"));
    }

    #[test]
    fn device_type_requires_name() {
        let ok: DeviceTypeResponse =
            serde_json::from_value(json!({ "name": "Sensors", "DESCRIPTION": "Датчики" }))
                .unwrap();
        assert_eq!(ok.name, "Sensors");
        assert_eq!(ok.description.as_deref(), Some("Датчики"));

        let err = serde_json::from_value::<DeviceTypeResponse>(json!({ "Description": "x" }))
            .unwrap_err();
        assert!(err.to_string().contains("`Name`"));
    }

    #[test]
    fn device_serializes_with_wire_names() {
        let device: DeviceResponse =
            serde_json::from_value(json!({ "id": 3, "name": "n", "voltage": 12 })).unwrap();
        let out = serde_json::to_value(&device).unwrap();
        assert_eq!(
            out,
            json!({ "Id": 3, "Code": null, "Name": "n", "Description": null, "voltage": 12 })
        );
    }
}
