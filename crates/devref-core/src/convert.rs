// ── API-to-domain type conversions ──
//
// Bridges raw `devref_api` wire types into `devref_core::model` types.
// Extension members are typed here, once, so nothing downstream has to look
// at JSON again.

use serde_json::{Number, Value};

use devref_api::{DeviceResponse, DeviceTypeResponse};

use crate::model::{DeviceCategory, DeviceRecord, ExtensionValue};

// ── Helpers ────────────────────────────────────────────────────────

/// `Integer` when the number survives a round trip through `i32`
/// (so `12` and `12.0` both qualify), `Float` otherwise.
#[allow(
    clippy::cast_possible_truncation,
    clippy::as_conversions,
    clippy::float_cmp
)]
fn number_value(n: &Number) -> ExtensionValue {
    if let Some(int) = n.as_i64().and_then(|i| i32::try_from(i).ok()) {
        return ExtensionValue::Integer(int);
    }
    match n.as_f64() {
        Some(x) if x.is_finite() => {
            let truncated = x as i32;
            if f64::from(truncated) == x {
                ExtensionValue::Integer(truncated)
            } else {
                ExtensionValue::Float(x)
            }
        }
        _ => ExtensionValue::Raw(n.to_string()),
    }
}

// ── Conversions ────────────────────────────────────────────────────

impl From<Value> for ExtensionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Number(n) => number_value(&n),
            Value::Bool(b) => Self::Boolean(b),
            Value::Null => Self::Raw(String::new()),
            other @ (Value::Array(_) | Value::Object(_)) => Self::Raw(other.to_string()),
        }
    }
}

impl From<DeviceResponse> for DeviceRecord {
    fn from(d: DeviceResponse) -> Self {
        Self {
            id: d.id,
            code: d.code,
            name: d.name,
            description: d.description,
            extensions: d
                .extra
                .into_iter()
                .map(|(key, value)| (key, ExtensionValue::from(value)))
                .collect(),
        }
    }
}

impl From<DeviceTypeResponse> for DeviceCategory {
    fn from(t: DeviceTypeResponse) -> Self {
        Self::new(t.name, t.description)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn ext(value: Value) -> ExtensionValue {
        ExtensionValue::from(value)
    }

    #[test]
    fn integral_numbers_in_range_become_integers() {
        assert_eq!(ext(json!(12)), ExtensionValue::Integer(12));
        assert_eq!(ext(json!(12.0)), ExtensionValue::Integer(12));
        assert_eq!(ext(json!(-7)), ExtensionValue::Integer(-7));
        assert_eq!(ext(json!(i32::MAX)), ExtensionValue::Integer(i32::MAX));
    }

    #[test]
    fn other_numbers_become_floats() {
        assert_eq!(ext(json!(12.5)), ExtensionValue::Float(12.5));
        assert_eq!(
            ext(json!(i64::from(i32::MAX) + 1)),
            ExtensionValue::Float(2_147_483_648.0)
        );
        assert_eq!(ext(json!(1e300)), ExtensionValue::Float(1e300));
    }

    #[test]
    fn non_scalars_render_as_compact_json() {
        assert_eq!(ext(json!([0, 100])), ExtensionValue::Raw("[0,100]".into()));
        assert_eq!(
            ext(json!({ "z": 1, "a": "x" })),
            ExtensionValue::Raw(r#"{"z":1,"a":"x"}"#.into())
        );
        assert_eq!(ext(Value::Null), ExtensionValue::Raw(String::new()));
    }

    #[test]
    fn strings_and_booleans_pass_through() {
        assert_eq!(ext(json!("42")), ExtensionValue::Text("42".into()));
        assert_eq!(ext(json!(false)), ExtensionValue::Boolean(false));
    }

    #[test]
    fn device_response_keeps_extension_order() {
        let response: DeviceResponse = serde_json::from_value(json!({
            "id": 3,
            "VOLTAGE": 12,
            "code": "PS-3",
            "accuracy": 0.25,
            "Name": "PressureSensor01"
        }))
        .unwrap();

        let record = DeviceRecord::from(response);
        assert_eq!(record.id, 3);
        assert_eq!(record.code.as_deref(), Some("PS-3"));
        let keys: Vec<&str> = record.extensions.keys().map(String::as_str).collect();
        assert_eq!(keys, ["VOLTAGE", "accuracy"]);
        assert_eq!(record.extensions["accuracy"], ExtensionValue::Float(0.25));
    }

    #[test]
    fn device_type_becomes_unlocalized_category() {
        let category = DeviceCategory::from(DeviceTypeResponse {
            name: "sensors".into(),
            description: Some("Датчики".into()),
        });
        assert_eq!(category.key, "sensors");
        assert_eq!(category.display_name, "sensors");
    }
}
