// ── Property projection ──
//
// Turns records into what the window shows: an ordered, typed property
// list for one device, and localized names for categories and devices.
// Everything here is pure and infallible.

use crate::i18n::LocalizationCatalog;
use crate::locale::Locale;
use crate::model::{DeviceCategory, DeviceRecord, PropertyRow, PropertyValue};

/// Display names of the fixed fields that appear as properties. `Id` is
/// shown elsewhere and never becomes a row.
pub const PROJECTED_FIXED_FIELDS: [&str; 3] = ["Code", "Name", "Description"];

/// Rows for one device: `Code`, `Name`, `Description`, then every extension
/// member in arrival order.
pub fn project_properties(record: &DeviceRecord) -> Vec<PropertyRow> {
    let [code, name, description] = PROJECTED_FIXED_FIELDS;

    let mut rows = Vec::with_capacity(PROJECTED_FIXED_FIELDS.len() + record.extensions.len());
    rows.push(PropertyRow::new(code, record.code.clone()));
    rows.push(PropertyRow::new(name, record.name.clone()));
    rows.push(PropertyRow::new(description, record.description.clone()));
    rows.extend(
        record
            .extensions
            .iter()
            .map(|(key, value)| PropertyRow::new(key.clone(), PropertyValue::from(value.clone()))),
    );
    rows
}

/// `key` with its first character upper-cased and the rest lower-cased.
pub fn cased_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Recompute every category's `display_name` for `locale`.
///
/// The primary locale shows the cased key; the secondary one shows the
/// server description, or the cased key when the server sent none.
pub fn localize_category_names(categories: &mut [DeviceCategory], locale: Locale) {
    for category in categories {
        category.display_name = match (&category.description, locale.is_secondary()) {
            (Some(description), true) => description.clone(),
            _ => cased_key(&category.key),
        };
    }
}

/// Replace every record's `description` with the translation of its `name`,
/// or with the raw `name` when no translation exists.
pub fn localize_device_descriptions(
    records: &mut [DeviceRecord],
    catalog: &LocalizationCatalog,
    locale: Locale,
) {
    for record in records {
        record.description = record.name.as_deref().map(|name| {
            catalog
                .translate(name, locale)
                .unwrap_or(name)
                .to_owned()
        });
    }
}
