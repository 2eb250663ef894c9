// ── Translation catalog ──
//
// Two string tables, one per locale. Lookups never fail: a missing key is
// reported as `None` and callers pick their own fallback.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use super::bundle;
use super::label::Label;
use crate::error::CoreError;
use crate::locale::Locale;

/// Key-to-text tables for both display languages.
#[derive(Debug, Clone, Default)]
pub struct LocalizationCatalog {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl LocalizationCatalog {
    /// An empty catalog. Every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog compiled into the binary: UI labels for both languages
    /// and the shipped device-name translations.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (locale, entries) in [(Locale::En, bundle::EN), (Locale::Ru, bundle::RU)] {
            for (key, text) in entries {
                catalog.insert(locale, *key, *text);
            }
        }
        catalog
    }

    /// Parse a TOML resource bundle.
    ///
    /// Each top-level table is named by a locale tag and maps keys to text:
    ///
    /// ```toml
    /// [ru]
    /// TempSensor01 = "Датчик температуры"
    /// ```
    ///
    /// Tables for unknown locales are skipped. `source_name` only labels
    /// errors and log lines.
    pub fn from_toml_str(source: &str, source_name: &str) -> Result<Self, CoreError> {
        let parsed: HashMap<String, HashMap<String, String>> =
            toml::from_str(source).map_err(|e| CoreError::Catalog {
                source_name: source_name.to_owned(),
                message: e.message().to_owned(),
            })?;

        let mut catalog = Self::new();
        for (tag, entries) in parsed {
            let Some(locale) = Locale::from_tag(&tag) else {
                warn!(source = source_name, tag = %tag, "skipping unknown locale table");
                continue;
            };
            debug!(source = source_name, %locale, entries = entries.len(), "bundle table loaded");
            catalog.tables.entry(locale).or_default().extend(entries);
        }
        Ok(catalog)
    }

    /// Read and parse a TOML resource bundle from disk.
    pub fn load_file(path: &Path) -> Result<Self, CoreError> {
        let source_name = path.display().to_string();
        let source = std::fs::read_to_string(path).map_err(|e| CoreError::Catalog {
            source_name: source_name.clone(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source, &source_name)
    }

    /// Built-in catalog with each bundle file merged over it, in order.
    pub fn with_overrides<P: AsRef<Path>>(files: &[P]) -> Result<Self, CoreError> {
        let mut catalog = Self::builtin();
        for file in files {
            catalog.merge(Self::load_file(file.as_ref())?);
        }
        Ok(catalog)
    }

    /// Merge `other` over `self`; entries from `other` win.
    pub fn merge(&mut self, other: Self) {
        for (locale, entries) in other.tables {
            self.tables.entry(locale).or_default().extend(entries);
        }
    }

    /// Add or replace one entry.
    pub fn insert(&mut self, locale: Locale, key: impl Into<String>, text: impl Into<String>) {
        self.tables
            .entry(locale)
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Exact, case-sensitive lookup.
    pub fn translate(&self, key: &str, locale: Locale) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Text for a UI label: the requested locale, then the primary locale,
    /// then the bare key.
    pub fn label(&self, label: Label, locale: Locale) -> &str {
        let key = label.key();
        self.translate(key, locale)
            .or_else(|| self.translate(key, Locale::PRIMARY))
            .unwrap_or(key)
    }

    /// The other locale.
    pub const fn toggle(current: Locale) -> Locale {
        current.toggled()
    }

    /// Number of entries for one locale.
    pub fn len(&self, locale: Locale) -> usize {
        self.tables.get(&locale).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }
}
