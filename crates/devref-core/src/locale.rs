// ── Display language ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The active display language.
///
/// Exactly two languages exist. [`Locale::En`] is the primary one: category
/// names are derived mechanically from their keys. [`Locale::Ru`] is the
/// secondary one: category names come from the server-provided description.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const PRIMARY: Self = Self::En;
    pub const SECONDARY: Self = Self::Ru;

    /// The other language.
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ru,
            Self::Ru => Self::En,
        }
    }

    pub const fn is_secondary(self) -> bool {
        matches!(self, Self::Ru)
    }

    /// Short language tag, as used in resource bundles.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Parse a language tag, tolerating region suffixes (`ru-RU`, `en_GB`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag.trim().split(['-', '_']).next().unwrap_or_default();
        lang.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        for locale in Locale::iter() {
            assert_ne!(locale.toggled(), locale);
            assert_eq!(locale.toggled().toggled(), locale);
        }
    }

    #[test]
    fn from_tag_accepts_regions_and_case() {
        assert_eq!(Locale::from_tag("ru-RU"), Some(Locale::Ru));
        assert_eq!(Locale::from_tag("EN_gb"), Some(Locale::En));
        assert_eq!(Locale::from_tag(" en "), Some(Locale::En));
        assert_eq!(Locale::from_tag("de"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(Locale::Ru.to_string(), Locale::Ru.tag());
        assert_eq!(Locale::PRIMARY, Locale::default());
        assert!(Locale::SECONDARY.is_secondary());
    }
}
