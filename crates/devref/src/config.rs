//! Command-line overrides on top of `devref_config`.
//!
//! Flags win over the config file, which wins over built-in defaults.

use std::path::PathBuf;

use devref_config::Config;
use devref_core::{BrowserState, Locale, LocalizationCatalog, ServiceConfig};

use crate::cli::{GlobalOpts, Language};
use crate::error::CliError;

/// The config file this invocation reads.
pub fn config_file(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(devref_config::config_path)
}

/// Load the config file named by `--config` (or the default one) plus the
/// environment, then apply flag overrides.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut config = devref_config::load_config_from(&config_file(global))?;
    apply_overrides(&mut config, global);
    Ok(config)
}

pub fn apply_overrides(config: &mut Config, global: &GlobalOpts) {
    if let Some(ref url) = global.base_url {
        config.service.base_url.clone_from(url);
    }
    if let Some(timeout) = global.timeout {
        config.service.timeout = timeout;
    }
    if global.insecure {
        config.service.insecure = true;
    }
    if let Some(lang) = global.lang {
        config.ui.language = lang.into();
    }
    config
        .translations
        .files
        .extend(global.translations.iter().cloned());
}

impl From<Language> for Locale {
    fn from(lang: Language) -> Self {
        match lang {
            Language::En => Self::En,
            Language::Ru => Self::Ru,
        }
    }
}

/// Everything a fetching command needs.
pub struct Session {
    pub service: ServiceConfig,
    pub state: BrowserState,
}

pub fn session(global: &GlobalOpts) -> Result<Session, CliError> {
    let config = load(global)?;
    let service = config.service_config()?;
    let catalog = LocalizationCatalog::with_overrides(&config.translations.files)?;
    Ok(Session {
        service,
        state: BrowserState::new(catalog, config.ui.language),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["devref"];
        argv.extend_from_slice(args);
        argv.push("categories");
        Cli::try_parse_from(argv).unwrap().global
    }

    #[test]
    fn flags_override_config_values() {
        let mut config = Config::default();
        config.translations.files.push(PathBuf::from("base.toml"));

        apply_overrides(
            &mut config,
            &global(&[
                "--base-url",
                "http://localhost:9000",
                "--timeout",
                "4",
                "--lang",
                "ru",
                "-k",
                "--translations",
                "extra.toml",
            ]),
        );

        assert_eq!(config.service.base_url, "http://localhost:9000");
        assert_eq!(config.service.timeout, 4);
        assert!(config.service.insecure);
        assert_eq!(config.ui.language, Locale::Ru);
        assert_eq!(
            config.translations.files,
            [PathBuf::from("base.toml"), PathBuf::from("extra.toml")]
        );
    }

    #[test]
    fn absent_flags_keep_config_values() {
        let mut config = Config::default();
        config.service.timeout = 12;
        config.ui.language = Locale::Ru;

        apply_overrides(&mut config, &global(&[]));

        assert_eq!(config.service.timeout, 12);
        assert_eq!(config.ui.language, Locale::Ru);
        assert!(!config.service.insecure);
    }
}
