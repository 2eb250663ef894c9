//! `devref-tui`: interactive device reference browser.
//!
//! Device types on the left, the devices of the loaded type on the right,
//! and the selected device's properties below. `t` switches between English
//! and Russian without refetching.
//!
//! Logs go to a file (default `/tmp/devref-tui.log`) so they never corrupt
//! the terminal.

mod action;
mod app;
mod component;
mod event;
mod screens;
mod theme;
mod tui;

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use devref_config::Config;
use devref_core::{BrowserState, DeviceService, Locale};

use crate::app::App;

/// Browse device types, devices, and device properties.
#[derive(Parser, Debug)]
#[command(name = "devref-tui", version, about)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, env = "DEVREF_CONFIG")]
    config: Option<PathBuf>,

    /// Device service root URL (overrides config)
    #[arg(short = 'u', long)]
    base_url: Option<String>,

    /// Start-up language: en or ru (overrides config)
    #[arg(short = 'L', long, value_parser = parse_locale)]
    lang: Option<Locale>,

    /// Extra translation bundle (TOML), merged after configured ones
    #[arg(long = "translations", value_name = "FILE")]
    translations: Vec<PathBuf>,

    /// Log file path
    #[arg(long, default_value = "/tmp/devref-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_locale(tag: &str) -> Result<Locale, String> {
    Locale::from_tag(tag)
        .ok_or_else(|| format!("unsupported language '{tag}' (expected en or ru)"))
}

/// File-only tracing. The returned guard flushes on drop.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "devref_tui={level},devref_core={level},devref_api={level}"
        ))
    });

    let dir = cli.log_file.parent().unwrap_or(Path::new("/tmp"));
    let file = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("devref-tui.log"));
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    guard
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(devref_config::config_path);
    let mut config = devref_config::load_config_from(&path)?;
    if let Some(ref url) = cli.base_url {
        config.service.base_url.clone_from(url);
    }
    if let Some(lang) = cli.lang {
        config.ui.language = lang;
    }
    config.translations.files.extend(cli.translations.iter().cloned());
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = setup_tracing(&cli);
    tui::install_hooks()?;

    let config = load_config(&cli)?;
    let service = DeviceService::new(&config.service_config()?)?;
    let state = BrowserState::new(config.catalog()?, config.ui.language);
    info!(locale = %state.locale(), "starting devref-tui");

    App::new(service, state).run().await
}
