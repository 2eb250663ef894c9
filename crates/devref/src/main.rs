mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let global = &cli.global;
    match cli.command {
        // No service access needed
        Command::Config(ref args) => commands::config_cmd::handle(args, global),
        Command::Completions(ref args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "devref", &mut std::io::stdout());
            Ok(())
        }

        Command::Categories => {
            let session = config::session(global)?;
            commands::categories::handle(session, global).await
        }
        Command::Devices(args) => {
            let session = config::session(global)?;
            tracing::debug!(category = %args.category, "listing devices");
            commands::devices::handle(session, args, global).await
        }
        Command::Properties(args) => {
            let session = config::session(global)?;
            tracing::debug!(category = %args.category, id = args.id, "projecting properties");
            commands::properties::handle(session, args, global).await
        }
    }
}
