//! Leadsheet CLI

#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use leadsheet_cli::config_handlers::handle_config_command;
use leadsheet_cli::{commands, logging, Cli, Command};
use leadsheet_core::LeadsheetConfig;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => {
            let mut config = LeadsheetConfig::load(cli.config.as_deref())?;
            commands::apply_serve_args(&mut config, &args);
            logging::init(cli.verbose, &config.logging.level);
            commands::serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Submit(args) => {
            logging::init(cli.verbose, "warn");
            commands::submit(args).await
        }
        Command::Health { url } => {
            logging::init(cli.verbose, "warn");
            commands::health(&url).await
        }
        Command::Config { action } => {
            logging::init(cli.verbose, "warn");
            handle_config_command(cli.config.as_deref(), action)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
