//! Handlers for `serve`, `submit`, and `health`.

use std::process::ExitCode;

use anyhow::Context;
use leadsheet_api::Server;
use leadsheet_client::{deliver, ConsoleNotifier, HttpTransport, SubmitOutcome};
use leadsheet_core::{ContactRequest, LeadsheetConfig, WriteMode};
use tracing::info;

use crate::cli::{ServeArgs, SubmitArgs};

/// Applies `serve` flags on top of the loaded configuration.
pub fn apply_serve_args(config: &mut LeadsheetConfig, args: &ServeArgs) {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(path) = &args.store {
        config.store.path = path.clone();
    }
    if let Some(sheet) = &args.sheet {
        config.store.sheet_name = sheet.clone();
    }
    if let Some(dir) = &args.static_dir {
        config.server.static_dir = Some(dir.clone());
    }
    if args.serialized {
        config.store.write_mode = WriteMode::Serialized;
    }
}

/// Runs the HTTP service until Ctrl-C.
pub async fn serve(config: LeadsheetConfig) -> anyhow::Result<()> {
    info!(
        write_mode = ?config.store.write_mode,
        validation = ?config.validation.mode(),
        "Starting service"
    );
    Server::new(config).serve().await.context("server failed")
}

/// Sends one submission and reports the outcome on the console.
pub async fn submit(args: SubmitArgs) -> anyhow::Result<ExitCode> {
    let transport = HttpTransport::new(&args.url)?;
    let request = ContactRequest::new(args.name, args.email, args.company, args.message);
    let outcome = deliver(&transport, &request, &ConsoleNotifier).await;
    Ok(match outcome {
        SubmitOutcome::Sent => ExitCode::SUCCESS,
        SubmitOutcome::Rejected | SubmitOutcome::Unavailable => ExitCode::FAILURE,
    })
}

/// Checks that a running service answers its health route.
pub async fn health(url: &str) -> anyhow::Result<ExitCode> {
    let transport = HttpTransport::new(url)?;
    match transport.health().await {
        Ok(health) => {
            println!("{}: {}", health.status, health.message);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{url} is not healthy: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
