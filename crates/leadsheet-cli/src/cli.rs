//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Leadsheet - contact form intake backed by a spreadsheet
#[derive(Parser, Debug)]
#[command(name = "leadsheet", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Send one submission to a running service
    Submit(SubmitArgs),
    /// Check a running service
    Health {
        /// Service root URL
        #[arg(long, env = "LEADSHEET_URL", default_value = "http://localhost:3010")]
        url: String,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Flags for `serve`; each overrides the config file and environment.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,
    /// XLSX store file
    #[arg(long)]
    pub store: Option<PathBuf>,
    /// Sheet holding contact rows
    #[arg(long)]
    pub sheet: Option<String>,
    /// Directory served for non-API paths
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
    /// Serialize appends within the process
    #[arg(long)]
    pub serialized: bool,
}

/// Flags for `submit`.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Service root URL
    #[arg(long, env = "LEADSHEET_URL", default_value = "http://localhost:3010")]
    pub url: String,
    /// Sender name
    #[arg(long)]
    pub name: String,
    /// Sender email
    #[arg(long)]
    pub email: String,
    /// Sender company
    #[arg(long, default_value = "")]
    pub company: String,
    /// Message body
    #[arg(long)]
    pub message: String,
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Write a default config file
    Init {
        /// Where to write it (defaults to the platform config dir)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
