//! # leadsheet-cli
//!
//! The `leadsheet` binary:
//! - `serve`: run the HTTP service
//! - `submit`: send one submission to a running service
//! - `health`: check a running service
//! - `config`: inspect and edit the configuration file

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod logging;

pub use cli::{Cli, Command, ConfigAction, ServeArgs, SubmitArgs};
