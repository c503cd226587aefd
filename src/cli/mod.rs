//! CLI module for modelprobe
//!
//! Provides command-line interface for:
//! - run: Execute experiments and report probe outcomes
//! - list: Show experiments and probes
//! - round: Rounding comparison
//! - validate: One-shot document validation
//! - register-path: Write a path-configuration file

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    list, register_path, round, run, run_command, run_experiments, select_experiments, validate,
    validation_response,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_response, ok_response, read_document, write_json, write_response, write_text};
