//! CLI argument definitions using clap
//!
//! Commands:
//! - modelprobe run [EXPERIMENT]... [--config <path>] [--fail-fast]
//! - modelprobe list
//! - modelprobe round [--json]
//! - modelprobe validate --schema <path> [--input <path>]
//! - modelprobe register-path --site-dir <dir> [--root <dir>] [--name <stem>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;
use crate::pathreg::DEFAULT_NAME;

/// modelprobe - behavioral experiments for schema validation policies
#[derive(Parser, Debug)]
#[command(name = "modelprobe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log line format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run experiments and print a JSON report
    Run {
        /// Experiments to run (default: all, or those in the config file)
        experiments: Vec<String>,

        /// Path to runner configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Stop at the first probe that does not hold
        #[arg(long)]
        fail_fast: bool,
    },

    /// List experiments and their probes
    List,

    /// Compare nearest-even and round-half-up rounding
    Round {
        /// Print rows as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate one JSON document against a schema file
    Validate {
        /// Path to schema file
        #[arg(long)]
        schema: PathBuf,

        /// Path to document (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Write a path-configuration file registering a directory
    RegisterPath {
        /// Directory to register (default: current directory)
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Package-install directory receiving the file
        #[arg(long, env = "MODELPROBE_SITE_DIR")]
        site_dir: PathBuf,

        /// File stem of the path-configuration file
        #[arg(long, default_value = DEFAULT_NAME)]
        name: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
