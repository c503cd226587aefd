//! Observability subsystem
//!
//! Structured logging through `tracing`:
//! - One log line = one typed [`Event`], carried in the `event` field
//! - Logs go to stderr; stdout is reserved for command output
//! - Filter from `RUST_LOG`, defaulting to `info`
//!
//! # Usage
//!
//! ```ignore
//! use modelprobe::observability::{init_logging, Event, LogFormat};
//!
//! init_logging(LogFormat::Json);
//! tracing::info!(event = %Event::ProbePassed, probe = "allow", "probe passed");
//! ```

mod events;

pub use events::Event;

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Installs the global subscriber.
///
/// A second call is a no-op, so tests and embedders may call it freely.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
