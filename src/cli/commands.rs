//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::experiments;
use crate::observability::{init_logging, Event};
use crate::pathreg;
use crate::probe::{Experiment, RunReport};
use crate::rounding;
use crate::schema;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{error_response, ok_response, read_document, write_json, write_response, write_text};

/// Main CLI entry point
///
/// Parses arguments, installs logging, and dispatches to the command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let config = match &cli.command {
        Command::Run {
            config: Some(path), ..
        } => Config::load(path)?,
        _ => Config::default(),
    };

    init_logging(cli.log_format.unwrap_or(config.log_format));
    if let Command::Run {
        config: Some(path), ..
    } = &cli.command
    {
        tracing::info!(event = %Event::ConfigLoaded, path = %path.display(), "config loaded");
    }

    run_command(cli.command, &config)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command, config: &Config) -> CliResult<()> {
    match cmd {
        Command::Run {
            experiments,
            fail_fast,
            ..
        } => {
            let names = if experiments.is_empty() {
                config.experiments.clone()
            } else {
                experiments
            };
            run_experiments(&names, fail_fast || config.fail_fast)
        }
        Command::List => list(),
        Command::Round { json } => round(json),
        Command::Validate { schema, input } => validate(&schema, input.as_deref()),
        Command::RegisterPath {
            root,
            site_dir,
            name,
        } => register_path(&root, &site_dir, &name),
    }
}

/// Resolves experiment names; empty means all.
pub fn select_experiments(names: &[String]) -> CliResult<Vec<Experiment>> {
    if names.is_empty() {
        return Ok(experiments::all());
    }

    names
        .iter()
        .map(|name| experiments::find(name).ok_or_else(|| CliError::unknown_experiment(name)))
        .collect()
}

/// Run experiments and write the report
///
/// The report is always written; a failing probe then turns into an error
/// so the process exits non-zero.
pub fn run_experiments(names: &[String], fail_fast: bool) -> CliResult<()> {
    let selected = select_experiments(names)?;
    let report = RunReport::run(&selected, fail_fast);

    write_response(&report)?;

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::probes_failed(report.failed_count()))
    }
}

/// List experiments and their probes
pub fn list() -> CliResult<()> {
    let listing: Vec<_> = experiments::all()
        .iter()
        .map(|experiment| {
            json!({
                "name": experiment.name,
                "description": experiment.description,
                "probes": experiment
                    .probes
                    .iter()
                    .map(|probe| json!({ "name": probe.name, "description": probe.description }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    write_response(&listing)
}

/// Print the rounding comparison
pub fn round(as_json: bool) -> CliResult<()> {
    let rows = rounding::compare(&rounding::default_values());
    if as_json {
        write_json(&serde_json::to_value(&rows)?)
    } else {
        write_text(&rounding::render(&rows))
    }
}

/// Validate one document against a schema file
///
/// Writes the accepted mapping, or the structured rejection.
pub fn validate(schema_path: &Path, input: Option<&Path>) -> CliResult<()> {
    let (response, rejection) = validation_response(schema_path, input)?;
    write_json(&response)?;
    match rejection {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Response body for `validate`, plus the error to exit with when the
/// document is rejected.
pub fn validation_response(
    schema_path: &Path,
    input: Option<&Path>,
) -> CliResult<(Value, Option<CliError>)> {
    let schema = Arc::new(schema::load_schema_file(schema_path)?);
    tracing::info!(
        event = %Event::SchemaLoaded,
        schema = schema.name(),
        path = %schema_path.display(),
        "schema loaded"
    );

    let document = read_document(input)?;

    match schema.validate(&document) {
        Ok(instance) => {
            tracing::info!(event = %Event::DocumentValidated, schema = schema.name(), "document accepted");
            Ok((ok_response(&instance.to_value())?, None))
        }
        Err(err) => {
            tracing::warn!(
                event = %Event::DocumentRejected,
                schema = schema.name(),
                violations = err.details().len(),
                "document rejected"
            );
            let response = error_response(
                err.code().code(),
                err.message(),
                Some(serde_json::to_value(err.details())?),
            );
            Ok((response, Some(err.into())))
        }
    }
}

/// Write the path-configuration file and confirm
pub fn register_path(root: &Path, site_dir: &Path, name: &str) -> CliResult<()> {
    let registration = pathreg::register_path(root, site_dir, name)?;
    write_text(&format!(
        "Added '{}' to '{}'.\n",
        registration.root.display(),
        registration.pth_file.display()
    ))
}
