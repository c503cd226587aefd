//! Built-in Experiment Tests
//!
//! Every built-in probe holds, and runs are repeatable.

use modelprobe::experiments;
use modelprobe::probe::RunReport;
use modelprobe::schema::{load_schema_file, ExtraPolicy};
use serde_json::json;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_every_builtin_probe_holds() {
    let all = experiments::all();
    let report = RunReport::run(&all, false);

    for experiment in &report.experiments {
        for outcome in &experiment.outcomes {
            assert!(
                outcome.passed,
                "{}::{} failed: {:?}",
                experiment.experiment, outcome.probe, outcome.failure
            );
        }
    }
    assert_eq!(report.failed_count(), 0);
}

#[test]
fn test_runs_are_repeatable() {
    let all = experiments::all();
    let first = RunReport::run(&all, false);
    for _ in 0..10 {
        assert_eq!(RunReport::run(&all, false), first);
    }
}

#[test]
fn test_probe_counts() {
    let counts: Vec<_> = experiments::all()
        .iter()
        .map(|e| (e.name, e.probes.len()))
        .collect();
    assert_eq!(
        counts,
        vec![("extra", 3), ("frozen", 6), ("list_of_enums", 3)]
    );
}

#[test]
fn test_schema_file_matches_builtin_forbid_behavior() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("forbid.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&json!({
            "name": "MySchemaForbid",
            "description": "extra keys are rejected",
            "fields": { "a": { "type": "string", "required": true } },
            "config": { "extra": "forbid" }
        }))
        .unwrap(),
    )
    .unwrap();

    let schema = Arc::new(load_schema_file(&path).unwrap());
    assert_eq!(schema.config().extra, ExtraPolicy::Forbid);
    assert_eq!(schema.description(), Some("extra keys are rejected"));

    assert!(schema.validate(&json!({ "a": "first field" })).is_ok());
    assert!(schema
        .validate(&json!({ "a": "first field", "b": "ignore me or don't" }))
        .is_err());
}
