//! Behavioral probes
//!
//! A probe builds its own fixtures, exercises one schema policy, and
//! either holds or reports a [`ProbeFailure`]. An expected error is the
//! success path; an unexpected success or an error of the wrong class is
//! a failure.

mod expect;
mod runner;

pub use expect::{expect_eq, expect_failure, expect_success, ProbeFailure, ProbeResult};
pub use runner::{Experiment, ExperimentReport, Probe, ProbeOutcome, RunReport};
