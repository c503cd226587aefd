//! Sequential probe runner and its reports.

use serde::Serialize;

use crate::observability::Event;

use super::expect::ProbeResult;

/// A named, closed pass/fail check.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub name: &'static str,
    pub description: &'static str,
    pub check: fn() -> ProbeResult,
}

impl Probe {
    pub const fn new(name: &'static str, description: &'static str, check: fn() -> ProbeResult) -> Self {
        Self {
            name,
            description,
            check,
        }
    }
}

/// A group of probes sharing schemas and fixtures.
#[derive(Debug, Clone)]
pub struct Experiment {
    pub name: &'static str,
    pub description: &'static str,
    pub probes: Vec<Probe>,
}

impl Experiment {
    /// Runs every probe in declaration order.
    ///
    /// With `fail_fast`, stops at the first probe that does not hold;
    /// probes after it are not reported.
    pub fn run(&self, fail_fast: bool) -> ExperimentReport {
        tracing::info!(
            event = %Event::ExperimentStart,
            experiment = self.name,
            probes = self.probes.len(),
            "running experiment"
        );

        let mut outcomes = Vec::with_capacity(self.probes.len());
        for probe in &self.probes {
            let outcome = self.run_probe(probe);
            let failed = !outcome.passed;
            outcomes.push(outcome);
            if failed && fail_fast {
                break;
            }
        }

        let report = ExperimentReport {
            experiment: self.name,
            outcomes,
        };

        tracing::info!(
            event = %Event::ExperimentComplete,
            experiment = self.name,
            passed = report.passed_count(),
            failed = report.failed_count(),
            "experiment complete"
        );

        report
    }

    fn run_probe(&self, probe: &Probe) -> ProbeOutcome {
        tracing::debug!(event = %Event::ProbeStart, experiment = self.name, probe = probe.name);

        match (probe.check)() {
            Ok(()) => {
                tracing::info!(
                    event = %Event::ProbePassed,
                    experiment = self.name,
                    probe = probe.name,
                    "probe held"
                );
                ProbeOutcome {
                    probe: probe.name,
                    passed: true,
                    failure: None,
                }
            }
            Err(failure) => {
                tracing::error!(
                    event = %Event::ProbeFailed,
                    experiment = self.name,
                    probe = probe.name,
                    error = %failure,
                    "probe did not hold"
                );
                ProbeOutcome {
                    probe: probe.name,
                    passed: false,
                    failure: Some(failure.to_string()),
                }
            }
        }
    }
}

/// Result of one probe run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    pub probe: &'static str,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Outcomes of one experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperimentReport {
    pub experiment: &'static str,
    pub outcomes: Vec<ProbeOutcome>,
}

impl ExperimentReport {
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Outcomes of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub experiments: Vec<ExperimentReport>,
}

impl RunReport {
    /// Runs experiments in order. With `fail_fast`, nothing runs after the
    /// first failing probe.
    pub fn run<'a, I>(experiments: I, fail_fast: bool) -> Self
    where
        I: IntoIterator<Item = &'a Experiment>,
    {
        let mut report = RunReport::default();
        for experiment in experiments {
            let experiment_report = experiment.run(fail_fast);
            let failed = !experiment_report.is_success();
            report.experiments.push(experiment_report);
            if failed && fail_fast {
                break;
            }
        }
        report
    }

    pub fn failed_count(&self) -> usize {
        self.experiments.iter().map(ExperimentReport::failed_count).sum()
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}
