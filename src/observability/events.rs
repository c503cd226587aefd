//! Observable events
//!
//! Every log line carries one of these as its `event` field.
//! Events are explicit and typed.

use std::fmt;

/// Observable events in modelprobe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Runner configuration loaded
    ConfigLoaded,
    /// Schema file loaded
    SchemaLoaded,

    // Probes
    /// Experiment started
    ExperimentStart,
    /// Experiment finished (all probes run or fail-fast stop)
    ExperimentComplete,
    /// Probe started
    ProbeStart,
    /// Probe held
    ProbePassed,
    /// Probe did not hold
    ProbeFailed,

    // Utilities
    /// Document validated from the command line
    DocumentValidated,
    /// Document rejected from the command line
    DocumentRejected,
    /// Path-configuration file written
    PathRegistered,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaLoaded => "SCHEMA_LOADED",
            Event::ExperimentStart => "EXPERIMENT_START",
            Event::ExperimentComplete => "EXPERIMENT_COMPLETE",
            Event::ProbeStart => "PROBE_START",
            Event::ProbePassed => "PROBE_PASSED",
            Event::ProbeFailed => "PROBE_FAILED",
            Event::DocumentValidated => "DOCUMENT_VALIDATED",
            Event::DocumentRejected => "DOCUMENT_REJECTED",
            Event::PathRegistered => "PATH_REGISTERED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_strings() {
        assert_eq!(Event::ProbeStart.as_str(), "PROBE_START");
        assert_eq!(Event::PathRegistered.to_string(), "PATH_REGISTERED");
    }
}
