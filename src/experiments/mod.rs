//! Built-in experiments
//!
//! Each experiment declares its own schemas and fixtures; none depends on
//! another.

pub mod extra;
pub mod frozen;
pub mod list_of_enums;

use crate::probe::Experiment;

/// Experiment names, in run order
pub const NAMES: [&str; 3] = ["extra", "frozen", "list_of_enums"];

/// Returns every experiment in run order.
pub fn all() -> Vec<Experiment> {
    vec![
        extra::experiment(),
        frozen::experiment(),
        list_of_enums::experiment(),
    ]
}

/// Looks up an experiment by name.
pub fn find(name: &str) -> Option<Experiment> {
    all().into_iter().find(|experiment| experiment.name == name)
}
