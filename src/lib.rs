//! modelprobe - behavioral experiments for schema validation policies
//!
//! Probes how a schema layer treats extra fields, frozen instances, and
//! null inside enum sequences, plus two small utilities: a rounding
//! comparison and path registration.

pub mod cli;
pub mod experiments;
pub mod model;
pub mod observability;
pub mod pathreg;
pub mod probe;
pub mod rounding;
pub mod schema;
