//! Nearest-even versus round-half-up
//!
//! Default float rounding resolves ties to the even neighbour, so 0.5,
//! 2.5, 4.5 and 6.5 all round down. Round-half-up resolves ties away from
//! zero. This module only illustrates the difference; nothing asserts it.

use std::fmt::Write;

use serde::Serialize;

/// Rounds to the nearest integer, ties to even.
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Rounds to the nearest integer, ties away from zero.
pub fn round_half_up(value: f64) -> f64 {
    value.round()
}

/// `i / 2` for every odd `i` in `range`: 0.5, 1.5, ... for `1..15`.
pub fn half_integers(range: std::ops::Range<i64>) -> Vec<f64> {
    range
        .filter(|i| i % 2 != 0)
        .map(|i| i as f64 / 2.0)
        .collect()
}

/// The values compared by default: 0.5 through 6.5.
pub fn default_values() -> Vec<f64> {
    half_integers(1..15)
}

/// One value under both rounding modes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundingRow {
    pub value: f64,
    pub half_even: i64,
    pub half_up: i64,
}

pub fn compare(values: &[f64]) -> Vec<RoundingRow> {
    values
        .iter()
        .map(|&value| RoundingRow {
            value,
            half_even: round_half_even(value) as i64,
            half_up: round_half_up(value) as i64,
        })
        .collect()
}

/// Renders both modes as `value => result` lines, one block per mode.
pub fn render(rows: &[RoundingRow]) -> String {
    let mut out = String::from("# Standard rounding (ties to even)\n");
    for row in rows {
        let _ = writeln!(out, "{} => {}", row.value, row.half_even);
    }

    out.push_str("\n# Rounding half up (ties away from zero)\n");
    for row in rows {
        let _ = writeln!(out, "{} => {}", row.value, row.half_up);
    }
    out
}
