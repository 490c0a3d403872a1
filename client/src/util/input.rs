//! Numeric form input parsing.
//!
//! Calculator inputs never error: text that is not a number falls back, and
//! numbers outside the slider range clamp to the nearest bound.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use tools::currency::parse_amount;
use tools::emi::clamp_finite;

/// Parse `raw` (grouping commas allowed) and clamp it into `min..=max`.
/// Blank or non-numeric text yields `min`.
pub fn parse_clamped(raw: &str, min: f64, max: f64) -> f64 {
    clamp_finite(parse_amount(raw), min, max)
}
