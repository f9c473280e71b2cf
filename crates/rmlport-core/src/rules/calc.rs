//! Folding of the restricted `calc()` form used throughout the test suite:
//! `calc(<a><unit> + <b><unit> / <n>)`.
//!
//! Only expressions whose terms share a unit are folded. Anything else stays as written, and
//! the `calc` gate rejects the document.

use regex::{Captures, Regex};
use std::sync::OnceLock;

pub(crate) const CALC_PATTERN: &str = r"(?i)calc\(\s*([+-]?[0-9]*\.?[0-9]+)([a-z%]*)\s*([+-])\s*([0-9]*\.?[0-9]+)([a-z%]*)\s*/\s*([0-9]+)\s*\)";

fn calc_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let anchored = format!("^(?:{})$", CALC_PATTERN.trim_start_matches("(?i)"));
        Regex::new(&format!("(?i){anchored}")).expect("valid regex")
    })
}

/// Replacement callback for [`CALC_PATTERN`].
pub(crate) fn rewrite_calc(caps: &Captures<'_>) -> String {
    fold(caps).unwrap_or_else(|| caps[0].to_string())
}

/// Folds a complete `calc(...)` expression, e.g. `calc(10px + 20px / 2)` to `20px`.
///
/// Returns `None` for anything outside the supported form, for mismatched units and for a
/// zero divisor.
pub fn reduce_calc(expr: &str) -> Option<String> {
    let caps = calc_regex().captures(expr.trim())?;
    fold(&caps)
}

fn fold(caps: &Captures<'_>) -> Option<String> {
    let base: f64 = caps[1].parse().ok()?;
    let base_unit = caps[2].to_ascii_lowercase();
    let op = &caps[3];
    let term: f64 = caps[4].parse().ok()?;
    let term_unit = caps[5].to_ascii_lowercase();
    let divisor: u32 = caps[6].parse().ok()?;

    if base_unit != term_unit || divisor == 0 {
        return None;
    }

    let quotient = term / f64::from(divisor);
    let value = if op == "-" {
        base - quotient
    } else {
        base + quotient
    };
    Some(format!("{}{base_unit}", format_number(value)))
}

/// Formats a length without float noise: integers print bare, fractions keep at most four
/// decimals.
pub(crate) fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{rounded:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}
