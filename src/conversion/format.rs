//! Best-unit selection
//!
//! Picks the largest rung whose absolute scale does not exceed the
//! magnitude and re-expresses the magnitude in it.

use super::resolver::{resolve, ResolvedUnit};
use crate::models::{ConversionResult, UnitDefinition};

/// Express a base-unit magnitude in the most readable unit of `units`
///
/// Rungs are scanned from the last (largest) to the first; the first one
/// whose scale is at most `|magnitude|` wins. A magnitude smaller than every
/// rung is expressed in the first rung, and an empty ladder passes the
/// magnitude through with an empty unit name.
pub fn best_unit(magnitude: f64, units: &[UnitDefinition]) -> ConversionResult {
    let resolved = resolve(units);

    let Some(selected) = select(&resolved, magnitude.abs()) else {
        return ConversionResult::new(magnitude, "");
    };

    let quotient = magnitude / selected.scale;
    ConversionResult::new(round_for_display(quotient), selected.name)
}

fn select<'r, 'a>(resolved: &'r [ResolvedUnit<'a>], abs_magnitude: f64) -> Option<&'r ResolvedUnit<'a>> {
    resolved
        .iter()
        .rev()
        .find(|r| r.scale <= abs_magnitude)
        .or_else(|| resolved.first())
}

/// Integers pass through; everything else is rounded to two decimals
fn round_for_display(value: f64) -> f64 {
    if value.fract() == 0.0 {
        value
    } else {
        (value * 100.0).round() / 100.0
    }
}
