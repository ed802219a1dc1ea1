//! Formatter input and output values

use std::fmt;

use serde::{Deserialize, Serialize};

use super::UnitSystem;

/// A magnitude bundled with the unit system it should be expressed in
///
/// The magnitude is in base units of `units` (scale 1 of the first rung).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexValueInput {
    #[serde(alias = "value")]
    pub magnitude: f64,
    #[serde(alias = "unit")]
    pub units: UnitSystem,
}

impl ComplexValueInput {
    pub fn new(magnitude: f64, units: impl Into<UnitSystem>) -> Self {
        Self {
            magnitude,
            units: units.into(),
        }
    }
}

/// A magnitude re-expressed in its best unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub magnitude: f64,
    /// Selected unit name; empty when the unit system was empty
    pub unit: String,
}

impl ConversionResult {
    pub fn new(magnitude: f64, unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.magnitude.fract() == 0.0 {
            write!(f, "{}", self.magnitude)?;
        } else {
            write!(f, "{:.2}", self.magnitude)?;
        }
        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}
