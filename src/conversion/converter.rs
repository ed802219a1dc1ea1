//! Unit converter
//!
//! Owns an append-only unit ladder and converts magnitudes between its
//! rungs. Absolute scales are recomputed on every call, so registering more
//! units never invalidates anything.

use thiserror::Error;

use super::format::best_unit;
use super::resolver::{resolve, scale_of, ResolvedUnit};
use crate::models::{ComplexValueInput, ConversionResult, UnitDefinition, UnitSystem};
use crate::presets::Preset;

/// Conversion error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Unit not found: {0}")]
    UnitNotFound(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Converter over a single ordered unit ladder
#[derive(Debug, Clone, Default)]
pub struct UnitConverter {
    units: UnitSystem,
}

impl UnitConverter {
    /// Create a converter with no registered units
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter preloaded with a ladder
    pub fn with_units<I>(units: I) -> Self
    where
        I: IntoIterator<Item = UnitDefinition>,
    {
        let mut converter = Self::new();
        converter.register_unit(units);
        converter
    }

    /// Create a converter for one of the built-in ladders
    pub fn from_preset(preset: Preset) -> Self {
        Self::with_units(preset.units())
    }

    /// Append units after the ones already registered
    ///
    /// Order is kept exactly as given. Duplicate names are accepted, but
    /// lookups only ever see the first unit with a given name.
    pub fn register_unit<I>(&mut self, units: I)
    where
        I: IntoIterator<Item = UnitDefinition>,
    {
        for unit in units {
            if self.units.find(&unit.name).is_some() {
                tracing::warn!(
                    "Unit '{}' is already registered; lookups will use the first definition",
                    unit.name
                );
            }
            tracing::debug!(
                "Registering unit '{}' (x{})",
                unit.name,
                unit.relative_multiplier
            );
            self.units.push(unit);
        }
    }

    /// Convert `magnitude` from one registered unit to another
    ///
    /// Fails with [`ConvertError::UnitNotFound`] naming `from_unit` if it is
    /// missing, otherwise naming `to_unit`. No rounding is applied.
    pub fn convert_to(&self, magnitude: f64, from_unit: &str, to_unit: &str) -> ConvertResult<f64> {
        let resolved = self.resolved();

        let from_scale = scale_of(&resolved, from_unit)
            .ok_or_else(|| ConvertError::UnitNotFound(from_unit.to_string()))?;
        let to_scale = scale_of(&resolved, to_unit)
            .ok_or_else(|| ConvertError::UnitNotFound(to_unit.to_string()))?;

        Ok(magnitude * from_scale / to_scale)
    }

    /// Express a base-unit magnitude in its best unit
    ///
    /// Uses `override_units` when given, otherwise the registered ladder.
    pub fn format_best(&self, magnitude: f64, override_units: Option<&[UnitDefinition]>) -> ConversionResult {
        best_unit(magnitude, override_units.unwrap_or(&self.units[..]))
    }

    /// Express a magnitude in the best unit of its own ladder
    pub fn format_complex(&self, input: &ComplexValueInput) -> ConversionResult {
        best_unit(input.magnitude, &input.units)
    }

    /// Registered units in their stored, relative form
    pub fn get_units(&self) -> &UnitSystem {
        &self.units
    }

    /// Registered units with their absolute scales
    pub fn resolved(&self) -> Vec<ResolvedUnit<'_>> {
        resolve(&self.units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity() -> UnitConverter {
        UnitConverter::with_units(UnitSystem::from_table(&[
            ("Byte", 1.0),
            ("KB", 1024.0),
            ("MB", 1024.0),
            ("GB", 1024.0),
        ]))
    }

    #[test]
    fn test_convert_capacity() {
        let converter = capacity();
        assert_eq!(converter.convert_to(1024.0, "Byte", "KB").unwrap(), 1.0);
        assert_eq!(converter.convert_to(1.0, "MB", "Byte").unwrap(), 1_048_576.0);
        assert_eq!(converter.convert_to(1.0, "KB", "MB").unwrap(), 0.0009765625);
    }

    #[test]
    fn test_convert_identity() {
        let converter = capacity();
        for name in ["Byte", "KB", "MB", "GB"] {
            assert_eq!(converter.convert_to(3.75, name, name).unwrap(), 3.75);
        }
    }

    #[test]
    fn test_convert_round_trip() {
        let converter = capacity();
        let names = ["Byte", "KB", "MB", "GB"];
        for a in names {
            for b in names {
                let there = converter.convert_to(123.456, a, b).unwrap();
                let back = converter.convert_to(there, b, a).unwrap();
                assert!((back - 123.456).abs() < 1e-9, "{} -> {} -> {}", a, b, a);
            }
        }
    }

    #[test]
    fn test_unknown_unit() {
        let converter = capacity();
        assert_eq!(
            converter.convert_to(1.0, "Byte", "Fooz"),
            Err(ConvertError::UnitNotFound("Fooz".to_string()))
        );
        // From is checked before to
        assert_eq!(
            converter.convert_to(1.0, "Bar", "Fooz"),
            Err(ConvertError::UnitNotFound("Bar".to_string()))
        );
    }

    #[test]
    fn test_error_message() {
        let err = ConvertError::UnitNotFound("Fooz".to_string());
        assert_eq!(err.to_string(), "Unit not found: Fooz");
    }

    #[test]
    fn test_register_appends_in_order() {
        let mut converter = UnitConverter::new();
        converter.register_unit(vec![UnitDefinition::new("mm", 1.0), UnitDefinition::new("cm", 10.0)]);
        converter.register_unit(vec![UnitDefinition::new("m", 100.0)]);

        let names: Vec<&str> = converter.get_units().names().collect();
        assert_eq!(names, vec!["mm", "cm", "m"]);
        assert_eq!(converter.get_units()[2].relative_multiplier, 100.0);
        assert_eq!(converter.convert_to(1.0, "m", "mm").unwrap(), 1000.0);
    }

    #[test]
    fn test_register_keeps_duplicates() {
        let mut converter = UnitConverter::with_units(vec![UnitDefinition::new("a", 1.0)]);
        converter.register_unit(vec![UnitDefinition::new("a", 10.0)]);
        assert_eq!(converter.get_units().len(), 2);
        assert_eq!(converter.convert_to(5.0, "a", "a").unwrap(), 5.0);
    }

    #[test]
    fn test_format_best_registered() {
        let converter = capacity();
        assert_eq!(converter.format_best(1_048_576.0, None), ConversionResult::new(1.0, "MB"));
        assert_eq!(converter.format_best(1500.0, None), ConversionResult::new(1.46, "KB"));
    }

    #[test]
    fn test_format_best_override() {
        let converter = capacity();
        let watts = UnitSystem::from_table(&[("W", 1.0), ("kW", 1000.0)]);
        assert_eq!(converter.format_best(1500.0, Some(&watts[..])), ConversionResult::new(1.5, "kW"));
    }

    #[test]
    fn test_format_best_empty_converter() {
        let converter = UnitConverter::new();
        assert_eq!(converter.format_best(77.0, None), ConversionResult::new(77.0, ""));
    }

    #[test]
    fn test_format_complex() {
        let converter = UnitConverter::new();
        let input = ComplexValueInput::new(
            2048.0,
            UnitSystem::from_table(&[("Byte", 1.0), ("KB", 1024.0)]),
        );
        assert_eq!(converter.format_complex(&input), ConversionResult::new(2.0, "KB"));
    }

    #[test]
    fn test_resolved_reflects_registration() {
        let mut converter = UnitConverter::with_units(UnitSystem::from_table(&[("W", 1.0)]));
        assert_eq!(converter.resolved().len(), 1);
        converter.register_unit(UnitSystem::from_table(&[("kW", 1000.0)]));
        let last = converter.resolved()[1];
        assert_eq!(last.name, "kW");
        assert_eq!(last.scale, 1000.0);
    }
}
