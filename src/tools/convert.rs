//! Conversion MCP Tools
//!
//! Tool functions over a session converter. Errors are returned as plain
//! strings for the MCP layer to wrap.

use serde::Serialize;

use crate::conversion::{ConvertError, UnitConverter};
use crate::models::{ComplexValueInput, ConversionResult, UnitDefinition};
use crate::presets::Preset;

/// Response for convert_to
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub magnitude: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

/// Response for format_best
#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub input: f64,
    pub magnitude: f64,
    pub unit: String,
    pub display: String,
}

impl FormatResponse {
    fn new(input: f64, result: ConversionResult) -> Self {
        Self {
            input,
            display: result.to_string(),
            magnitude: result.magnitude,
            unit: result.unit,
        }
    }
}

/// A registered unit with both its stored and absolute scale
#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub name: String,
    pub relative_multiplier: f64,
    pub absolute_scale: f64,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub units: Vec<UnitSummary>,
    pub total: usize,
}

/// Summary of a built-in ladder
#[derive(Debug, Serialize)]
pub struct PresetSummary {
    pub preset: Preset,
    pub name: &'static str,
    pub units: Vec<&'static str>,
}

/// Response for list_presets
#[derive(Debug, Serialize)]
pub struct ListPresetsResponse {
    pub presets: Vec<PresetSummary>,
}

/// Response for register_units and use_preset
#[derive(Debug, Serialize)]
pub struct RegisterUnitsResponse {
    pub success: bool,
    pub registered: usize,
    pub total_units: usize,
}

/// Convert a magnitude between two registered units
pub fn convert_value(
    converter: &UnitConverter,
    magnitude: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<ConvertResponse, String> {
    let result = converter
        .convert_to(magnitude, from_unit, to_unit)
        .map_err(|e| e.to_string())?;

    Ok(ConvertResponse {
        magnitude,
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
        result,
    })
}

/// Format a magnitude in its best unit
///
/// `units` overrides the session ladder for this call only.
pub fn format_value(converter: &UnitConverter, magnitude: f64, units: Option<Vec<UnitDefinition>>) -> FormatResponse {
    let result = match units {
        Some(units) => converter.format_complex(&ComplexValueInput::new(magnitude, units)),
        None => converter.format_best(magnitude, None),
    };
    FormatResponse::new(magnitude, result)
}

/// Format a magnitude in the best unit of a built-in ladder
pub fn format_value_in_preset(magnitude: f64, preset: &str) -> Result<FormatResponse, String> {
    let preset = parse_preset(preset)?;
    let result = crate::conversion::best_unit(magnitude, &preset.units());
    Ok(FormatResponse::new(magnitude, result))
}

/// List the session's registered units
pub fn list_units(converter: &UnitConverter) -> ListUnitsResponse {
    let units: Vec<UnitSummary> = converter
        .get_units()
        .iter()
        .zip(converter.resolved())
        .map(|(unit, resolved)| UnitSummary {
            name: unit.name.clone(),
            relative_multiplier: unit.relative_multiplier,
            absolute_scale: resolved.scale,
        })
        .collect();

    ListUnitsResponse {
        total: units.len(),
        units,
    }
}

/// List the built-in ladders
pub fn list_presets() -> ListPresetsResponse {
    let presets = Preset::ALL
        .iter()
        .map(|preset| PresetSummary {
            preset: *preset,
            name: preset.display_name(),
            units: preset.table().iter().map(|(name, _)| *name).collect(),
        })
        .collect();

    ListPresetsResponse { presets }
}

/// Append units to the session ladder
pub fn register_units(converter: &mut UnitConverter, units: Vec<UnitDefinition>) -> RegisterUnitsResponse {
    let registered = units.len();
    converter.register_unit(units);

    RegisterUnitsResponse {
        success: true,
        registered,
        total_units: converter.get_units().len(),
    }
}

/// Replace the session converter with a fresh built-in ladder
pub fn use_preset(converter: &mut UnitConverter, preset: &str) -> Result<RegisterUnitsResponse, String> {
    let preset = parse_preset(preset)?;
    *converter = preset.converter();
    tracing::info!("Session converter switched to preset '{}'", preset.as_str());

    let total_units = converter.get_units().len();
    Ok(RegisterUnitsResponse {
        success: true,
        registered: total_units,
        total_units,
    })
}

fn parse_preset(name: &str) -> Result<Preset, String> {
    Preset::parse(name).ok_or_else(|| ConvertError::UnknownPreset(name.to_string()).to_string())
}
