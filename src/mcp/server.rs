//! unitconv MCP Server Implementation
//!
//! Implements the MCP server with all conversion tools.

use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::conversion::UnitConverter;
use crate::models::UnitDefinition;
use crate::presets::Preset;
use crate::tools::convert;
use crate::tools::status::StatusTracker;

/// unitconv MCP Service
#[derive(Clone)]
pub struct UnitconvService {
    status_tracker: Arc<StatusTracker>,
    /// Session ladder shared by every tool call; registration and reads are
    /// serialized through this lock
    converter: Arc<Mutex<UnitConverter>>,
    tool_router: ToolRouter<UnitconvService>,
}

impl UnitconvService {
    pub fn new(initial_preset: Preset) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(initial_preset)),
            converter: Arc::new(Mutex::new(initial_preset.converter())),
            tool_router: Self::tool_router(),
        }
    }

    fn lock_converter(&self) -> Result<MutexGuard<'_, UnitConverter>, McpError> {
        self.converter
            .lock()
            .map_err(|e| McpError::internal_error(format!("Converter lock poisoned: {}", e), None))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

/// One unit of a ladder
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UnitParam {
    /// Unit name (e.g., "KB")
    #[serde(alias = "unit")]
    pub name: String,
    /// Multiplier relative to the previous unit (absolute scale for the first unit)
    #[serde(alias = "unitValue")]
    pub relative_multiplier: f64,
}

impl From<UnitParam> for UnitDefinition {
    fn from(p: UnitParam) -> Self {
        UnitDefinition::new(p.name, p.relative_multiplier)
    }
}

fn into_definitions(units: Vec<UnitParam>) -> Vec<UnitDefinition> {
    units.into_iter().map(UnitDefinition::from).collect()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertToParams {
    /// Value to convert
    pub value: f64,
    /// Unit the value is in (e.g., "MB")
    pub from_unit: String,
    /// Unit to convert to (e.g., "Byte")
    pub to_unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatBestParams {
    /// Value in base units (the first unit of the ladder)
    pub value: f64,
    /// Ladder to use for this call instead of the session ladder (optional)
    pub units: Option<Vec<UnitParam>>,
    /// Built-in ladder to use for this call instead of the session ladder (optional)
    pub preset: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RegisterUnitsParams {
    /// Units to append after the session ladder's largest unit, smallest first
    pub units: Vec<UnitParam>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UsePresetParams {
    /// Preset name: computer-capacity, distance, power-capacity or power-usage
    pub preset: String,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl UnitconvService {
    // --- Status ---

    #[tool(description = "Get the current status of the unitconv service including build info, session ladder size, and process information")]
    fn unitconv_status(&self) -> Result<CallToolResult, McpError> {
        let converter = self.lock_converter()?;
        let status = self.status_tracker.get_status(&converter);
        json_result(&status)
    }

    #[tool(description = "Get instructions for using unit ladders. Call this when unsure how relative multipliers or best-unit formatting work.")]
    fn unitconv_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERSION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERSION_INSTRUCTIONS)]))
    }

    // --- Conversion ---

    #[tool(description = "Convert a value from one unit of the session ladder to another")]
    fn convert_to(&self, Parameters(p): Parameters<ConvertToParams>) -> Result<CallToolResult, McpError> {
        let converter = self.lock_converter()?;
        let result = convert::convert_value(&converter, p.value, &p.from_unit, &p.to_unit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Express a base-unit value in its most readable unit. Uses the session ladder unless `units` or `preset` is given.")]
    fn format_best(&self, Parameters(p): Parameters<FormatBestParams>) -> Result<CallToolResult, McpError> {
        let result = match (p.units, p.preset) {
            (Some(_), Some(_)) => {
                return Err(McpError::invalid_params("Pass either units or preset, not both", None));
            }
            (None, Some(preset)) => convert::format_value_in_preset(p.value, &preset)
                .map_err(|e| McpError::invalid_params(e, None))?,
            (units, None) => {
                let converter = self.lock_converter()?;
                convert::format_value(&converter, p.value, units.map(into_definitions))
            }
        };
        json_result(&result)
    }

    // --- Ladders ---

    #[tool(description = "List the session ladder's units with relative multipliers and absolute scales")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        let converter = self.lock_converter()?;
        json_result(&convert::list_units(&converter))
    }

    #[tool(description = "List the built-in unit ladders")]
    fn list_presets(&self) -> Result<CallToolResult, McpError> {
        json_result(&convert::list_presets())
    }

    #[tool(description = "Append units to the session ladder. Order is preserved; each multiplier is relative to the unit before it.")]
    fn register_units(&self, Parameters(p): Parameters<RegisterUnitsParams>) -> Result<CallToolResult, McpError> {
        let mut converter = self.lock_converter()?;
        let result = convert::register_units(&mut converter, into_definitions(p.units));
        json_result(&result)
    }

    #[tool(description = "Replace the session ladder with a built-in one")]
    fn use_preset(&self, Parameters(p): Parameters<UsePresetParams>) -> Result<CallToolResult, McpError> {
        let mut converter = self.lock_converter()?;
        let result = convert::use_preset(&mut converter, &p.preset)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for UnitconvService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "unitconv".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Unit Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "unitconv - Convert values along ordered unit ladders and pick the most readable unit. \
                 Call unitconv_instructions first if unsure how relative multipliers work. \
                 Conversion: convert_to, format_best. \
                 Ladders: list_units, list_presets, register_units, use_preset. \
                 Status: unitconv_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_param_accepts_legacy_fields() {
        let p: UnitParam = serde_json::from_str(r#"{"unit": "KB", "unitValue": 1024}"#).unwrap();
        let def = UnitDefinition::from(p);
        assert_eq!(def, UnitDefinition::new("KB", 1024.0));
    }

    #[test]
    fn test_service_starts_with_preset() {
        let service = UnitconvService::new(Preset::PowerUsage);
        let converter = service.lock_converter().unwrap();
        assert_eq!(converter.get_units()[0].name, "Wh");
    }
}
