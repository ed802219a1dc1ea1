//! unitconv Status Tool
//!
//! Provides runtime status information about the unitconv service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::conversion::UnitConverter;
use crate::presets::Preset;

/// Usage instructions for AI assistants
pub const CONVERSION_INSTRUCTIONS: &str = r#"
# unitconv Instructions

## Unit Ladders

A unit ladder is an ordered list of units. Each unit has a `relative_multiplier`:

- The FIRST unit's multiplier is its absolute scale (usually 1, the base unit)
- Every LATER unit's multiplier is relative to the unit right before it

Example (distance):

| name | relative_multiplier | absolute scale |
|------|---------------------|----------------|
| mm   | 1                   | 1              |
| cm   | 10                  | 10             |
| m    | 100                 | 1,000          |
| km   | 1000                | 1,000,000      |

**Order matters.** Units are never sorted; append them smallest to largest.

## Tools

- `convert_to` - convert a value between two units of the session ladder
- `format_best` - express a base-unit value in its most readable unit
  - pass `units` to use your own ladder for one call
  - pass `preset` to use a built-in ladder for one call
- `list_units` - show the session ladder with absolute scales
- `list_presets` - show the built-in ladders
- `register_units` - append units to the session ladder
- `use_preset` - reset the session ladder to a built-in one

## Formatting Rules

- `format_best` expects the value in BASE units (the first unit of the ladder)
- Whole results are returned as-is (`1 MB`), others are rounded to 2 decimals (`1.46 KB`)
- Values smaller than the first unit are shown in the first unit
- Negative values pick the same unit as their positive counterpart

## Common Mistakes

- Passing `100` to `format_best` meaning "100 cm" - convert to the base unit first
  (`convert_to(100, "cm", "mm")` then `format_best(1000)` gives `1 m`)
- Giving absolute scales (1, 1024, 1048576) instead of step multipliers (1, 1024, 1024)
"#;

/// Runtime status of the unitconv service
#[derive(Debug, Clone, Serialize)]
pub struct UnitconvStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Session information
    pub initial_preset: Preset,
    pub registered_units: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub memory_usage: String,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    initial_preset: Preset,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(initial_preset: Preset) -> Self {
        Self {
            start_time: Instant::now(),
            initial_preset,
        }
    }

    /// Get the current status
    pub fn get_status(&self, converter: &UnitConverter) -> UnitconvStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        let memory_usage = Preset::ComputerCapacity
            .converter()
            .format_best(memory_usage_bytes as f64, None)
            .to_string();

        UnitconvStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            initial_preset: self.initial_preset,
            registered_units: converter.get_units().len(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            memory_usage,
        }
    }
}
