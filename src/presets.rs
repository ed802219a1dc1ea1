//! Built-in unit ladders
//!
//! Each preset is a constant `(name, relative multiplier)` table handed to
//! [`UnitConverter::with_units`].

use serde::{Deserialize, Serialize};

use crate::conversion::UnitConverter;
use crate::models::UnitSystem;

// ============================================================================
// Ladder Tables
// ============================================================================

/// Byte through yottabyte, binary steps
pub const COMPUTER_CAPACITY: &[(&str, f64)] = &[
    ("Byte", 1.0),
    ("KB", 1024.0),
    ("MB", 1024.0),
    ("GB", 1024.0),
    ("TB", 1024.0),
    ("PB", 1024.0),
    ("EB", 1024.0),
    ("ZB", 1024.0),
    ("YB", 1024.0),
];

/// Millimeter, centimeter, meter, kilometer
pub const DISTANCE: &[(&str, f64)] = &[
    ("mm", 1.0),
    ("cm", 10.0),   // 1 cm = 10 mm
    ("m", 100.0),   // 1 m = 100 cm
    ("km", 1000.0), // 1 km = 1000 m
];

/// Watt through terawatt
pub const POWER_CAPACITY: &[(&str, f64)] = &[
    ("W", 1.0),
    ("kW", 1000.0),
    ("MW", 1000.0),
    ("GW", 1000.0),
    ("TW", 1000.0),
];

/// Watt-hour through terawatt-hour
pub const POWER_USAGE: &[(&str, f64)] = &[
    ("Wh", 1.0),
    ("kWh", 1000.0),
    ("MWh", 1000.0),
    ("GWh", 1000.0),
    ("TWh", 1000.0),
];

// ============================================================================
// Preset Enum
// ============================================================================

/// A named built-in ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    ComputerCapacity,
    Distance,
    PowerCapacity,
    PowerUsage,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::ComputerCapacity,
        Preset::Distance,
        Preset::PowerCapacity,
        Preset::PowerUsage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::ComputerCapacity => "computer-capacity",
            Preset::Distance => "distance",
            Preset::PowerCapacity => "power-capacity",
            Preset::PowerUsage => "power-usage",
        }
    }

    /// Parse from a preset name, accepting kebab or snake case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "computer-capacity" | "capacity" | "bytes" => Some(Preset::ComputerCapacity),
            "distance" | "length" => Some(Preset::Distance),
            "power-capacity" | "power" => Some(Preset::PowerCapacity),
            "power-usage" | "energy" => Some(Preset::PowerUsage),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Preset::ComputerCapacity => "Computer Capacity",
            Preset::Distance => "Distance",
            Preset::PowerCapacity => "Power Capacity",
            Preset::PowerUsage => "Power Usage",
        }
    }

    pub fn table(&self) -> &'static [(&'static str, f64)] {
        match self {
            Preset::ComputerCapacity => COMPUTER_CAPACITY,
            Preset::Distance => DISTANCE,
            Preset::PowerCapacity => POWER_CAPACITY,
            Preset::PowerUsage => POWER_USAGE,
        }
    }

    pub fn units(&self) -> UnitSystem {
        UnitSystem::from_table(self.table())
    }

    pub fn converter(&self) -> UnitConverter {
        UnitConverter::from_preset(*self)
    }
}
