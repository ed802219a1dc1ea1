//! Unit Converter (unitconv) Library
//!
//! Converts magnitudes along ordered unit ladders and picks the most
//! readable unit for display.
//!
//! ```
//! use unitconv::{Preset, UnitConverter, UnitDefinition};
//!
//! let converter = Preset::ComputerCapacity.converter();
//! assert_eq!(converter.convert_to(1024.0, "Byte", "KB").unwrap(), 1.0);
//! assert_eq!(converter.format_best(1500.0, None).to_string(), "1.46 KB");
//!
//! let distance = UnitConverter::with_units(vec![
//!     UnitDefinition::new("mm", 1.0),
//!     UnitDefinition::new("cm", 10.0),
//!     UnitDefinition::new("m", 100.0),
//! ]);
//! assert_eq!(distance.convert_to(1.0, "m", "mm").unwrap(), 1000.0);
//! ```

pub mod build_info;
pub mod conversion;
pub mod mcp;
pub mod models;
pub mod presets;
pub mod tools;

pub use conversion::{ConvertError, ConvertResult, UnitConverter};
pub use models::{ComplexValueInput, ConversionResult, UnitDefinition, UnitSystem};
pub use presets::Preset;
