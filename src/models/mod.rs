//! Data models
//!
//! Unit ladders and the values passed through the converter.

mod unit;
mod value;

pub use unit::{UnitDefinition, UnitSystem};
pub use value::{ComplexValueInput, ConversionResult};
