//! Unit conversion module
//!
//! Resolves unit ladders to absolute scales, converts between units and
//! picks the best unit for display.

pub mod converter;
pub mod format;
pub mod resolver;

pub use converter::{ConvertError, ConvertResult, UnitConverter};
pub use format::best_unit;
pub use resolver::{resolve, ResolvedUnit};
