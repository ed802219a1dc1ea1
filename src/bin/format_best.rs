//! Utility to print a value in its most readable unit
//!
//! Usage: format_best <value> [preset]

use unitconv::Preset;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let value: f64 = args
        .next()
        .ok_or("Usage: format_best <value> [preset]")?
        .parse()?;

    let preset = match args.next() {
        Some(name) => Preset::parse(&name).ok_or_else(|| unitconv::ConvertError::UnknownPreset(name))?,
        None => Preset::ComputerCapacity,
    };

    let result = preset.converter().format_best(value, None);
    println!("{}", result);

    Ok(())
}
