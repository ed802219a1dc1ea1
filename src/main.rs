//! Unit Converter (unitconv)
//!
//! An MCP server for unit conversion along ordered unit ladders.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod build_info;
mod conversion;
mod mcp;
mod models;
mod presets;
mod tools;

use mcp::UnitconvService;
use presets::Preset;

/// Get the initial session preset from environment or use default
fn get_initial_preset() -> Result<Preset, String> {
    match std::env::var("UNITCONV_PRESET") {
        Ok(name) => Preset::parse(&name).ok_or_else(|| format!("Unknown preset in UNITCONV_PRESET: {}", name)),
        Err(_) => Ok(Preset::ComputerCapacity),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("unitconv=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let preset = get_initial_preset()?;
    tracing::info!("Session ladder: {} ({} units)", preset.as_str(), preset.table().len());

    let service = UnitconvService::new(preset);

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
