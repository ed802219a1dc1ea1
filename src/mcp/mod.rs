//! MCP module
//!
//! Exposes the converter as MCP tools over stdio.

mod server;

pub use server::UnitconvService;
