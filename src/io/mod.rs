//! File helpers and output writers.

pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::engine::inputs::Scenario;
use crate::errors::RoiscopeError;
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| RoiscopeError::io_with_path(e.to_string(), path).into())
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| RoiscopeError::io_with_path(e.to_string(), path).into())
}

/// Load a scenario (the six input groups) from a JSON file.
pub fn read_scenario(path: &Path) -> Result<Scenario> {
    let raw = read_file(path)?;
    let scenario: Scenario = serde_json::from_str(&raw)
        .map_err(|e| RoiscopeError::parse(e.to_string(), path))?;
    Ok(scenario)
}

/// Write a scenario as pretty JSON, the shareable representation.
pub fn write_scenario(path: &Path, scenario: &Scenario) -> Result<()> {
    let json = serde_json::to_string_pretty(scenario)?;
    write_file(path, &format!("{json}\n"))
}
