//! CLI command implementations.
//!
//! Each submodule owns one command: its configuration struct, input
//! handling, and rendering. The engine stays pure; everything effectful
//! happens here.

pub mod analyze;
pub mod init;
pub mod sensitivity;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_workspace;
pub use sensitivity::{handle_sensitivity, SensitivityConfig};

use crate::config::ModelConfig;
use crate::engine::ValueStreamKey;
use crate::errors::RoiscopeError;
use crate::formatting::ColorMode;
use anyhow::Result;
use std::collections::BTreeSet;
use std::path::Path;

/// Parse `--disable-stream` keys, rejecting unknown names early.
pub(crate) fn parse_disabled_streams(keys: &[String]) -> Result<BTreeSet<ValueStreamKey>> {
    let mut disabled = BTreeSet::new();
    for key in keys {
        let parsed = ValueStreamKey::parse(key).ok_or_else(|| {
            RoiscopeError::validation(format!(
                "unknown value stream '{}' (expected one of: roas, personalization, martech, content, campaign, ops, attribution)",
                key
            ))
        })?;
        disabled.insert(parsed);
    }
    Ok(disabled)
}

/// Apply `--color` before any output happens.
pub(crate) fn apply_color_mode(color: &str) -> Result<()> {
    let mode = ColorMode::parse(color).ok_or_else(|| {
        RoiscopeError::validation(format!("unknown color mode '{color}' (auto, always, never)"))
    })?;
    colored::control::set_override(mode.should_use_color());
    Ok(())
}

/// Load the model config: an explicit path wins, otherwise the cached
/// working-directory config.
pub(crate) fn load_model_config(explicit: Option<&Path>) -> Result<ModelConfig> {
    match explicit {
        Some(path) => {
            ModelConfig::load(Some(path)).map_err(|e| RoiscopeError::config(e).into())
        }
        None => Ok(crate::config::get_model_config().clone()),
    }
}
