//! Per-channel ROAS comparator.
//!
//! The benchmark channel table is scaled so its blended return matches the
//! organization's reported blended ROAS, then each channel's configured lift
//! is applied. Lift is clamped at zero, so the optimized value can never
//! fall below the current one.

use crate::config::ModelConfig;
use crate::engine::inputs::MartechAndMedia;
use serde::{Deserialize, Serialize};

/// Current vs. optimized return multiple for one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRoas {
    pub key: String,
    pub label: String,
    pub current_roas: f64,
    pub lift_pct: f64,
    pub ai_optimized_roas: f64,
}

/// Compare current and optimized ROAS across the configured channel table.
pub fn compare_channels(martech: &MartechAndMedia, config: &ModelConfig) -> Vec<ChannelRoas> {
    let reference_blend = if config.channels.is_empty() {
        0.0
    } else {
        config.channels.iter().map(|c| c.base_roas).sum::<f64>() / config.channels.len() as f64
    };
    let scale = if reference_blend > 0.0 && martech.current_blended_roas > 0.0 {
        martech.current_blended_roas / reference_blend
    } else {
        1.0
    };

    config
        .channels
        .iter()
        .map(|spec| {
            let current_roas = (spec.base_roas * scale).max(0.0);
            let lift_pct = spec.lift_pct.max(0.0);
            ChannelRoas {
                key: spec.key.clone(),
                label: spec.label.clone(),
                current_roas,
                lift_pct,
                ai_optimized_roas: current_roas * (1.0 + lift_pct / 100.0),
            }
        })
        .collect()
}
