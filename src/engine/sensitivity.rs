//! Two-factor sensitivity grid.
//!
//! Varies the two assumptions with the most payback leverage — content time
//! savings (rows) and media ROAS lift (columns) — at -swing / base / +swing
//! while holding everything else fixed, and re-runs the full return model
//! for each of the nine combinations. The center cell runs through the same
//! code path with unit factors, so it reproduces the unperturbed payback
//! exactly.

use crate::config::ModelConfig;
use crate::engine::inputs::{ImprovementAssumptions, Scenario};
use crate::engine::value::ValueStreamKey;
use crate::engine::{baseline, returns, value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 3x3 payback grid with labeled axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityGrid {
    pub row_label: String,
    pub col_label: String,
    /// Perturbed row-axis assumption values, percent.
    pub row_values: [f64; 3],
    /// Perturbed column-axis assumption values, percent.
    pub col_values: [f64; 3],
    /// Expected-scenario payback months per cell; `None` is beyond horizon.
    pub paybacks: [[Option<f64>; 3]; 3],
}

/// Build the grid by re-running the value and return models per cell.
pub fn compute_sensitivity(
    scenario: &Scenario,
    disabled: &BTreeSet<ValueStreamKey>,
    config: &ModelConfig,
) -> SensitivityGrid {
    let swing = config.sensitivity_swing_pct / 100.0;
    let factors = [1.0 - swing, 1.0, 1.0 + swing];

    let row_values =
        factors.map(|f| scenario.assumptions.content_time_savings_pct * f);
    let col_values = factors.map(|f| scenario.assumptions.roas_lift_pct * f);

    let mut paybacks = [[None; 3]; 3];
    for (r, row_value) in row_values.iter().enumerate() {
        for (c, col_value) in col_values.iter().enumerate() {
            let mut assumptions = scenario.assumptions.clone();
            assumptions.content_time_savings_pct = *row_value;
            assumptions.roas_lift_pct = *col_value;
            paybacks[r][c] = payback_for(scenario, &assumptions, disabled, config);
        }
    }

    SensitivityGrid {
        row_label: "Content time savings %".to_string(),
        col_label: "Media ROAS lift %".to_string(),
        row_values,
        col_values,
        paybacks,
    }
}

fn payback_for(
    scenario: &Scenario,
    assumptions: &ImprovementAssumptions,
    disabled: &BTreeSet<ValueStreamKey>,
    config: &ModelConfig,
) -> Option<f64> {
    let base = baseline::compute_baseline(
        &scenario.organization,
        &scenario.martech,
        &scenario.operations,
        &scenario.pain,
        config,
    );
    let mut streams = value::compute_value_streams(
        &base,
        &scenario.organization,
        &scenario.martech,
        &scenario.operations,
        &scenario.pain,
        assumptions,
        config,
    );
    value::apply_exclusions(&mut streams, disabled);
    let total = value::total_annual_value(&streams);
    let metrics = returns::compute_return_metrics(total, &scenario.investment, config);
    metrics.expected.payback_months
}
