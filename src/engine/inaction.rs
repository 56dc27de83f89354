//! Do-nothing erosion projection.
//!
//! Models compounding quarterly erosion of the marketing budget's
//! competitive value over twelve quarters. Each quarter's loss compounds on
//! the prior quarter's eroded base, so the cumulative series is
//! non-decreasing and can never exceed the budget itself.

use crate::config::ModelConfig;
use serde::{Deserialize, Serialize};

const QUARTERS: u32 = 12;

/// One quarter of the erosion projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterPoint {
    /// 1-based quarter index.
    pub quarter: u32,
    /// Budget value still intact at the end of this quarter.
    pub eroded_base: f64,
    /// Cumulative competitive value lost since quarter zero.
    pub cumulative_loss: f64,
}

/// Three-year do-nothing projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoNothingProjection {
    pub quarterly_erosion_pct: f64,
    pub quarterly_losses: Vec<QuarterPoint>,
    pub year1_erosion_pct: f64,
    pub year1_loss: f64,
    pub year2_erosion_pct: f64,
    pub year2_loss: f64,
    pub year3_erosion_pct: f64,
    pub year3_loss: f64,
}

/// Project compounding erosion of `total_marketing_budget`.
pub fn project_do_nothing(total_marketing_budget: f64, config: &ModelConfig) -> DoNothingProjection {
    // Erosion past 100% would compound the base negative; clamp hard.
    let rate = config.quarterly_erosion_pct.clamp(0.0, 99.99) / 100.0;
    let budget = total_marketing_budget.max(0.0);

    let mut quarterly_losses = Vec::with_capacity(QUARTERS as usize);
    let mut eroded_base = budget;
    for quarter in 1..=QUARTERS {
        eroded_base *= 1.0 - rate;
        quarterly_losses.push(QuarterPoint {
            quarter,
            eroded_base,
            cumulative_loss: budget - eroded_base,
        });
    }

    let erosion_pct_at = |quarter: u32| -> f64 {
        (1.0 - (1.0 - rate).powi(quarter as i32)) * 100.0
    };
    let loss_at = |quarter: u32| -> f64 {
        quarterly_losses
            .get(quarter as usize - 1)
            .map(|p| p.cumulative_loss)
            .unwrap_or(0.0)
    };

    DoNothingProjection {
        quarterly_erosion_pct: rate * 100.0,
        year1_erosion_pct: erosion_pct_at(4),
        year1_loss: loss_at(4),
        year2_erosion_pct: erosion_pct_at(8),
        year2_loss: loss_at(8),
        year3_erosion_pct: erosion_pct_at(12),
        year3_loss: loss_at(12),
        quarterly_losses,
    }
}
