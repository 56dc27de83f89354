//! Current-state annual cost model.
//!
//! Four cost buckets: team, martech waste, media waste, attribution waste.
//! `total_annual_cost` is the exact sum of the buckets and `waterfall` lists
//! the same buckets in fixed display order, so the chart and the headline
//! number can never disagree.

use crate::config::ModelConfig;
use crate::engine::inputs::{
    ContentAndCampaignOps, MartechAndMedia, OperationalPain, OrganizationProfile,
};
use serde::{Deserialize, Serialize};

/// Current-state cost breakdown. Currency in whole monetary units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    pub annual_team_cost: f64,
    pub total_marketing_budget: f64,
    /// Paid media slice of the budget; base for the media-side buckets.
    pub paid_media_budget: f64,
    pub annual_martech_waste: f64,
    pub annual_media_waste: f64,
    pub annual_attribution_waste: f64,
    pub total_annual_cost: f64,
    pub waterfall: Vec<WaterfallEntry>,
}

/// One display bar of the cost waterfall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallEntry {
    pub label: String,
    pub value: f64,
}

/// Compute the current-state cost breakdown.
///
/// Total over all well-formed numeric input: zero revenue or headcount
/// produce zero buckets, utilization past 100% clamps waste to zero, and no
/// bucket can go negative.
pub fn compute_baseline(
    org: &OrganizationProfile,
    martech: &MartechAndMedia,
    _ops: &ContentAndCampaignOps,
    pain: &OperationalPain,
    config: &ModelConfig,
) -> Baseline {
    let annual_team_cost = (org.marketing_headcount * org.avg_loaded_fte_cost).max(0.0);
    let total_marketing_budget = (org.annual_revenue * org.marketing_budget_pct / 100.0).max(0.0);
    let paid_media_budget =
        (total_marketing_budget * martech.paid_media_pct_of_budget / 100.0).max(0.0);

    let martech_budget = total_marketing_budget * martech.martech_pct_of_budget / 100.0;
    let unused_fraction = 1.0 - martech.stack_utilization_pct / 100.0;
    let annual_martech_waste = (martech_budget * unused_fraction).max(0.0);

    let annual_media_waste = (paid_media_budget * pain.marketing_waste_rate_pct / 100.0).max(0.0);

    let annual_attribution_waste = (paid_media_budget * pain.manual_attribution_pct / 100.0
        * config.misattribution_loss_rate)
        .max(0.0);

    let total_annual_cost =
        annual_team_cost + annual_martech_waste + annual_media_waste + annual_attribution_waste;

    let waterfall = vec![
        WaterfallEntry {
            label: "Marketing team".to_string(),
            value: annual_team_cost,
        },
        WaterfallEntry {
            label: "Underused martech".to_string(),
            value: annual_martech_waste,
        },
        WaterfallEntry {
            label: "Wasted media spend".to_string(),
            value: annual_media_waste,
        },
        WaterfallEntry {
            label: "Attribution blind spots".to_string(),
            value: annual_attribution_waste,
        },
    ];

    Baseline {
        annual_team_cost,
        total_marketing_budget,
        paid_media_budget,
        annual_martech_waste,
        annual_media_waste,
        annual_attribution_waste,
        total_annual_cost,
        waterfall,
    }
}
