//! Seven-stream annual value model.
//!
//! Each stream is an independent, non-negative dollar amount that goes to
//! zero when its governing assumption is zero. Stream exclusion is a single
//! zero-out filter over the fixed key set, so disabling a subset reduces the
//! total by exactly the sum of the disabled streams.

use crate::config::ModelConfig;
use crate::engine::baseline::Baseline;
use crate::engine::inputs::{
    ContentAndCampaignOps, ImprovementAssumptions, MartechAndMedia, OperationalPain,
    OrganizationProfile,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The fixed set of value streams, in display and summation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueStreamKey {
    RoasImprovement,
    PersonalizationLift,
    MartechOptimization,
    ContentVelocity,
    CampaignSpeed,
    OperationalEfficiency,
    AttributionImprovement,
}

impl ValueStreamKey {
    pub const ALL: [ValueStreamKey; 7] = [
        ValueStreamKey::RoasImprovement,
        ValueStreamKey::PersonalizationLift,
        ValueStreamKey::MartechOptimization,
        ValueStreamKey::ContentVelocity,
        ValueStreamKey::CampaignSpeed,
        ValueStreamKey::OperationalEfficiency,
        ValueStreamKey::AttributionImprovement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::RoasImprovement => "Media ROAS improvement",
            Self::PersonalizationLift => "Personalization revenue lift",
            Self::MartechOptimization => "Martech stack optimization",
            Self::ContentVelocity => "Content production velocity",
            Self::CampaignSpeed => "Campaign cycle acceleration",
            Self::OperationalEfficiency => "Operational efficiency",
            Self::AttributionImprovement => "Attribution recovery",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "roasimprovement" | "roas" => Some(Self::RoasImprovement),
            "personalizationlift" | "personalization" => Some(Self::PersonalizationLift),
            "martechoptimization" | "martech" => Some(Self::MartechOptimization),
            "contentvelocity" | "content" => Some(Self::ContentVelocity),
            "campaignspeed" | "campaign" => Some(Self::CampaignSpeed),
            "operationalefficiency" | "ops" => Some(Self::OperationalEfficiency),
            "attributionimprovement" | "attribution" => Some(Self::AttributionImprovement),
            _ => None,
        }
    }
}

/// One computed value stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueStream {
    pub key: ValueStreamKey,
    pub label: String,
    pub annual_value: f64,
}

/// Compute all seven streams in fixed order, before any exclusion.
pub fn compute_value_streams(
    baseline: &Baseline,
    org: &OrganizationProfile,
    martech: &MartechAndMedia,
    ops: &ContentAndCampaignOps,
    pain: &OperationalPain,
    assumptions: &ImprovementAssumptions,
    config: &ModelConfig,
) -> Vec<ValueStream> {
    ValueStreamKey::ALL
        .iter()
        .map(|&key| ValueStream {
            key,
            label: key.label().to_string(),
            annual_value: stream_value(key, baseline, org, martech, ops, pain, assumptions, config),
        })
        .collect()
}

/// Zero out the disabled streams. Linearity of exclusion depends on this
/// being the only place exclusion happens.
pub fn apply_exclusions(
    streams: &mut [ValueStream],
    disabled: &BTreeSet<ValueStreamKey>,
) {
    for stream in streams.iter_mut() {
        if disabled.contains(&stream.key) {
            stream.annual_value = 0.0;
        }
    }
}

/// Sum the (post-exclusion) stream values in fixed order.
pub fn total_annual_value(streams: &[ValueStream]) -> f64 {
    streams.iter().map(|s| s.annual_value).sum()
}

#[allow(clippy::too_many_arguments)]
fn stream_value(
    key: ValueStreamKey,
    baseline: &Baseline,
    org: &OrganizationProfile,
    martech: &MartechAndMedia,
    ops: &ContentAndCampaignOps,
    pain: &OperationalPain,
    assumptions: &ImprovementAssumptions,
    config: &ModelConfig,
) -> f64 {
    let value = match key {
        ValueStreamKey::RoasImprovement => {
            // Incremental revenue from lifting the current blended return on
            // the paid media base.
            baseline.paid_media_budget
                * martech.current_blended_roas
                * assumptions.roas_lift_pct
                / 100.0
        }
        ValueStreamKey::PersonalizationLift => {
            // Applied to media-driven revenue, not total company revenue.
            let media_driven_revenue = baseline.paid_media_budget * martech.current_blended_roas;
            media_driven_revenue * assumptions.personalization_rev_lift_pct / 100.0
        }
        ValueStreamKey::MartechOptimization => {
            let martech_budget =
                baseline.total_marketing_budget * martech.martech_pct_of_budget / 100.0;
            let utilization_gap = (assumptions.martech_utilization_target_pct
                - martech.stack_utilization_pct)
                .max(0.0);
            let recovered = martech_budget * utilization_gap / 100.0;
            let consolidation =
                martech_budget * assumptions.martech_tool_consolidation_pct / 100.0;
            // Recovered value can never exceed what is being wasted today.
            (recovered + consolidation).min(baseline.annual_martech_waste)
        }
        ValueStreamKey::ContentVelocity => {
            let hourly_rate = if config.fte_hours_per_year > 0.0 {
                org.avg_loaded_fte_cost / config.fte_hours_per_year
            } else {
                0.0
            };
            let annual_content_labor = ops.monthly_content_assets
                * config.content_hours_per_asset
                * hourly_rate
                * 12.0;
            annual_content_labor * assumptions.content_time_savings_pct / 100.0
        }
        ValueStreamKey::CampaignSpeed => {
            let [short_days, medium_days, long_days] = config.campaign_bucket_days;
            let weighted_cycle_days = (ops.short_campaign_pct * short_days
                + ops.medium_campaign_pct * medium_days
                + ops.long_campaign_pct * long_days)
                / 100.0;
            let days_saved_per_campaign =
                weighted_cycle_days * assumptions.cycle_time_reduction_pct / 100.0;
            ops.monthly_campaigns * 12.0 * days_saved_per_campaign * config.campaign_value_per_day
        }
        ValueStreamKey::OperationalEfficiency => {
            let rework_cost = baseline.annual_team_cost * pain.rework_rate_pct / 100.0;
            let rework_savings = rework_cost * assumptions.rework_reduction_pct / 100.0;
            let admin_cost = baseline.annual_team_cost * pain.admin_time_pct / 100.0;
            let admin_redeployed = admin_cost * assumptions.admin_to_strategic_shift_pct / 100.0;
            rework_savings + admin_redeployed
        }
        ValueStreamKey::AttributionImprovement => {
            let recovered = baseline.annual_attribution_waste
                * assumptions.attribution_improvement_pct
                / 100.0;
            recovered.min(baseline.annual_attribution_waste)
        }
    };

    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
