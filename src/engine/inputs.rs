//! Input records for the ROI engine.
//!
//! Each record is a flat, immutable value bundle owned by the calling layer.
//! The engine never mutates inputs and never caches derived state, so a
//! `Scenario` serialization is sufficient to reproduce any output exactly.
//!
//! Units: every `*_pct` field is on a 0-100 scale; currency fields are whole
//! monetary units.

use serde::{Deserialize, Serialize};

/// Who the organization is: revenue, budget posture, and team shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationProfile {
    /// Annual company revenue.
    pub annual_revenue: f64,
    /// Marketing budget as a percent of revenue.
    pub marketing_budget_pct: f64,
    /// Marketing full-time headcount.
    pub marketing_headcount: f64,
    /// Average fully loaded annual cost per marketing FTE.
    pub avg_loaded_fte_cost: f64,
    /// Industry tag used for benchmark lookups (e.g. "technology").
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Martech stack and paid media posture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MartechAndMedia {
    /// Martech spend as a percent of the marketing budget.
    pub martech_pct_of_budget: f64,
    /// Number of tools in the stack.
    pub tool_count: u32,
    /// How much of the stack's capability is actually used, percent.
    pub stack_utilization_pct: f64,
    /// Paid media spend as a percent of the marketing budget.
    pub paid_media_pct_of_budget: f64,
    /// Current blended return on ad spend across all paid channels.
    pub current_blended_roas: f64,
}

/// Campaign and content production volume.
///
/// The three campaign-duration percentages describe a partition of 100.
/// Small rounding drift is tolerated; the engine neither renormalizes nor
/// rejects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAndCampaignOps {
    pub monthly_campaigns: f64,
    pub monthly_content_assets: f64,
    /// Average campaign cycle length in days, brief to launch.
    pub avg_campaign_cycle_days: f64,
    pub channel_count: u32,
    /// Agency spend as a percent of the marketing budget.
    pub agency_pct_of_budget: f64,
    /// Share of campaigns in the short duration bucket, percent.
    pub short_campaign_pct: f64,
    /// Share of campaigns in the medium duration bucket, percent.
    pub medium_campaign_pct: f64,
    /// Share of campaigns in the long duration bucket, percent.
    pub long_campaign_pct: f64,
}

/// Where the organization hurts today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalPain {
    /// Percent of produced work that gets redone.
    pub rework_rate_pct: f64,
    /// Days from finished asset to approved asset.
    pub approval_cycle_days: f64,
    /// Percent of team time spent on administrative work.
    pub admin_time_pct: f64,
    /// Percent of paid media spend considered wasted.
    pub marketing_waste_rate_pct: f64,
    /// Percent of attribution still performed manually.
    pub manual_attribution_pct: f64,
}

/// The investment under evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationInvestment {
    pub total_investment_amount: f64,
    pub implementation_weeks: f64,
}

/// Expected improvement magnitude per value stream, percent each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementAssumptions {
    pub roas_lift_pct: f64,
    pub content_time_savings_pct: f64,
    pub personalization_rev_lift_pct: f64,
    pub cycle_time_reduction_pct: f64,
    pub rework_reduction_pct: f64,
    pub admin_to_strategic_shift_pct: f64,
    pub attribution_improvement_pct: f64,
    /// Target stack utilization, percent (recovery is relative to current).
    pub martech_utilization_target_pct: f64,
    pub martech_tool_consolidation_pct: f64,
}

/// The six input groups bundled for serialization.
///
/// This is the only shareable state in the system; everything else is
/// recomputed from it on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub organization: OrganizationProfile,
    pub martech: MartechAndMedia,
    pub operations: ContentAndCampaignOps,
    pub pain: OperationalPain,
    pub investment: TransformationInvestment,
    pub assumptions: ImprovementAssumptions,
}

impl Default for Scenario {
    /// The worked example the dashboards open with: a $500M revenue
    /// organization spending 7.7% of revenue on marketing.
    fn default() -> Self {
        Self {
            organization: OrganizationProfile {
                annual_revenue: 500_000_000.0,
                marketing_budget_pct: 7.7,
                marketing_headcount: 200.0,
                avg_loaded_fte_cost: 180_000.0,
                industry: "technology".to_string(),
                display_name: None,
            },
            martech: MartechAndMedia {
                martech_pct_of_budget: 23.8,
                tool_count: 42,
                stack_utilization_pct: 33.0,
                paid_media_pct_of_budget: 38.0,
                current_blended_roas: 3.2,
            },
            operations: ContentAndCampaignOps {
                monthly_campaigns: 18.0,
                monthly_content_assets: 240.0,
                avg_campaign_cycle_days: 42.0,
                channel_count: 9,
                agency_pct_of_budget: 22.0,
                short_campaign_pct: 45.0,
                medium_campaign_pct: 35.0,
                long_campaign_pct: 20.0,
            },
            pain: OperationalPain {
                rework_rate_pct: 28.0,
                approval_cycle_days: 9.0,
                admin_time_pct: 32.0,
                marketing_waste_rate_pct: 26.0,
                manual_attribution_pct: 70.0,
            },
            investment: TransformationInvestment {
                total_investment_amount: 3_000_000.0,
                implementation_weeks: 28.0,
            },
            assumptions: ImprovementAssumptions {
                roas_lift_pct: 18.0,
                content_time_savings_pct: 40.0,
                personalization_rev_lift_pct: 8.0,
                cycle_time_reduction_pct: 35.0,
                rework_reduction_pct: 60.0,
                admin_to_strategic_shift_pct: 50.0,
                attribution_improvement_pct: 55.0,
                martech_utilization_target_pct: 70.0,
                martech_tool_consolidation_pct: 25.0,
            },
        }
    }
}
