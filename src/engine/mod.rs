//! The ROI computation engine.
//!
//! A pipeline of pure functions: inputs in, full result set out. Every entry
//! point is a deterministic function of its explicit arguments with no
//! hidden state and no I/O, so recomputation on every input change is safe
//! and cheap, and concurrent callers need no locking.

pub mod baseline;
pub mod channels;
pub mod inaction;
pub mod inputs;
pub mod reference;
pub mod returns;
pub mod sensitivity;
pub mod value;


use crate::config::ModelConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use baseline::{Baseline, WaterfallEntry};
pub use channels::ChannelRoas;
pub use inaction::{DoNothingProjection, QuarterPoint};
pub use inputs::{
    ContentAndCampaignOps, ImprovementAssumptions, MartechAndMedia, OperationalPain,
    OrganizationProfile, Scenario, TransformationInvestment,
};
pub use reference::{
    agent_intensity, confidence_level, industry_budget_pct, source_attribution, ScenarioKind,
};
pub use returns::{MonthPoint, ReturnMetrics, ScenarioOutcome};
pub use sensitivity::SensitivityGrid;
pub use value::{ValueStream, ValueStreamKey};

/// The full derived result set.
///
/// Key names and units are a contract with the rendering and export layers:
/// percentages on a 0-100 scale unless documented as a fraction, currency in
/// whole monetary units. The headline fields repeat the expected-scenario
/// outcome so dashboard tiles can read them without digging into `returns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outputs {
    pub baseline: Baseline,
    pub value_streams: Vec<ValueStream>,
    pub total_annual_value: f64,
    pub returns: ReturnMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_even_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payback_months: Option<f64>,
    pub net_present_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irr: Option<f64>,
    pub three_year_roi: f64,
    pub do_nothing: DoNothingProjection,
    pub channels: Vec<ChannelRoas>,
}

/// Compute the current-state cost breakdown.
pub fn compute_baseline(
    org: &OrganizationProfile,
    martech: &MartechAndMedia,
    ops: &ContentAndCampaignOps,
    pain: &OperationalPain,
    config: &ModelConfig,
) -> Baseline {
    baseline::compute_baseline(org, martech, ops, pain, config)
}

/// Compute the full result set for a scenario.
///
/// `disabled` streams contribute exactly zero to the value total; an empty
/// set means all seven streams participate.
pub fn compute_roi(
    scenario: &Scenario,
    disabled: &BTreeSet<ValueStreamKey>,
    config: &ModelConfig,
) -> Outputs {
    let baseline = baseline::compute_baseline(
        &scenario.organization,
        &scenario.martech,
        &scenario.operations,
        &scenario.pain,
        config,
    );

    let mut streams = value::compute_value_streams(
        &baseline,
        &scenario.organization,
        &scenario.martech,
        &scenario.operations,
        &scenario.pain,
        &scenario.assumptions,
        config,
    );
    value::apply_exclusions(&mut streams, disabled);
    let total_annual_value = value::total_annual_value(&streams);

    let returns = returns::compute_return_metrics(total_annual_value, &scenario.investment, config);
    let do_nothing = inaction::project_do_nothing(baseline.total_marketing_budget, config);
    let channels = channels::compare_channels(&scenario.martech, config);

    let break_even_month = returns.expected.break_even_month;
    let payback_months = returns.expected.payback_months;
    let net_present_value = returns.expected.net_present_value;
    let irr = returns.expected.irr;
    let three_year_roi = returns.expected.three_year_roi;

    Outputs {
        baseline,
        value_streams: streams,
        total_annual_value,
        returns,
        break_even_month,
        payback_months,
        net_present_value,
        irr,
        three_year_roi,
        do_nothing,
        channels,
    }
}

/// Compute the 3x3 two-factor sensitivity grid.
pub fn compute_sensitivity(
    scenario: &Scenario,
    disabled: &BTreeSet<ValueStreamKey>,
    config: &ModelConfig,
) -> SensitivityGrid {
    sensitivity::compute_sensitivity(scenario, disabled, config)
}
