//! Return metrics: cash-flow timeline, NPV, IRR, payback, scenario variants.
//!
//! Capital is front-loaded at month 0; operating expense accrues monthly.
//! Value ramps linearly from zero to full run-rate across the implementation
//! window, then holds. The three scenarios share one computation path and
//! one investment schedule, differing only in the value-side multiplier.

use crate::config::ModelConfig;
use crate::engine::inputs::TransformationInvestment;
use crate::engine::reference::ScenarioKind;
use serde::{Deserialize, Serialize};

/// IRR root-finder bounds. Bisection over the per-period rate with a fixed
/// iteration cap; the search can never loop unbounded.
const IRR_MAX_ITERATIONS: u32 = 128;
const IRR_EPSILON: f64 = 1e-7;
const IRR_RATE_FLOOR: f64 = -0.9999;
const IRR_RATE_CEILING: f64 = 1e4;

/// One point of the 37-month projection timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthPoint {
    pub month: u32,
    pub cumulative_investment: f64,
    pub cumulative_value_conservative: f64,
    pub cumulative_value_expected: f64,
    pub cumulative_value_aggressive: f64,
}

/// Return metrics for one scenario multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub scenario: ScenarioKind,
    pub multiplier: f64,
    pub total_annual_value: f64,
    pub net_present_value: f64,
    /// Annualized IRR, percent. `None` when the cash-flow series has no
    /// sign change or the root-finder did not converge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irr: Option<f64>,
    /// First month where cumulative value covers cumulative investment.
    /// `None` means beyond the projection horizon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_even_month: Option<u32>,
    /// Payback period interpolated inside the break-even month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payback_months: Option<f64>,
    pub three_year_roi: f64,
}

/// Scenario outcomes under fixed keys, plus the shared timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnMetrics {
    pub total_investment: f64,
    pub annual_opex: f64,
    /// Implementation window converted to months.
    pub ramp_months: f64,
    pub timeline: Vec<MonthPoint>,
    pub conservative: ScenarioOutcome,
    pub expected: ScenarioOutcome,
    pub aggressive: ScenarioOutcome,
}

/// Fraction of full run-rate realized in a given month.
fn ramp_factor(month: u32, ramp_months: f64) -> f64 {
    if month == 0 {
        return 0.0;
    }
    if ramp_months <= 0.0 {
        return 1.0;
    }
    (month as f64 / ramp_months).clamp(0.0, 1.0)
}

/// Monthly net cash flows over the horizon: index 0 is the capital outlay,
/// months 1..=horizon carry ramped value minus accrued opex.
fn monthly_cash_flows(
    annual_value: f64,
    multiplier: f64,
    investment: &TransformationInvestment,
    config: &ModelConfig,
) -> Vec<f64> {
    let monthly_run_rate = annual_value * multiplier / 12.0;
    let monthly_opex =
        investment.total_investment_amount.max(0.0) * config.ongoing_opex_pct / 100.0 / 12.0;
    let ramp_months = investment.implementation_weeks.max(0.0) / config.weeks_per_month;

    let mut flows = Vec::with_capacity(config.horizon_months as usize + 1);
    flows.push(-investment.total_investment_amount.max(0.0));
    for month in 1..=config.horizon_months {
        let value = monthly_run_rate * ramp_factor(month, ramp_months);
        flows.push(value - monthly_opex);
    }
    flows
}

/// Discounted sum of per-period cash flows at the given annual rate.
pub fn net_present_value(flows: &[f64], annual_rate_pct: f64) -> f64 {
    let monthly_rate = (1.0 + annual_rate_pct / 100.0).powf(1.0 / 12.0) - 1.0;
    npv_at_periodic_rate(flows, monthly_rate)
}

fn npv_at_periodic_rate(flows: &[f64], rate: f64) -> f64 {
    let mut discount = 1.0;
    let factor = 1.0 + rate;
    let mut total = 0.0;
    for flow in flows {
        total += flow / discount;
        discount *= factor;
    }
    total
}

/// Per-period internal rate of return via bracketed bisection.
///
/// Returns `None` without iterating when the series has no sign change
/// (all-cost or all-value series have no IRR), and `None` when no bracket
/// exists or the cap is reached before convergence. Never a misleading zero.
pub fn internal_rate_of_return(flows: &[f64]) -> Option<f64> {
    let has_negative = flows.iter().any(|f| *f < 0.0);
    let has_positive = flows.iter().any(|f| *f > 0.0);
    if !has_negative || !has_positive {
        return None;
    }

    let mut lo = IRR_RATE_FLOOR;
    let mut hi = 1.0;
    let npv_lo = npv_at_periodic_rate(flows, lo);

    // Push the upper bound out until it brackets the root.
    let mut npv_hi = npv_at_periodic_rate(flows, hi);
    while npv_lo.signum() == npv_hi.signum() && hi < IRR_RATE_CEILING {
        hi *= 2.0;
        npv_hi = npv_at_periodic_rate(flows, hi);
    }
    if npv_lo.signum() == npv_hi.signum() {
        return None;
    }

    let mut result = None;
    for _ in 0..IRR_MAX_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        let npv_mid = npv_at_periodic_rate(flows, mid);
        if npv_mid.abs() < IRR_EPSILON || (hi - lo) / 2.0 < IRR_EPSILON {
            result = Some(mid);
            break;
        }
        if npv_mid.signum() == npv_lo.signum() {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    result.filter(|r| r.is_finite())
}

/// Annualize a per-period (monthly) rate to a 0-100 percent.
fn annualize_monthly_rate(monthly_rate: f64) -> f64 {
    ((1.0 + monthly_rate).powi(12) - 1.0) * 100.0
}

/// Break-even month and interpolated payback from a cumulative gap series.
///
/// `gap[m]` = cumulative value minus cumulative investment at month m.
fn payback_from_gaps(gaps: &[f64]) -> (Option<u32>, Option<f64>) {
    for (month, gap) in gaps.iter().enumerate() {
        if *gap >= 0.0 {
            if month == 0 {
                return (Some(0), Some(0.0));
            }
            let prev = gaps[month - 1];
            let climbed = gap - prev;
            let fraction = if climbed > 0.0 { -prev / climbed } else { 1.0 };
            return (Some(month as u32), Some((month - 1) as f64 + fraction));
        }
    }
    (None, None)
}

fn scenario_outcome(
    kind: ScenarioKind,
    multiplier: f64,
    annual_value: f64,
    investment: &TransformationInvestment,
    config: &ModelConfig,
) -> ScenarioOutcome {
    let flows = monthly_cash_flows(annual_value, multiplier, investment, config);

    let mut cumulative = 0.0;
    let mut gaps = Vec::with_capacity(flows.len());
    for flow in &flows {
        cumulative += flow;
        gaps.push(cumulative);
    }
    let (break_even_month, payback_months) = payback_from_gaps(&gaps);

    let total_investment = investment.total_investment_amount.max(0.0);
    let monthly_opex = total_investment * config.ongoing_opex_pct / 100.0 / 12.0;
    let total_cost = total_investment + monthly_opex * config.horizon_months as f64;
    // Gross value over the horizon; flows carry value net of opex.
    let total_value: f64 = flows.iter().skip(1).map(|f| f + monthly_opex).sum();
    let three_year_roi = if total_cost > 0.0 {
        (total_value - total_cost) / total_cost * 100.0
    } else {
        0.0
    };

    ScenarioOutcome {
        scenario: kind,
        multiplier,
        total_annual_value: annual_value * multiplier,
        net_present_value: net_present_value(&flows, config.discount_rate_pct),
        irr: internal_rate_of_return(&flows).map(annualize_monthly_rate),
        break_even_month,
        payback_months,
        three_year_roi,
    }
}

/// Compute the full return metrics set for a given total annual value.
pub fn compute_return_metrics(
    total_annual_value: f64,
    investment: &TransformationInvestment,
    config: &ModelConfig,
) -> ReturnMetrics {
    let m = &config.scenario_multipliers;
    let total_investment = investment.total_investment_amount.max(0.0);
    let annual_opex = total_investment * config.ongoing_opex_pct / 100.0;
    let ramp_months = investment.implementation_weeks.max(0.0) / config.weeks_per_month;

    let conservative =
        scenario_outcome(ScenarioKind::Conservative, m.conservative, total_annual_value, investment, config);
    let expected =
        scenario_outcome(ScenarioKind::Expected, m.expected, total_annual_value, investment, config);
    let aggressive =
        scenario_outcome(ScenarioKind::Aggressive, m.aggressive, total_annual_value, investment, config);

    let timeline = build_timeline(total_annual_value, investment, config);

    ReturnMetrics {
        total_investment,
        annual_opex,
        ramp_months,
        timeline,
        conservative,
        expected,
        aggressive,
    }
}

fn build_timeline(
    annual_value: f64,
    investment: &TransformationInvestment,
    config: &ModelConfig,
) -> Vec<MonthPoint> {
    let m = &config.scenario_multipliers;
    let total_investment = investment.total_investment_amount.max(0.0);
    let monthly_opex = total_investment * config.ongoing_opex_pct / 100.0 / 12.0;
    let ramp_months = investment.implementation_weeks.max(0.0) / config.weeks_per_month;

    let mut points = Vec::with_capacity(config.horizon_months as usize + 1);
    let mut cumulative = [0.0_f64; 3];
    for month in 0..=config.horizon_months {
        if month > 0 {
            let base = annual_value / 12.0 * ramp_factor(month, ramp_months);
            cumulative[0] += base * m.conservative;
            cumulative[1] += base * m.expected;
            cumulative[2] += base * m.aggressive;
        }
        points.push(MonthPoint {
            month,
            cumulative_investment: total_investment + monthly_opex * month as f64,
            cumulative_value_conservative: cumulative[0],
            cumulative_value_expected: cumulative[1],
            cumulative_value_aggressive: cumulative[2],
        });
    }
    points
}
