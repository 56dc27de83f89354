//! Property-based tests for the ROI engine.
//!
//! These verify the invariants that must hold for all inputs:
//! - The baseline total is the exact sum of its cost buckets
//! - Stream exclusion is exactly linear
//! - Scenario ordering is preserved for NPV, value, and payback
//! - The sensitivity grid's center cell is the unperturbed payback
//! - Do-nothing losses never decrease and never exceed the budget
//! - IRR matches the closed form for single-inflow series
//! - Recomputation is bit-deterministic

use proptest::prelude::*;
use roiscope::engine::returns::internal_rate_of_return;
use roiscope::{
    compute_roi, compute_sensitivity, ContentAndCampaignOps, ImprovementAssumptions,
    MartechAndMedia, ModelConfig, OperationalPain, OrganizationProfile, Scenario,
    TransformationInvestment, ValueStreamKey,
};
use std::collections::BTreeSet;

prop_compose! {
    fn arb_org()(
        annual_revenue in 0.0..2e9f64,
        marketing_budget_pct in 0.0..30.0f64,
        marketing_headcount in 0.0..2000.0f64,
        avg_loaded_fte_cost in 60_000.0..350_000.0f64,
    ) -> OrganizationProfile {
        OrganizationProfile {
            annual_revenue,
            marketing_budget_pct,
            marketing_headcount,
            avg_loaded_fte_cost,
            industry: "technology".to_string(),
            display_name: None,
        }
    }
}

prop_compose! {
    fn arb_martech()(
        martech_pct_of_budget in 0.0..60.0f64,
        tool_count in 1u32..120,
        stack_utilization_pct in 0.0..120.0f64,
        paid_media_pct_of_budget in 0.0..80.0f64,
        current_blended_roas in 0.1..12.0f64,
    ) -> MartechAndMedia {
        MartechAndMedia {
            martech_pct_of_budget,
            tool_count,
            stack_utilization_pct,
            paid_media_pct_of_budget,
            current_blended_roas,
        }
    }
}

prop_compose! {
    fn arb_ops()(
        monthly_campaigns in 0.0..120.0f64,
        monthly_content_assets in 0.0..2000.0f64,
        avg_campaign_cycle_days in 1.0..180.0f64,
        channel_count in 1u32..25,
        agency_pct_of_budget in 0.0..60.0f64,
        short_campaign_pct in 0.0..100.0f64,
        medium_campaign_pct in 0.0..100.0f64,
    ) -> ContentAndCampaignOps {
        // Long bucket takes the remainder, floored so the generator never
        // emits a negative share.
        let long_campaign_pct = (100.0 - short_campaign_pct - medium_campaign_pct).max(0.0);
        ContentAndCampaignOps {
            monthly_campaigns,
            monthly_content_assets,
            avg_campaign_cycle_days,
            channel_count,
            agency_pct_of_budget,
            short_campaign_pct,
            medium_campaign_pct,
            long_campaign_pct,
        }
    }
}

prop_compose! {
    fn arb_pain()(
        rework_rate_pct in 0.0..60.0f64,
        approval_cycle_days in 0.0..30.0f64,
        admin_time_pct in 0.0..70.0f64,
        marketing_waste_rate_pct in 0.0..60.0f64,
        manual_attribution_pct in 0.0..100.0f64,
    ) -> OperationalPain {
        OperationalPain {
            rework_rate_pct,
            approval_cycle_days,
            admin_time_pct,
            marketing_waste_rate_pct,
            manual_attribution_pct,
        }
    }
}

prop_compose! {
    fn arb_investment()(
        total_investment_amount in 100_000.0..20_000_000.0f64,
        implementation_weeks in 4.0..78.0f64,
    ) -> TransformationInvestment {
        TransformationInvestment {
            total_investment_amount,
            implementation_weeks,
        }
    }
}

prop_compose! {
    fn arb_assumptions()(
        roas_lift_pct in 0.0..50.0f64,
        content_time_savings_pct in 0.0..80.0f64,
        personalization_rev_lift_pct in 0.0..25.0f64,
        cycle_time_reduction_pct in 0.0..70.0f64,
        rework_reduction_pct in 0.0..90.0f64,
        admin_to_strategic_shift_pct in 0.0..90.0f64,
        attribution_improvement_pct in 0.0..100.0f64,
        martech_utilization_target_pct in 0.0..100.0f64,
        martech_tool_consolidation_pct in 0.0..60.0f64,
    ) -> ImprovementAssumptions {
        ImprovementAssumptions {
            roas_lift_pct,
            content_time_savings_pct,
            personalization_rev_lift_pct,
            cycle_time_reduction_pct,
            rework_reduction_pct,
            admin_to_strategic_shift_pct,
            attribution_improvement_pct,
            martech_utilization_target_pct,
            martech_tool_consolidation_pct,
        }
    }
}

prop_compose! {
    fn arb_scenario()(
        organization in arb_org(),
        martech in arb_martech(),
        operations in arb_ops(),
        pain in arb_pain(),
        investment in arb_investment(),
        assumptions in arb_assumptions(),
    ) -> Scenario {
        Scenario {
            organization,
            martech,
            operations,
            pain,
            investment,
            assumptions,
        }
    }
}

fn arb_disabled() -> impl Strategy<Value = BTreeSet<ValueStreamKey>> {
    proptest::collection::vec(any::<bool>(), 7).prop_map(|flags| {
        ValueStreamKey::ALL
            .iter()
            .zip(flags)
            .filter_map(|(key, on)| on.then_some(*key))
            .collect()
    })
}

proptest! {
    /// Property: the baseline total is the exact in-order sum of its four
    /// cost buckets, with no drift.
    #[test]
    fn prop_baseline_total_is_exact_bucket_sum(scenario in arb_scenario()) {
        let outputs = compute_roi(&scenario, &BTreeSet::new(), &ModelConfig::default());
        let b = &outputs.baseline;
        let sum = b.annual_team_cost
            + b.annual_martech_waste
            + b.annual_media_waste
            + b.annual_attribution_waste;
        prop_assert_eq!(b.total_annual_cost, sum);
        prop_assert!(b.total_annual_cost.is_finite());
        prop_assert!(b.annual_martech_waste >= 0.0);
        prop_assert!(b.annual_media_waste >= 0.0);
        prop_assert!(b.annual_attribution_waste >= 0.0);
    }

    /// Property: disabling any subset removes exactly the disabled streams
    /// and leaves the enabled amounts untouched.
    #[test]
    fn prop_stream_exclusion_is_linear(
        scenario in arb_scenario(),
        disabled in arb_disabled(),
    ) {
        let config = ModelConfig::default();
        let full = compute_roi(&scenario, &BTreeSet::new(), &config);
        let partial = compute_roi(&scenario, &disabled, &config);

        let expected: f64 = full
            .value_streams
            .iter()
            .map(|s| if disabled.contains(&s.key) { 0.0 } else { s.annual_value })
            .sum();
        prop_assert_eq!(partial.total_annual_value, expected);

        for (f, p) in full.value_streams.iter().zip(&partial.value_streams) {
            if disabled.contains(&f.key) {
                prop_assert_eq!(p.annual_value, 0.0);
            } else {
                prop_assert_eq!(p.annual_value, f.annual_value);
            }
        }
    }

    /// Property: conservative <= expected <= aggressive for NPV and annual
    /// value, with the inverse ordering for payback length.
    #[test]
    fn prop_scenario_ordering_holds(scenario in arb_scenario()) {
        let outputs = compute_roi(&scenario, &BTreeSet::new(), &ModelConfig::default());
        let r = &outputs.returns;

        prop_assert!(r.conservative.net_present_value <= r.expected.net_present_value);
        prop_assert!(r.expected.net_present_value <= r.aggressive.net_present_value);
        prop_assert!(r.conservative.total_annual_value <= r.expected.total_annual_value);
        prop_assert!(r.expected.total_annual_value <= r.aggressive.total_annual_value);

        let ordered = [
            r.conservative.payback_months,
            r.expected.payback_months,
            r.aggressive.payback_months,
        ];
        for pair in ordered.windows(2) {
            match (pair[0], pair[1]) {
                (Some(slower), Some(faster)) => prop_assert!(slower >= faster),
                (Some(_), None) => prop_assert!(false, "higher multiplier lost its payback"),
                _ => {}
            }
        }
    }

    /// Property: the sensitivity grid's center cell is bit-identical to the
    /// unperturbed payback.
    #[test]
    fn prop_sensitivity_center_cell_is_exact(scenario in arb_scenario()) {
        let config = ModelConfig::default();
        let outputs = compute_roi(&scenario, &BTreeSet::new(), &config);
        let grid = compute_sensitivity(&scenario, &BTreeSet::new(), &config);
        prop_assert_eq!(grid.paybacks[1][1], outputs.payback_months);
    }

    /// Property: cumulative do-nothing losses never decrease and never
    /// exceed the budget, even with hostile erosion overrides.
    #[test]
    fn prop_do_nothing_losses_monotone_and_bounded(
        scenario in arb_scenario(),
        erosion_pct in 0.0..150.0f64,
    ) {
        let config = ModelConfig {
            quarterly_erosion_pct: erosion_pct,
            ..ModelConfig::default()
        };
        let outputs = compute_roi(&scenario, &BTreeSet::new(), &config);
        let budget = outputs.baseline.total_marketing_budget;

        let mut prev = 0.0;
        for point in &outputs.do_nothing.quarterly_losses {
            prop_assert!(point.cumulative_loss >= prev);
            prop_assert!(point.cumulative_loss <= budget + 1e-6);
            prev = point.cumulative_loss;
        }
        prop_assert!(
            outputs.do_nothing.quarterly_losses[7].cumulative_loss
                <= outputs.do_nothing.quarterly_losses[11].cumulative_loss
        );
    }

    /// Property: for a single-outflow/single-inflow series the root-finder
    /// reproduces the closed-form rate within 1e-4.
    #[test]
    fn prop_irr_matches_closed_form(
        outflow in 1_000.0..5_000_000.0f64,
        multiple in 1.05..4.0f64,
        months in 2usize..36,
    ) {
        let mut flows = vec![-outflow];
        flows.extend(std::iter::repeat(0.0).take(months - 1));
        flows.push(outflow * multiple);

        let rate = internal_rate_of_return(&flows).expect("series has one sign change");
        let closed_form = multiple.powf(1.0 / months as f64) - 1.0;
        prop_assert!((rate - closed_form).abs() < 1e-4, "{} vs {}", rate, closed_form);
    }

    /// Property: identical inputs produce bit-identical serialized outputs.
    #[test]
    fn prop_compute_roi_is_deterministic(
        scenario in arb_scenario(),
        disabled in arb_disabled(),
    ) {
        let config = ModelConfig::default();
        let first = serde_json::to_string(&compute_roi(&scenario, &disabled, &config)).unwrap();
        let second = serde_json::to_string(&compute_roi(&scenario, &disabled, &config)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: channel optimization never regresses below current ROAS.
    #[test]
    fn prop_channels_never_regress(scenario in arb_scenario()) {
        let outputs = compute_roi(&scenario, &BTreeSet::new(), &ModelConfig::default());
        for channel in &outputs.channels {
            prop_assert!(channel.ai_optimized_roas >= channel.current_roas);
            prop_assert!(channel.current_roas >= 0.0);
        }
    }
}

#[test]
fn worked_example_pays_back_inside_horizon() {
    // $3M invested over 28 implementation weeks against the default value
    // model lands strictly inside the 36-month horizon.
    let outputs = compute_roi(
        &Scenario::default(),
        &BTreeSet::new(),
        &ModelConfig::default(),
    );
    let payback = outputs.payback_months.expect("worked example pays back");
    assert!(payback > 1.0 && payback < 36.0, "payback = {payback}");
}

#[test]
fn zero_value_scenario_reports_sentinels_not_numbers() {
    let mut scenario = Scenario::default();
    scenario.assumptions = ImprovementAssumptions {
        roas_lift_pct: 0.0,
        content_time_savings_pct: 0.0,
        personalization_rev_lift_pct: 0.0,
        cycle_time_reduction_pct: 0.0,
        rework_reduction_pct: 0.0,
        admin_to_strategic_shift_pct: 0.0,
        attribution_improvement_pct: 0.0,
        martech_utilization_target_pct: scenario.martech.stack_utilization_pct,
        martech_tool_consolidation_pct: 0.0,
    };
    let outputs = compute_roi(&scenario, &BTreeSet::new(), &ModelConfig::default());

    assert_eq!(outputs.payback_months, None);
    assert_eq!(outputs.break_even_month, None);
    assert_eq!(outputs.irr, None);
}
