//! Static reference data: benchmark lookups and model constants.
//!
//! Everything here is pure data. The numeric constants are the serde
//! defaults for [`crate::config::ModelConfig`], so a `roiscope.toml` can
//! override any of them without touching call sites.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Annual discount rate applied to monthly cash flows, percent.
pub const DISCOUNT_RATE_PCT: f64 = 10.0;

/// Projection horizon in months.
pub const HORIZON_MONTHS: u32 = 36;

/// Ongoing operating expense per year, percent of the initial investment.
pub const ONGOING_OPEX_PCT: f64 = 15.0;

/// Quarterly erosion of the marketing budget's competitive value under a
/// do-nothing baseline, percent.
pub const QUARTERLY_EROSION_PCT: f64 = 2.5;

/// Minimum acceptable IRR, percent. Display-side gate only.
pub const HURDLE_RATE_PCT: f64 = 12.0;

/// Average weeks per month, used to convert implementation weeks to the
/// ramp window.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Campaign duration bucket midpoints in days: short, medium, long.
pub const CAMPAIGN_BUCKET_DAYS: [f64; 3] = [15.0, 45.0, 90.0];

/// Average production hours per content asset.
pub const CONTENT_HOURS_PER_ASSET: f64 = 12.0;

/// Working hours per FTE year, for loaded-cost-to-hourly conversion.
pub const FTE_HOURS_PER_YEAR: f64 = 2080.0;

/// Share of manually attributed media spend assumed misallocated.
/// A fraction, not a percent.
pub const MISATTRIBUTION_LOSS_RATE: f64 = 0.15;

/// Pipeline value of pulling one campaign-day forward.
pub const CAMPAIGN_VALUE_PER_DAY: f64 = 1_200.0;

/// Cross-industry marketing budget benchmark, percent of revenue.
pub const DEFAULT_BUDGET_PCT: f64 = 7.7;

/// The three outcome scenarios. One computation path, three multipliers;
/// the variants must never drift apart structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioKind {
    Conservative,
    Expected,
    Aggressive,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::Conservative,
        ScenarioKind::Expected,
        ScenarioKind::Aggressive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Expected => "Expected",
            Self::Aggressive => "Aggressive",
        }
    }

    /// Default value-side multiplier for this scenario.
    pub fn default_multiplier(&self) -> f64 {
        match self {
            Self::Conservative => 0.70,
            Self::Expected => 1.00,
            Self::Aggressive => 1.30,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "conservative" => Some(Self::Conservative),
            "expected" | "base" => Some(Self::Expected),
            "aggressive" => Some(Self::Aggressive),
            _ => None,
        }
    }
}

/// Marketing budget benchmark for an industry tag, percent of revenue.
///
/// Unknown tags fall back to the cross-industry benchmark rather than
/// failing; the tag is display-side input, not validated identity.
pub fn industry_budget_pct(industry: &str) -> f64 {
    match industry.to_lowercase().replace([' ', '-'], "_").as_str() {
        "technology" | "software" => 10.1,
        "consumer_goods" | "cpg" => 13.9,
        "retail" => 12.4,
        "financial_services" => 8.0,
        "healthcare" => 6.5,
        "manufacturing" => 5.7,
        "b2b_services" => 8.6,
        "media" | "media_entertainment" => 11.2,
        _ => DEFAULT_BUDGET_PCT,
    }
}

/// Display metadata for a confidence band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceLevel {
    pub label: &'static str,
    /// Hex color the dashboards render the band with.
    pub color: &'static str,
}

pub fn confidence_level(key: &str) -> Option<&'static ConfidenceLevel> {
    static LEVELS: [(&str, ConfidenceLevel); 3] = [
        (
            "high",
            ConfidenceLevel {
                label: "High confidence",
                color: "#22c55e",
            },
        ),
        (
            "medium",
            ConfidenceLevel {
                label: "Medium confidence",
                color: "#f59e0b",
            },
        ),
        (
            "low",
            ConfidenceLevel {
                label: "Low confidence",
                color: "#ef4444",
            },
        ),
    ];
    LEVELS
        .iter()
        .find(|(k, _)| *k == key.to_lowercase())
        .map(|(_, v)| v)
}

/// Attribution metadata for a cited benchmark figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceAttribution {
    pub title: &'static str,
    pub publisher: &'static str,
    pub year: u16,
}

static SOURCES: Lazy<HashMap<&'static str, SourceAttribution>> = Lazy::new(|| {
    HashMap::from([
        (
            "gartner_cmo_2024",
            SourceAttribution {
                title: "CMO Spend Survey",
                publisher: "Gartner",
                year: 2024,
            },
        ),
        (
            "gartner_martech_2023",
            SourceAttribution {
                title: "Marketing Technology Survey",
                publisher: "Gartner",
                year: 2023,
            },
        ),
        (
            "mckinsey_personalization_2023",
            SourceAttribution {
                title: "The Value of Getting Personalization Right",
                publisher: "McKinsey & Company",
                year: 2023,
            },
        ),
        (
            "salesforce_somkt_2024",
            SourceAttribution {
                title: "State of Marketing",
                publisher: "Salesforce Research",
                year: 2024,
            },
        ),
        (
            "forrester_b2b_waste_2023",
            SourceAttribution {
                title: "B2B Marketing Waste Benchmarks",
                publisher: "Forrester",
                year: 2023,
            },
        ),
    ])
});

pub fn source_attribution(key: &str) -> Option<&'static SourceAttribution> {
    SOURCES.get(key)
}

/// Display metadata for an agent-intensity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentIntensity {
    pub label: &'static str,
    pub description: &'static str,
}

pub fn agent_intensity(key: &str) -> Option<&'static AgentIntensity> {
    static LEVELS: [(&str, AgentIntensity); 3] = [
        (
            "assist",
            AgentIntensity {
                label: "Assist",
                description: "Agents draft and suggest; every action is human approved",
            },
        ),
        (
            "orchestrate",
            AgentIntensity {
                label: "Orchestrate",
                description: "Agents run multi-step workflows with human checkpoints",
            },
        ),
        (
            "autonomous",
            AgentIntensity {
                label: "Autonomous",
                description: "Agents execute end to end inside approved guardrails",
            },
        ),
    ];
    LEVELS
        .iter()
        .find(|(k, _)| *k == key.to_lowercase())
        .map(|(_, v)| v)
}

/// One row of the channel ROAS benchmark table.
///
/// `lift_pct` is a per-channel parameter rather than a single uniform lift;
/// the comparator treats it as configuration, not a derived quantity.
/// Snake-case keys on purpose: this is a `roiscope.toml` table, not part of
/// the output wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    pub key: String,
    pub label: String,
    /// Benchmark return multiple before optimization.
    pub base_roas: f64,
    /// Expected optimization lift for this channel, percent.
    pub lift_pct: f64,
}

/// Default channel benchmark table.
pub fn default_channel_table() -> Vec<ChannelSpec> {
    let rows = [
        ("paid_search", "Paid search", 3.6, 22.0),
        ("paid_social", "Paid social", 2.4, 28.0),
        ("programmatic_display", "Programmatic display", 1.6, 35.0),
        ("online_video", "Online video", 2.0, 25.0),
        ("email", "Email", 5.2, 15.0),
        ("affiliate", "Affiliate", 4.1, 12.0),
    ];
    rows.iter()
        .map(|(key, label, base_roas, lift_pct)| ChannelSpec {
            key: key.to_string(),
            label: label.to_string(),
            base_roas: *base_roas,
            lift_pct: *lift_pct,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_industry_falls_back_to_default() {
        assert_eq!(industry_budget_pct("underwater basket weaving"), DEFAULT_BUDGET_PCT);
        assert_eq!(industry_budget_pct("Technology"), 10.1);
        assert_eq!(industry_budget_pct("Financial Services"), 8.0);
    }

    #[test]
    fn scenario_multipliers_are_ordered() {
        let [c, e, a] = ScenarioKind::ALL.map(|k| k.default_multiplier());
        assert!(c < e && e < a);
        assert_eq!(e, 1.0);
    }

    #[test]
    fn scenario_parse_accepts_base_alias() {
        assert_eq!(ScenarioKind::parse("base"), Some(ScenarioKind::Expected));
        assert_eq!(ScenarioKind::parse("AGGRESSIVE"), Some(ScenarioKind::Aggressive));
        assert_eq!(ScenarioKind::parse("wild"), None);
    }

    #[test]
    fn known_lookups_resolve() {
        assert!(confidence_level("high").is_some());
        assert!(confidence_level("shaky").is_none());
        assert_eq!(source_attribution("gartner_cmo_2024").unwrap().year, 2024);
        assert!(agent_intensity("orchestrate").is_some());
    }

    #[test]
    fn channel_table_has_positive_roas_and_lift() {
        for spec in default_channel_table() {
            assert!(spec.base_roas > 0.0, "{}", spec.key);
            assert!(spec.lift_pct >= 0.0, "{}", spec.key);
        }
    }
}
