//! Model configuration.
//!
//! Every numeric constant the engine uses is an overridable field here, with
//! the reference-table values as serde defaults. A `roiscope.toml` in the
//! working directory overrides any subset; the library surface always takes
//! `&ModelConfig` explicitly so the engine itself stays free of globals, and
//! the CLI caches one loaded config in a `OnceLock`.

use crate::engine::reference::{self, ChannelSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const CONFIG_FILE_NAME: &str = "roiscope.toml";

/// Value-side multipliers for the three outcome scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMultipliers {
    #[serde(default = "default_conservative_multiplier")]
    pub conservative: f64,
    #[serde(default = "default_expected_multiplier")]
    pub expected: f64,
    #[serde(default = "default_aggressive_multiplier")]
    pub aggressive: f64,
}

impl Default for ScenarioMultipliers {
    fn default() -> Self {
        Self {
            conservative: default_conservative_multiplier(),
            expected: default_expected_multiplier(),
            aggressive: default_aggressive_multiplier(),
        }
    }
}

/// Engine constants, all overridable from `roiscope.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Annual discount rate for NPV, percent.
    #[serde(default = "default_discount_rate_pct")]
    pub discount_rate_pct: f64,

    /// Projection horizon in months.
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,

    /// Ongoing annual operating expense, percent of the investment.
    #[serde(default = "default_ongoing_opex_pct")]
    pub ongoing_opex_pct: f64,

    /// Quarterly do-nothing erosion, percent.
    #[serde(default = "default_quarterly_erosion_pct")]
    pub quarterly_erosion_pct: f64,

    /// Minimum acceptable IRR, percent.
    #[serde(default = "default_hurdle_rate_pct")]
    pub hurdle_rate_pct: f64,

    /// Weeks-to-months conversion for the implementation ramp.
    #[serde(default = "default_weeks_per_month")]
    pub weeks_per_month: f64,

    /// Campaign duration bucket midpoints in days: short, medium, long.
    #[serde(default = "default_campaign_bucket_days")]
    pub campaign_bucket_days: [f64; 3],

    /// Average production hours per content asset.
    #[serde(default = "default_content_hours_per_asset")]
    pub content_hours_per_asset: f64,

    /// Working hours per FTE year.
    #[serde(default = "default_fte_hours_per_year")]
    pub fte_hours_per_year: f64,

    /// Share of manually attributed media spend assumed misallocated
    /// (fraction, 0-1).
    #[serde(default = "default_misattribution_loss_rate")]
    pub misattribution_loss_rate: f64,

    /// Pipeline value of pulling one campaign-day forward.
    #[serde(default = "default_campaign_value_per_day")]
    pub campaign_value_per_day: f64,

    /// Sensitivity grid swing applied to each perturbed axis, percent.
    #[serde(default = "default_sensitivity_swing_pct")]
    pub sensitivity_swing_pct: f64,

    #[serde(default)]
    pub scenario_multipliers: ScenarioMultipliers,

    /// Channel benchmark table for the ROAS comparator.
    #[serde(default = "reference::default_channel_table")]
    pub channels: Vec<ChannelSpec>,
}

fn default_discount_rate_pct() -> f64 {
    reference::DISCOUNT_RATE_PCT
}

fn default_horizon_months() -> u32 {
    reference::HORIZON_MONTHS
}

fn default_ongoing_opex_pct() -> f64 {
    reference::ONGOING_OPEX_PCT
}

fn default_quarterly_erosion_pct() -> f64 {
    reference::QUARTERLY_EROSION_PCT
}

fn default_hurdle_rate_pct() -> f64 {
    reference::HURDLE_RATE_PCT
}

fn default_weeks_per_month() -> f64 {
    reference::WEEKS_PER_MONTH
}

fn default_campaign_bucket_days() -> [f64; 3] {
    reference::CAMPAIGN_BUCKET_DAYS
}

fn default_content_hours_per_asset() -> f64 {
    reference::CONTENT_HOURS_PER_ASSET
}

fn default_fte_hours_per_year() -> f64 {
    reference::FTE_HOURS_PER_YEAR
}

fn default_misattribution_loss_rate() -> f64 {
    reference::MISATTRIBUTION_LOSS_RATE
}

fn default_campaign_value_per_day() -> f64 {
    reference::CAMPAIGN_VALUE_PER_DAY
}

fn default_sensitivity_swing_pct() -> f64 {
    25.0
}

fn default_conservative_multiplier() -> f64 {
    reference::ScenarioKind::Conservative.default_multiplier()
}

fn default_expected_multiplier() -> f64 {
    reference::ScenarioKind::Expected.default_multiplier()
}

fn default_aggressive_multiplier() -> f64 {
    reference::ScenarioKind::Aggressive.default_multiplier()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            discount_rate_pct: default_discount_rate_pct(),
            horizon_months: default_horizon_months(),
            ongoing_opex_pct: default_ongoing_opex_pct(),
            quarterly_erosion_pct: default_quarterly_erosion_pct(),
            hurdle_rate_pct: default_hurdle_rate_pct(),
            weeks_per_month: default_weeks_per_month(),
            campaign_bucket_days: default_campaign_bucket_days(),
            content_hours_per_asset: default_content_hours_per_asset(),
            fte_hours_per_year: default_fte_hours_per_year(),
            misattribution_loss_rate: default_misattribution_loss_rate(),
            campaign_value_per_day: default_campaign_value_per_day(),
            sensitivity_swing_pct: default_sensitivity_swing_pct(),
            scenario_multipliers: ScenarioMultipliers::default(),
            channels: reference::default_channel_table(),
        }
    }
}

impl ModelConfig {
    // Pure function: a rate expressed in percent must be non-negative.
    fn validate_non_negative(value: f64, name: &str) -> Result<(), String> {
        if value >= 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(format!("{} must be a non-negative finite number", name))
        }
    }

    fn validate_multiplier_order(m: &ScenarioMultipliers) -> Result<(), String> {
        if m.conservative <= m.expected && m.expected <= m.aggressive {
            Ok(())
        } else {
            Err(format!(
                "scenario multipliers must be ordered conservative <= expected <= aggressive, got {} / {} / {}",
                m.conservative, m.expected, m.aggressive
            ))
        }
    }

    fn collect_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_non_negative(self.discount_rate_pct, "discount_rate_pct"),
            Self::validate_non_negative(self.ongoing_opex_pct, "ongoing_opex_pct"),
            Self::validate_non_negative(self.hurdle_rate_pct, "hurdle_rate_pct"),
            Self::validate_non_negative(self.campaign_value_per_day, "campaign_value_per_day"),
            Self::validate_non_negative(self.sensitivity_swing_pct, "sensitivity_swing_pct"),
            if self.quarterly_erosion_pct >= 0.0 && self.quarterly_erosion_pct < 100.0 {
                Ok(())
            } else {
                Err("quarterly_erosion_pct must be in [0, 100)".to_string())
            },
            if self.horizon_months >= 1 {
                Ok(())
            } else {
                Err("horizon_months must be at least 1".to_string())
            },
            if self.weeks_per_month > 0.0 {
                Ok(())
            } else {
                Err("weeks_per_month must be positive".to_string())
            },
            if self.fte_hours_per_year > 0.0 {
                Ok(())
            } else {
                Err("fte_hours_per_year must be positive".to_string())
            },
            if (0.0..=1.0).contains(&self.misattribution_loss_rate) {
                Ok(())
            } else {
                Err("misattribution_loss_rate must be a fraction in [0, 1]".to_string())
            },
            Self::validate_multiplier_order(&self.scenario_multipliers),
        ]
    }

    /// Validate overrides, accumulating every problem into one message.
    pub fn validate(&self) -> Result<(), String> {
        let problems: Vec<String> = self
            .collect_validations()
            .into_iter()
            .filter_map(Result::err)
            .collect();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }

    /// Load configuration from an explicit path, or from `roiscope.toml` in
    /// the working directory, falling back to defaults when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(CONFIG_FILE_NAME),
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(format!("config file not found: {}", path.display()));
            }
            log::debug!("no {} found, using model defaults", CONFIG_FILE_NAME);
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
        config.validate()?;
        log::debug!("loaded model config from {}", path.display());
        Ok(config)
    }
}

static MODEL_CONFIG: OnceLock<ModelConfig> = OnceLock::new();

/// Process-wide config for the CLI. First call loads `roiscope.toml` from
/// the working directory; later calls return the cached value.
pub fn get_model_config() -> &'static ModelConfig {
    MODEL_CONFIG.get_or_init(|| match ModelConfig::load(None) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring invalid model config: {}", e);
            ModelConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ModelConfig::default().validate(), Ok(()));
    }

    #[test]
    fn partial_toml_overrides_merge_with_defaults() {
        let config: ModelConfig = toml::from_str(indoc! {r#"
            discount_rate_pct = 8.0

            [scenario_multipliers]
            aggressive = 1.5
        "#})
        .unwrap();

        assert_eq!(config.discount_rate_pct, 8.0);
        assert_eq!(config.horizon_months, reference::HORIZON_MONTHS);
        assert_eq!(config.scenario_multipliers.aggressive, 1.5);
        assert_eq!(config.scenario_multipliers.expected, 1.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validation_accumulates_all_problems() {
        let config = ModelConfig {
            quarterly_erosion_pct: 120.0,
            discount_rate_pct: -1.0,
            ..ModelConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("quarterly_erosion_pct"));
        assert!(err.contains("discount_rate_pct"));
    }

    #[test]
    fn out_of_order_multipliers_are_rejected() {
        let config = ModelConfig {
            scenario_multipliers: ScenarioMultipliers {
                conservative: 1.4,
                expected: 1.0,
                aggressive: 1.3,
            },
            ..ModelConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
