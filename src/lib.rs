// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod errors;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::config::{get_model_config, ModelConfig, ScenarioMultipliers};

pub use crate::engine::{
    compute_baseline, compute_roi, compute_sensitivity, Baseline, ChannelRoas,
    ContentAndCampaignOps, DoNothingProjection, ImprovementAssumptions, MartechAndMedia,
    MonthPoint, OperationalPain, OrganizationProfile, Outputs, ReturnMetrics, Scenario,
    ScenarioKind, ScenarioOutcome, SensitivityGrid, TransformationInvestment, ValueStream,
    ValueStreamKey, WaterfallEntry,
};

pub use crate::engine::reference::{
    agent_intensity, confidence_level, industry_budget_pct, source_attribution,
};

pub use crate::errors::RoiscopeError;

pub use crate::io::{create_writer, OutputFormat, OutputWriter};
