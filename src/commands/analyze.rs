use crate::engine;
use crate::io::{self, OutputFormat};
use anyhow::Result;
use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub scenario_path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub disable_streams: Vec<String>,
    pub config_path: Option<PathBuf>,
    pub color: String,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    super::apply_color_mode(&config.color)?;
    let model = super::load_model_config(config.config_path.as_deref())?;
    let disabled = super::parse_disabled_streams(&config.disable_streams)?;
    let scenario = io::read_scenario(&config.scenario_path)?;

    log::debug!(
        "computing ROI for {} ({} streams disabled)",
        config.scenario_path.display(),
        disabled.len()
    );
    let outputs = engine::compute_roi(&scenario, &disabled, &model);

    let mut writer = match &config.output {
        Some(path) => {
            let file = File::create(path)?;
            io::create_writer(config.format, file, model.hurdle_rate_pct)
        }
        None => io::create_writer(config.format, stdout(), model.hurdle_rate_pct),
    };
    writer.write_outputs(&outputs)?;

    if let Some(path) = &config.output {
        log::info!("wrote analysis to {}", path.display());
    }
    Ok(())
}
