use crate::config::CONFIG_FILE_NAME;
use crate::engine::Scenario;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

const SCENARIO_FILE_NAME: &str = "scenario.json";

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# roiscope model configuration
#
# Every value shown is the default; uncomment to override.

# discount_rate_pct = 10.0
# horizon_months = 36
# ongoing_opex_pct = 15.0
# quarterly_erosion_pct = 2.5
# hurdle_rate_pct = 12.0
# sensitivity_swing_pct = 25.0

# [scenario_multipliers]
# conservative = 0.70
# expected = 1.00
# aggressive = 1.30

# Channel table rows replace the whole default table when present.
# [[channels]]
# key = "paid_search"
# label = "Paid search"
# base_roas = 3.6
# lift_pct = 22.0
"#;

/// Write a starter scenario and config into the working directory.
pub fn init_workspace(force: bool) -> Result<()> {
    let scenario_path = PathBuf::from(SCENARIO_FILE_NAME);
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if !force {
        if scenario_path.exists() {
            anyhow::bail!("{} already exists. Use --force to overwrite.", SCENARIO_FILE_NAME);
        }
        if config_path.exists() {
            anyhow::bail!("{} already exists. Use --force to overwrite.", CONFIG_FILE_NAME);
        }
    }

    io::write_scenario(&scenario_path, &Scenario::default())?;
    io::write_file(&config_path, DEFAULT_CONFIG_TEMPLATE)?;

    println!("Created {SCENARIO_FILE_NAME} and {CONFIG_FILE_NAME}");
    Ok(())
}
