use anyhow::Result;
use clap::Parser;
use roiscope::cli::{Cli, Commands};
use roiscope::commands::{self, AnalyzeConfig, SensitivityConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            scenario,
            format,
            output,
            disable_streams,
            config,
            color,
            verbosity,
        } => {
            init_logging(verbosity);
            commands::handle_analyze(AnalyzeConfig {
                scenario_path: scenario,
                format: format.to_output_format(),
                output,
                disable_streams: disable_streams.unwrap_or_default(),
                config_path: config,
                color,
            })
        }
        Commands::Sensitivity {
            scenario,
            format,
            output,
            disable_streams,
            config,
            color,
            verbosity,
        } => {
            init_logging(verbosity);
            commands::handle_sensitivity(SensitivityConfig {
                scenario_path: scenario,
                format: format.to_output_format(),
                output,
                disable_streams: disable_streams.unwrap_or_default(),
                config_path: config,
                color,
            })
        }
        Commands::Init { force } => {
            init_logging(0);
            commands::init_workspace(force)
        }
    }
}

/// RUST_LOG wins; `-v` raises the default level otherwise.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
