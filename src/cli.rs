use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Colored tables for interactive use
    Terminal,
    /// Full result set as pretty JSON
    Json,
    /// Report suitable for sharing
    Markdown,
}

impl FormatArg {
    pub fn to_output_format(self) -> OutputFormat {
        match self {
            Self::Terminal => OutputFormat::Terminal,
            Self::Json => OutputFormat::Json,
            Self::Markdown => OutputFormat::Markdown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "roiscope")]
#[command(about = "Marketing transformation ROI modeling engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the full ROI result set for a scenario file
    Analyze {
        /// Scenario JSON file (the six input groups)
        scenario: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: FormatArg,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Value streams to exclude from the total (e.g. roas,content)
        #[arg(long = "disable-stream", value_delimiter = ',')]
        disable_streams: Option<Vec<String>>,

        /// Model config file (defaults to roiscope.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Color output: auto, always, never
        #[arg(long, default_value = "auto")]
        color: String,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Compute the two-factor payback sensitivity grid
    Sensitivity {
        /// Scenario JSON file (the six input groups)
        scenario: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: FormatArg,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Value streams to exclude from the total (e.g. roas,content)
        #[arg(long = "disable-stream", value_delimiter = ',')]
        disable_streams: Option<Vec<String>>,

        /// Model config file (defaults to roiscope.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Color output: auto, always, never
        #[arg(long, default_value = "auto")]
        color: String,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a starter scenario.json and roiscope.toml
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}
