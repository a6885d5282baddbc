use crate::config::{CliOverrides, Config};
use crate::error::Result;
use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "debugharvest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collect page debug metadata from mirrored HTML pages into CSV")]
#[command(
    long_about = "DebugHarvest reads the pages a mirroring run saved under <DATESTAMP>/<TIMESTAMP>/pages, \
                  pulls the debug-data-item markers out of each page and writes one CSV row per page \
                  to <DATESTAMP>/<TIMESTAMP>/nodes.csv, then prints a count of pages per content type."
)]
#[command(after_help = "EXAMPLES:\n  \
    debugharvest 20160525 112610\n  \
    debugharvest 20160525 112610 --root /srv/mirror\n  \
    debugharvest 20160525 112610 --output-format json --quiet")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Date stamp of the mirroring run (e.g. 20160525)
    #[arg(value_parser = validate_stamp)]
    pub datestamp: String,

    /// Time stamp of the mirroring run (e.g. 112610)
    #[arg(value_parser = validate_stamp)]
    pub timestamp: String,

    /// Directory containing the date stamped run directories
    #[arg(long, help = "Directory the <DATESTAMP>/<TIMESTAMP> path is resolved against")]
    pub root: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for console messages and the summary
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors and the summary)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new().with_root(self.root.clone())
    }

    pub fn output_mode(&self) -> OutputMode {
        match self.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

/// Stamps become path segments, so they must be a single plain component.
pub fn validate_stamp(s: &str) -> std::result::Result<String, String> {
    if s.trim().is_empty() {
        return Err("Stamp must not be empty".to_string());
    }

    if s.contains(|c| c == '/' || c == '\\') {
        return Err("Stamp must not contain path separators".to_string());
    }

    if s == "." || s == ".." {
        return Err("Stamp must not be a relative directory reference".to_string());
    }

    Ok(s.to_string())
}
