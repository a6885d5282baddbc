pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod paths;
pub mod report;
pub mod scanner;
pub mod ui;
pub mod writer;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, InputConfig, MarkerConfig, PathConfig, ReportConfig};
pub use error::{HarvestError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{DebugField, MarkerExtractor, NodeRecord};
pub use paths::RunPaths;
pub use report::{ContentTypeCount, Summary};
pub use scanner::{FileFilter, PageScanner};
pub use ui::{OutputFormatter, OutputMode, ProgressAwareOutput, ProgressManager};
pub use writer::NodeWriter;

use std::time::Instant;

/// Runs one extraction over the pages of a mirroring run.
pub struct DebugHarvest {
    config: Config,
    paths: RunPaths,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl DebugHarvest {
    pub fn new(
        config: Config,
        datestamp: &str,
        timestamp: &str,
        output_mode: OutputMode,
        verbose: u8,
        quiet: bool,
    ) -> Self {
        let paths = RunPaths::new(&config.paths, datestamp, timestamp);
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet && output_mode == OutputMode::Human);

        Self {
            config,
            paths,
            output_formatter,
            progress_manager,
        }
    }

    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;

        Ok(Self::new(
            config,
            &cli_args.datestamp,
            &cli_args.timestamp,
            cli_args.output_mode(),
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    /// Extracts every page, writes the CSV and prints the summary.
    pub fn run(&self) -> Result<Summary> {
        // Reset happens before the pages directory is even looked at
        let mut writer = NodeWriter::new(self.paths.output_file())?;
        self.output_formatter.debug(&format!(
            "Output reset: {}",
            writer.output_file().display()
        ));

        let nodes = self.process_pages(&mut writer)?;
        let summary = self.summarise(&nodes);

        self.output_formatter.print_summary(
            &summary,
            self.config.report.label_width,
            &self.config.report.total_label,
        );

        Ok(summary)
    }

    /// Reads each page in directory order, appending its row as soon as it is extracted.
    pub fn process_pages(&self, writer: &mut NodeWriter) -> Result<Vec<NodeRecord>> {
        let scanner = PageScanner::new(&self.config.input)?;
        let extractor = MarkerExtractor::new(&self.config.markers)?;

        let pages = scanner.scan_directory(self.paths.pages_dir())?;
        self.output_formatter.info(&format!(
            "Found {} pages in {}",
            pages.len(),
            self.paths.pages_dir().display()
        ));

        let start_time = Instant::now();
        let page_progress = self.progress_manager.create_page_progress(pages.len() as u64);
        let output = ProgressAwareOutput::new(&self.output_formatter, Some(&self.progress_manager));

        let mut nodes = Vec::with_capacity(pages.len());
        for (index, page) in pages.iter().enumerate() {
            output.page_progress(page);

            let mut node = extractor.extract_file(page)?;
            writer.write_record(&mut node)?;

            if node.content_type.is_none() && self.config.report.warn_missing_content_type {
                output.warning(&format!("Page \"{}\" missing debug data", page.display()));
            }
            output.debug(&format!("{:?}", node.columns()));

            nodes.push(node);
            ui::progress::update_page_progress(&page_progress, index as u64 + 1, page);
        }

        ui::progress::finish_progress_with_summary(
            &page_progress,
            &format!("Read {} pages", nodes.len()),
            start_time.elapsed(),
        );
        self.output_formatter.success(&format!(
            "Wrote {} rows to {}",
            writer.rows_written(),
            writer.output_file().display()
        ));

        Ok(nodes)
    }

    pub fn summarise(&self, nodes: &[NodeRecord]) -> Summary {
        Summary::from_nodes(
            nodes,
            self.paths.output_file(),
            &self.config.report.flagged_content_types,
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn paths(&self) -> &RunPaths {
        &self.paths
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &HarvestError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
