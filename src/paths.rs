use crate::config::PathConfig;
use std::path::{Path, PathBuf};

/// Locations used by one run, all derived from `<root>/<date>/<time>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pages_dir: PathBuf,
    output_file: PathBuf,
}

impl RunPaths {
    pub fn new(config: &PathConfig, datestamp: &str, timestamp: &str) -> Self {
        let base = config.root.join(datestamp).join(timestamp);
        let pages_dir = base.join(&config.pages_dir);
        let output_file = base.join(&config.output_file);

        Self {
            pages_dir,
            output_file,
        }
    }

    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}
