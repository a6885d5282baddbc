use crate::config::InputConfig;
use crate::error::{HarvestError, Result};
use crate::scanner::file_filter::FileFilter;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the downloaded pages of one run.
///
/// Only the top level of the pages directory is read and entries keep the
/// order the filesystem returns them in.
pub struct PageScanner {
    filter: FileFilter,
}

impl PageScanner {
    pub fn new(config: &InputConfig) -> Result<Self> {
        Ok(Self {
            filter: FileFilter::new(config)?,
        })
    }

    pub fn scan_directory<P: AsRef<Path>>(&self, pages_dir: P) -> Result<Vec<PathBuf>> {
        let pages_dir = pages_dir.as_ref();

        if !pages_dir.exists() {
            return Err(HarvestError::MissingInputPath {
                path: pages_dir.display().to_string(),
            });
        }

        if !pages_dir.is_dir() {
            return Err(HarvestError::NotADirectory {
                path: pages_dir.display().to_string(),
            });
        }

        let walker = WalkDir::new(pages_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        let mut pages = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| HarvestError::Io(e.into()))?;

            // Symlinks count by their target; subdirectories are not pages
            if !entry.path().is_file() {
                continue;
            }

            if self.filter.is_page_name(entry.path()) {
                pages.push(entry.into_path());
            }
        }

        Ok(pages)
    }
}
