use crate::config::InputConfig;
use crate::error::Result;
use regex::Regex;
use std::path::Path;

/// Decides which entries of the pages directory are treated as pages.
pub struct FileFilter {
    include_hidden: bool,
    exclude_patterns: Vec<Regex>,
}

impl FileFilter {
    pub fn new(config: &InputConfig) -> Result<Self> {
        let exclude_patterns = config
            .exclude_patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            include_hidden: config.include_hidden,
            exclude_patterns,
        })
    }

    pub fn is_page_name(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name() else {
            return false;
        };
        // Invalid bytes become U+FFFD; a leading '.' survives the conversion
        let file_name = file_name.to_string_lossy();

        // Same as a shell `*` glob: dotfiles are not matched
        if file_name.starts_with('.') && !self.include_hidden {
            return false;
        }

        !self.matches_any_pattern(&file_name)
    }

    pub fn matches_any_pattern(&self, text: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.is_match(text))
    }
}
