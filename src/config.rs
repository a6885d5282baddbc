use crate::error::{HarvestError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathConfig,
    pub input: InputConfig,
    pub markers: MarkerConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathConfig {
    /// Directory the `<date>/<time>` run directory is resolved against
    pub root: PathBuf,
    pub pages_dir: String,
    pub output_file: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    pub include_hidden: bool,
    pub exclude_patterns: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub class: String,
    pub name_attribute: String,
    pub value_attribute: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    pub label_width: usize,
    pub total_label: String,
    pub flagged_content_types: Vec<String>,
    pub warn_missing_content_type: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pages_dir: "pages".to_string(),
            output_file: "nodes.csv".to_string(),
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            class: "debug-data-item".to_string(),
            name_attribute: "data-name".to_string(),
            value_attribute: "data-value".to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label_width: 50,
            total_label: "Total pages".to_string(),
            flagged_content_types: vec!["UNKNOWN".to_string()],
            warn_missing_content_type: true,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(HarvestError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| HarvestError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| HarvestError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["debugharvest.toml", ".debugharvest.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref root) = cli_args.root {
            self.paths.root = root.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.paths.pages_dir.trim().is_empty() {
            return Err(HarvestError::Config {
                message: "pages_dir must not be empty".to_string(),
            });
        }

        let output_file = self.paths.output_file.trim();
        if output_file.is_empty() || output_file.contains(|c| c == '/' || c == '\\') {
            return Err(HarvestError::Config {
                message: format!(
                    "output_file must be a plain file name, got {:?}",
                    self.paths.output_file
                ),
            });
        }

        for (key, value) in [
            ("class", &self.markers.class),
            ("name_attribute", &self.markers.name_attribute),
            ("value_attribute", &self.markers.value_attribute),
        ] {
            if value.trim().is_empty() {
                return Err(HarvestError::Config {
                    message: format!("markers.{} must not be empty", key),
                });
            }
        }

        if self.report.label_width == 0 {
            return Err(HarvestError::Config {
                message: "report.label_width must be greater than 0".to_string(),
            });
        }

        for pattern in &self.input.exclude_patterns {
            Regex::new(pattern)?;
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub root: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: Option<PathBuf>) -> Self {
        self.root = root;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.paths.pages_dir, "pages");
        assert_eq!(config.paths.output_file, "nodes.csv");
        assert_eq!(config.markers.class, "debug-data-item");
        assert_eq!(config.report.label_width, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.paths.output_file = "out/nodes.csv".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.markers.name_attribute.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.input.exclude_patterns = vec!["[".to_string()];
        assert!(matches!(config.validate(), Err(HarvestError::Config { .. })));
    }

    #[test]
    fn test_partial_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[markers]\nclass = \"drupal-debug\"\n\n[input]\nexclude_patterns = [\"\\\\.orig$\"]").unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.markers.class, "drupal-debug");
        assert_eq!(config.markers.name_attribute, "data-name");
        assert_eq!(config.input.exclude_patterns, vec![r"\.orig$"]);
        assert_eq!(config.paths.output_file, "nodes.csv");
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::load_from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(HarvestError::Config { .. })));
    }

    #[test]
    fn test_malformed_config_file_names_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[report]\nlabel_width = \"wide\"").unwrap();

        match Config::load_from_file(temp_file.path()) {
            Err(HarvestError::Config { message }) => {
                assert!(message.contains("Failed to parse config file"));
                assert!(message.contains(&temp_file.path().display().to_string()));
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();
        let overrides = CliOverrides::new().with_root(Some(PathBuf::from("/srv/mirror")));

        config.merge_with_cli_args(&overrides);
        assert_eq!(config.paths.root, PathBuf::from("/srv/mirror"));

        config.merge_with_cli_args(&CliOverrides::new());
        assert_eq!(config.paths.root, PathBuf::from("/srv/mirror"));
    }
}
