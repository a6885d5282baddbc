use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read page {path}: {source}")]
    ReadPage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path to downloaded pages \"{path}\" does not exist")]
    MissingInputPath { path: String },

    #[error("Path to output CSV \"{path}\" does not exist")]
    MissingOutputPath { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid marker selector {selector}: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for HarvestError {
    fn user_message(&self) -> String {
        match self {
            HarvestError::ReadPage { path, source } => {
                format!("Could not read page {}: {}", path.display(), source)
            }
            HarvestError::MissingInputPath { path } => {
                format!("Downloaded pages directory not found: {}", path)
            }
            HarvestError::MissingOutputPath { path } => {
                format!("Output directory not found: {}", path)
            }
            HarvestError::NotADirectory { path } => {
                format!("Expected a directory of pages but found a file: {}", path)
            }
            HarvestError::InvalidSelector { selector, message } => {
                format!("Marker settings produce an invalid selector {}: {}", selector, message)
            }
            HarvestError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            HarvestError::MissingInputPath { .. } => Some(
                "Check the date and time stamps match a mirrored run, e.g. `debugharvest 20160525 112610` reads ./20160525/112610/pages".to_string()
            ),
            HarvestError::MissingOutputPath { .. } => Some(
                "The <date>/<time> directory must exist before the CSV can be written there.".to_string()
            ),
            HarvestError::NotADirectory { .. } => Some(
                "Point the pages_dir setting at the directory the mirroring tool wrote pages into.".to_string()
            ),
            HarvestError::InvalidSelector { .. } => Some(
                "Use plain class and attribute names in the [markers] section of the configuration.".to_string()
            ),
            HarvestError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all values are valid.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<regex::Error> for HarvestError {
    fn from(error: regex::Error) -> Self {
        HarvestError::Config {
            message: format!("Invalid exclude pattern: {}", error),
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
