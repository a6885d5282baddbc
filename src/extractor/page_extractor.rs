//! Reads marker elements out of mirrored HTML pages.
//!
//! Pages carry hidden elements such as
//!
//! ```html
//! <div class="debug-data-item" data-name="content_type" data-value="article"></div>
//! ```
//!
//! Every element with the marker class and both attributes contributes one
//! name/value pair. Parsing is lenient: broken markup still yields whatever
//! markers the HTML parser recovers.

use crate::config::MarkerConfig;
use crate::error::{HarvestError, Result};
use crate::extractor::record::NodeRecord;
use scraper::{Html, Selector};
use std::fs;
use std::path::Path;

pub struct MarkerExtractor {
    selector: Selector,
    name_attribute: String,
    value_attribute: String,
}

impl MarkerExtractor {
    pub fn new(config: &MarkerConfig) -> Result<Self> {
        let selector_str = marker_selector(config);
        let selector = Selector::parse(&selector_str).map_err(|e| HarvestError::InvalidSelector {
            selector: selector_str.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            selector,
            name_attribute: config.name_attribute.clone(),
            value_attribute: config.value_attribute.clone(),
        })
    }

    /// Builds a record from markers in document order.
    pub fn extract(&self, html: &str, source_file: &Path) -> NodeRecord {
        let document = Html::parse_document(html);
        let mut record = NodeRecord::new(source_file);

        for element in document.select(&self.selector) {
            let element = element.value();
            if let (Some(name), Some(value)) = (
                element.attr(&self.name_attribute),
                element.attr(&self.value_attribute),
            ) {
                record.set_by_name(name, value);
            }
        }

        record
    }

    pub fn extract_file(&self, path: &Path) -> Result<NodeRecord> {
        let bytes = fs::read(path).map_err(|source| HarvestError::ReadPage {
            path: path.to_path_buf(),
            source,
        })?;

        // Mirrored pages are not always valid UTF-8
        let html = String::from_utf8_lossy(&bytes);
        Ok(self.extract(&html, path))
    }
}

fn marker_selector(config: &MarkerConfig) -> String {
    format!(
        "[class~=\"{}\"][{}][{}]",
        config.class.replace('"', "\\\""),
        config.name_attribute,
        config.value_attribute
    )
}
