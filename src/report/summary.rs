use crate::extractor::NodeRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Label used for pages that carry no content type.
pub const NO_CONTENT_TYPE_LABEL: &str = "(none)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTypeCount {
    pub content_type: Option<String>,
    pub count: usize,
}

impl ContentTypeCount {
    pub fn label(&self) -> &str {
        self.content_type.as_deref().unwrap_or(NO_CONTENT_TYPE_LABEL)
    }
}

/// A page whose content type was configured as needing a closer look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedPage {
    pub content_type: String,
    pub file: PathBuf,
    pub absolute_uri: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Ascending by content type; pages without one sort first.
    pub groups: Vec<ContentTypeCount>,
    pub total_pages: usize,
    pub output_file: PathBuf,
    pub flagged: Vec<FlaggedPage>,
}

impl Summary {
    pub fn from_nodes(nodes: &[NodeRecord], output_file: &Path, flagged_types: &[String]) -> Self {
        let mut counts: BTreeMap<Option<&str>, usize> = BTreeMap::new();
        let mut flagged = Vec::new();

        for node in nodes {
            let content_type = node.content_type.as_deref();
            *counts.entry(content_type).or_insert(0) += 1;

            if let Some(content_type) = content_type {
                if flagged_types.iter().any(|t| t == content_type) {
                    flagged.push(FlaggedPage {
                        content_type: content_type.to_string(),
                        file: node.source_file().to_path_buf(),
                        absolute_uri: node.absolute_uri.clone(),
                    });
                }
            }
        }

        let groups: Vec<ContentTypeCount> = counts
            .into_iter()
            .map(|(content_type, count)| ContentTypeCount {
                content_type: content_type.map(str::to_string),
                count,
            })
            .collect();
        let total_pages = groups.iter().map(|g| g.count).sum();

        Self {
            groups,
            total_pages,
            output_file: output_file.to_path_buf(),
            flagged,
        }
    }

    pub fn count_for(&self, content_type: Option<&str>) -> Option<usize> {
        self.groups
            .iter()
            .find(|g| g.content_type.as_deref() == content_type)
            .map(|g| g.count)
    }

    /// The frequency table, total line and output location, one entry per line.
    pub fn render_lines(&self, label_width: usize, total_label: &str) -> Vec<String> {
        let mut lines: Vec<String> = self
            .groups
            .iter()
            .map(|g| format_row(g.label(), g.count, label_width))
            .collect();

        lines.push(format_row(total_label, self.total_pages, label_width));
        lines.push(format!("See output CSV in {}", self.output_file.display()));
        lines
    }

    pub fn flagged_lines(&self) -> Vec<String> {
        self.flagged
            .iter()
            .map(|page| {
                format!(
                    "'{}' content type: {} ({})",
                    page.content_type,
                    page.file.display(),
                    page.absolute_uri.as_deref().unwrap_or("")
                )
            })
            .collect()
    }
}

fn format_row(label: &str, count: usize, width: usize) -> String {
    format!("{:<width$}: {}", label, count, width = width)
}
