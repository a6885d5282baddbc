use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The debug fields a page can carry, in CSV column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugField {
    NodeId,
    NodeUrl,
    ContentType,
    Template,
    Uri,
    AbsoluteUri,
}

impl DebugField {
    pub const ALL: [DebugField; 6] = [
        DebugField::NodeId,
        DebugField::NodeUrl,
        DebugField::ContentType,
        DebugField::Template,
        DebugField::Uri,
        DebugField::AbsoluteUri,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DebugField::NodeId => "node_id",
            DebugField::NodeUrl => "node_url",
            DebugField::ContentType => "content_type",
            DebugField::Template => "template",
            DebugField::Uri => "uri",
            DebugField::AbsoluteUri => "absolute_uri",
        }
    }
}

impl FromStr for DebugField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DebugField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown debug field: {}", s))
    }
}

/// Debug data gathered from a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeRecord {
    pub node_id: Option<String>,
    pub node_url: Option<String>,
    pub content_type: Option<String>,
    pub template: Option<String>,
    pub uri: Option<String>,
    pub absolute_uri: Option<String>,
    source_file: PathBuf,
}

impl NodeRecord {
    pub fn new<P: Into<PathBuf>>(source_file: P) -> Self {
        Self {
            source_file: source_file.into(),
            ..Self::default()
        }
    }

    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    pub fn get(&self, field: DebugField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Later values for the same field replace earlier ones.
    pub fn set<S: Into<String>>(&mut self, field: DebugField, value: S) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Sets a field by its marker name. Returns false for names outside the schema.
    pub fn set_by_name<S: Into<String>>(&mut self, name: &str, value: S) -> bool {
        match name.parse::<DebugField>() {
            Ok(field) => {
                self.set(field, value);
                true
            }
            Err(_) => false,
        }
    }

    pub fn normalize_empty(&mut self) {
        for field in DebugField::ALL {
            let slot = self.slot_mut(field);
            if slot.as_deref() == Some("") {
                *slot = None;
            }
        }
    }

    pub fn columns(&self) -> [Option<&str>; 6] {
        DebugField::ALL.map(|field| self.get(field))
    }

    pub fn is_empty(&self) -> bool {
        self.columns().iter().all(Option::is_none)
    }

    fn slot(&self, field: DebugField) -> &Option<String> {
        match field {
            DebugField::NodeId => &self.node_id,
            DebugField::NodeUrl => &self.node_url,
            DebugField::ContentType => &self.content_type,
            DebugField::Template => &self.template,
            DebugField::Uri => &self.uri,
            DebugField::AbsoluteUri => &self.absolute_uri,
        }
    }

    fn slot_mut(&mut self, field: DebugField) -> &mut Option<String> {
        match field {
            DebugField::NodeId => &mut self.node_id,
            DebugField::NodeUrl => &mut self.node_url,
            DebugField::ContentType => &mut self.content_type,
            DebugField::Template => &mut self.template,
            DebugField::Uri => &mut self.uri,
            DebugField::AbsoluteUri => &mut self.absolute_uri,
        }
    }
}
