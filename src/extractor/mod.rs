pub mod page_extractor;
pub mod record;

pub use page_extractor::MarkerExtractor;
pub use record::{DebugField, NodeRecord};
