pub mod summary;

pub use summary::{ContentTypeCount, FlaggedPage, Summary, NO_CONTENT_TYPE_LABEL};
