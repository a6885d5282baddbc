pub mod file_filter;
pub mod page_scanner;

pub use file_filter::FileFilter;
pub use page_scanner::PageScanner;
