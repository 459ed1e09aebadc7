pub mod logger;
pub mod raw_viewer;
