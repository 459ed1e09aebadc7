//! Session context module
//!
//! Everything one viewing session needs (camera record, file locations,
//! reader, settings) gathered in an explicit value instead of globals.

mod config;
mod context;
mod locator;


pub use config::{ViewerConfig, ViewerConfigBuilder, DEFAULT_CAMERA_CONFIG_FILE, DEFAULT_FPS};
pub use context::Session;
pub use locator::FrameLocator;
