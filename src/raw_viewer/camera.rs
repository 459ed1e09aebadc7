//! Camera configuration module
//!
//! Per-camera geometry and optics records loaded once from the capture
//! folder's camera table.

mod store;
pub mod types;


pub use store::CameraConfigStore;
pub use types::{canonical_name, CameraRecord};
