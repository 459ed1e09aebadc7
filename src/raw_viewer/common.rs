//! Common utilities module
//!
//! This module contains the error type and the step timing helpers shared
//! across the viewer.

pub mod error;
pub mod timing;

pub use error::{ViewerError, Result};
pub use timing::{CycleTimings, StepTiming, Timer};
