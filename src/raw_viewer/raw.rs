//! Raw frame reading module
//!
//! Typed reinterpretation of uncompressed multi-channel float captures.

mod reader;
mod file_reader;
pub mod types;

#[cfg(test)]
mod tests;

pub use reader::RawFrameReader;
pub use file_reader::FileFrameReader;
pub use types::{FrameKind, FrameShape, RawFrame, SampleFormat};
