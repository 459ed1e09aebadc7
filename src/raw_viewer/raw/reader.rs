use std::path::Path;

use crate::raw_viewer::common::error::Result;
use crate::raw_viewer::raw::types::{FrameShape, RawFrame, SampleFormat};

pub trait RawFrameReader {
    fn read_frame(&self, path: &Path, format: SampleFormat, shape: FrameShape) -> Result<RawFrame>;
}
