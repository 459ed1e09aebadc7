//! Raw frame reader for headerless float dumps on disk.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::raw_viewer::common::error::{Result, ViewerError};
use crate::raw_viewer::raw::reader::RawFrameReader;
use crate::raw_viewer::raw::types::{FrameShape, RawFrame, SampleFormat};

/// Reads exactly `height * width * channels` samples from the start of a file.
///
/// Shorter files are an error; bytes past the expected length are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFrameReader;

impl RawFrameReader for FileFrameReader {
    fn read_frame(&self, path: &Path, format: SampleFormat, shape: FrameShape) -> Result<RawFrame> {
        let expected_bytes = shape.sample_count() * format.bytes_per_sample();
        let io_error = |reason: String| ViewerError::FrameReadError {
            index: 0,
            path: path.to_path_buf(),
            reason,
        };

        let file = File::open(path).map_err(|e| io_error(e.to_string()))?;
        let file_len = file.metadata().map_err(|e| io_error(e.to_string()))?.len();

        // check the size on disk before allocating for the configured shape
        if file_len < expected_bytes as u64 {
            return Err(io_error(format!(
                "truncated frame: expected {} bytes for shape {}, got {}",
                expected_bytes, shape, file_len
            )));
        }
        if file_len > expected_bytes as u64 {
            debug!(
                "Ignoring {} trailing bytes in {}",
                file_len - expected_bytes as u64,
                path.display()
            );
        }

        let mut bytes = Vec::with_capacity(expected_bytes);
        BufReader::new(file)
            .take(expected_bytes as u64)
            .read_to_end(&mut bytes)
            .map_err(|e| io_error(e.to_string()))?;

        if bytes.len() < expected_bytes {
            return Err(io_error(format!(
                "truncated frame: expected {} bytes for shape {}, got {}",
                expected_bytes,
                shape,
                bytes.len()
            )));
        }

        let data = bytes
            .chunks_exact(4)
            .map(|b| format.decode([b[0], b[1], b[2], b[3]]))
            .collect();

        Ok(RawFrame { shape, data })
    }
}
