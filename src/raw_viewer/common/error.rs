use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to load camera config: {0}")]
    ConfigError(String),

    #[error("Camera not found in config: {0}")]
    UnknownCamera(String),

    #[error("Failed to read frame {index} from {path:?}: {reason}")]
    FrameReadError {
        index: u64,
        path: PathBuf,
        reason: String,
    },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        expected: String,
        actual: String,
    },

    #[error("Display error: {0}")]
    DisplayError(String),
}

impl ViewerError {
    /// Frame index carried by a frame read failure, if any.
    pub fn frame_index(&self) -> Option<u64> {
        match self {
            ViewerError::FrameReadError { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Tags a frame read failure with the frame index it was read for.
    pub fn at_frame(self, frame: u64) -> Self {
        match self {
            ViewerError::FrameReadError { path, reason, .. } => ViewerError::FrameReadError {
                index: frame,
                path,
                reason,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
