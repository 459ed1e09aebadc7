use std::path::PathBuf;

use crate::raw_viewer::camera::canonical_name;
use crate::raw_viewer::raw::FrameKind;

/// Maps `(kind, index)` to capture file paths under the data directory.
#[derive(Debug, Clone)]
pub struct FrameLocator {
    base_dir: PathBuf,
    camera_key: String,
}

impl FrameLocator {
    pub fn new(base_dir: impl Into<PathBuf>, camera_name: &str) -> Self {
        Self {
            base_dir: base_dir.into(),
            camera_key: canonical_name(camera_name),
        }
    }

    pub fn path(&self, kind: FrameKind, index: u64) -> PathBuf {
        let file_name = match kind {
            FrameKind::Color => format!("{}_{}.raw", self.camera_key, index),
            FrameKind::DepthMotion => format!("{}_depth_motion_{}.raw", self.camera_key, index),
        };
        self.base_dir.join(file_name)
    }

    pub fn color_path(&self, index: u64) -> PathBuf {
        self.path(FrameKind::Color, index)
    }

    pub fn depth_motion_path(&self, index: u64) -> PathBuf {
        self.path(FrameKind::DepthMotion, index)
    }
}
