//! Viewer configuration types

use std::time::Duration;

use crate::raw_viewer::compose::CaptionStyle;
use crate::raw_viewer::raw::SampleFormat;

pub const DEFAULT_FPS: u32 = 30;
pub const DEFAULT_CAMERA_CONFIG_FILE: &str = "camera_config.csv";

/// Settings of one viewing session
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Target refresh rate; also bounds the key poll wait
    pub fps: u32,
    /// Camera table file name, relative to the data directory
    pub camera_config_file: String,
    /// Frame shown first
    pub start_index: u64,
    /// On-disk sample encoding of capture files
    pub sample_format: SampleFormat,
    pub caption_style: CaptionStyle,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            camera_config_file: DEFAULT_CAMERA_CONFIG_FILE.to_string(),
            start_index: 0,
            sample_format: SampleFormat::F32Le,
            caption_style: CaptionStyle::default(),
        }
    }
}

impl ViewerConfig {
    pub fn builder() -> ViewerConfigBuilder {
        ViewerConfigBuilder::default()
    }

    /// `1000 / fps` milliseconds.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}

/// Builder for ViewerConfig
#[derive(Default)]
pub struct ViewerConfigBuilder {
    fps: Option<u32>,
    camera_config_file: Option<String>,
    start_index: Option<u64>,
    sample_format: Option<SampleFormat>,
    caption_scale: Option<usize>,
}

impl ViewerConfigBuilder {
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }

    pub fn camera_config_file(mut self, file: impl Into<String>) -> Self {
        self.camera_config_file = Some(file.into());
        self
    }

    pub fn start_index(mut self, index: u64) -> Self {
        self.start_index = Some(index);
        self
    }

    pub fn sample_format(mut self, format: SampleFormat) -> Self {
        self.sample_format = Some(format);
        self
    }

    pub fn caption_scale(mut self, scale: usize) -> Self {
        self.caption_scale = Some(scale);
        self
    }

    pub fn build(self) -> ViewerConfig {
        let default = ViewerConfig::default();
        let mut caption_style = default.caption_style;
        if let Some(scale) = self.caption_scale {
            caption_style.scale = scale.max(1);
        }
        ViewerConfig {
            fps: self.fps.unwrap_or(default.fps).max(1),
            camera_config_file: self.camera_config_file.unwrap_or(default.camera_config_file),
            start_index: self.start_index.unwrap_or(default.start_index),
            sample_format: self.sample_format.unwrap_or(default.sample_format),
            caption_style,
        }
    }
}
