//! Raw frame data types

use std::fmt;

/// Channel semantics of a capture file. Both kinds share the same
/// `(height, width, 4)` float layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// RGB plus an unused alpha channel
    Color,
    /// depth, motion x, motion y, unused
    DepthMotion,
}

/// On-disk encoding of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleFormat {
    #[default]
    F32Le,
    F32Be,
}

impl SampleFormat {
    pub fn bytes_per_sample(self) -> usize {
        4
    }

    pub(crate) fn decode(self, bytes: [u8; 4]) -> f32 {
        match self {
            SampleFormat::F32Le => f32::from_le_bytes(bytes),
            SampleFormat::F32Be => f32::from_be_bytes(bytes),
        }
    }
}

/// Logical `(height, width, channels)` of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameShape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl FrameShape {
    pub const CAPTURE_CHANNELS: usize = 4;

    pub fn new(height: usize, width: usize, channels: usize) -> Self {
        Self { height, width, channels }
    }

    /// Shape of a capture file for a `(height, width)` camera.
    pub fn capture(height: usize, width: usize) -> Self {
        Self::new(height, width, Self::CAPTURE_CHANNELS)
    }

    pub fn sample_count(&self) -> usize {
        self.height * self.width * self.channels
    }
}

impl fmt::Display for FrameShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.width, self.channels)
    }
}

/// Decoded samples of one capture file in row-major `(h, w, c)` order.
#[derive(Debug, Clone)]
pub struct RawFrame {
    pub shape: FrameShape,
    pub data: Vec<f32>,
}

impl RawFrame {
    pub fn height(&self) -> usize {
        self.shape.height
    }

    pub fn width(&self) -> usize {
        self.shape.width
    }

    pub fn channels(&self) -> usize {
        self.shape.channels
    }

    /// Samples of pixel `(y, x)`.
    pub fn pixel(&self, y: usize, x: usize) -> &[f32] {
        let c = self.shape.channels;
        let start = (y * self.shape.width + x) * c;
        &self.data[start..start + c]
    }

    /// One channel as a `(h, w)` plane.
    pub fn channel(&self, channel: usize) -> Vec<f32> {
        self.data
            .chunks_exact(self.shape.channels)
            .map(|px| px[channel])
            .collect()
    }

    /// Two channels as `(h, w)` vector pairs.
    pub fn channel_pair(&self, a: usize, b: usize) -> Vec<[f32; 2]> {
        self.data
            .chunks_exact(self.shape.channels)
            .map(|px| [px[a], px[b]])
            .collect()
    }
}
