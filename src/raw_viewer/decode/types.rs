//! Display tile types

use crate::raw_viewer::common::error::{Result, ViewerError};

/// A displayable 3-channel float image.
///
/// Components are stored in BGR order, the byte order of a `0x00RRGGBB`
/// little-endian framebuffer word. Values are display-ready in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub width: usize,
    pub height: usize,
    /// Interleaved `[B, G, R, B, G, R, ...]`
    pub data: Vec<f32>,
}

impl Tile {
    pub const CHANNELS: usize = 3;

    /// Black tile.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height * Self::CHANNELS],
        }
    }

    pub fn from_bgr(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != width * height * Self::CHANNELS {
            return Err(ViewerError::ShapeMismatch {
                expected: format!("{} samples for {}x{}x3", width * height * 3, height, width),
                actual: format!("{} samples", data.len()),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Replicates a single-channel plane into all three components.
    pub fn from_gray(width: usize, height: usize, plane: &[f32]) -> Self {
        let data = plane.iter().flat_map(|&v| [v, v, v]).collect();
        Self { width, height, data }
    }

    pub fn pixel(&self, x: usize, y: usize) -> [f32; 3] {
        let i = (y * self.width + x) * Self::CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, bgr: [f32; 3]) {
        let i = (y * self.width + x) * Self::CHANNELS;
        self.data[i..i + Self::CHANNELS].copy_from_slice(&bgr);
    }

    pub fn same_size(&self, other: &Tile) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Copies `src` into this tile with its top-left corner at `(x0, y0)`.
    pub fn blit(&mut self, src: &Tile, x0: usize, y0: usize) {
        let rows = src.height.min(self.height.saturating_sub(y0));
        let cols = src.width.min(self.width.saturating_sub(x0));
        for y in 0..rows {
            let src_start = y * src.width * Self::CHANNELS;
            let dst_start = ((y0 + y) * self.width + x0) * Self::CHANNELS;
            let n = cols * Self::CHANNELS;
            self.data[dst_start..dst_start + n]
                .copy_from_slice(&src.data[src_start..src_start + n]);
        }
    }

    /// Fills `[x0, x1) x [y0, y1)`, clipped to the tile.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, bgr: [f32; 3]) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.set_pixel(x, y, bgr);
            }
        }
    }

    pub fn min_max(&self) -> (f32, f32) {
        self.data
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}
