use tracing::debug;

use crate::raw_viewer::common::error::{Result, ViewerError};
use crate::raw_viewer::compose::caption::{Caption, CaptionStyle};
use crate::raw_viewer::decode::types::Tile;

/// Outcome of loading the frame before the current one.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviousFrame {
    Loaded { tile: Tile, index: u64 },
    /// Nothing usable at `index - 1`; the current tile stands in
    Missing,
}

/// `[current | previous]` over `[depth | motion]`, captioned.
#[derive(Debug, Clone)]
pub struct Mosaic {
    pub image: Tile,
    /// Current, depth, previous, motion
    pub captions: Vec<Caption>,
}

impl Mosaic {
    pub fn width(&self) -> usize {
        self.image.width
    }

    pub fn height(&self) -> usize {
        self.image.height
    }

    /// `(height, width, channels)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.image.height, self.image.width, Tile::CHANNELS)
    }

    pub fn caption_texts(&self) -> Vec<&str> {
        self.captions.iter().map(|c| c.text.as_str()).collect()
    }

    /// Packs the BGR samples into `0x00RRGGBB` words, clamping to `[0, 1]`.
    pub fn to_framebuffer(&self) -> Vec<u32> {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        self.image
            .data
            .chunks_exact(Tile::CHANNELS)
            .map(|bgr| (to_u8(bgr[2]) << 16) | (to_u8(bgr[1]) << 8) | to_u8(bgr[0]))
            .collect()
    }
}

/// Builds the mosaic for frame `index`. All tiles must share one size.
pub fn compose(
    current: &Tile,
    previous: &PreviousFrame,
    depth: &Tile,
    motion: &Tile,
    index: u64,
    style: &CaptionStyle,
) -> Result<Mosaic> {
    let (previous_tile, previous_index) = match previous {
        PreviousFrame::Loaded { tile, index } => (tile, *index),
        PreviousFrame::Missing => (current, index),
    };

    for (name, tile) in [("previous", previous_tile), ("depth", depth), ("motion", motion)] {
        if !tile.same_size(current) {
            return Err(ViewerError::ShapeMismatch {
                expected: format!("{} tile {}x{}", name, current.height, current.width),
                actual: format!("{}x{}", tile.height, tile.width),
            });
        }
    }

    let (w, h) = (current.width, current.height);
    let mut image = Tile::new(2 * w, 2 * h);
    image.blit(current, 0, 0);
    image.blit(depth, 0, h);
    image.blit(previous_tile, w, 0);
    image.blit(motion, w, h);

    let captions = vec![
        Caption::new(format!("Current: {}", index), (0, 0, w, h)),
        Caption::new(format!("Depth: {}", index), (0, h, w, h)),
        Caption::new(format!("Previous: {}", previous_index), (w, 0, w, h)),
        Caption::new(format!("Motion: {}", index), (w, h, w, h)),
    ];
    for caption in &captions {
        caption.draw(&mut image, style);
    }
    debug!(index, previous_index, width = 2 * w, height = 2 * h, "Composed mosaic");

    Ok(Mosaic { image, captions })
}
