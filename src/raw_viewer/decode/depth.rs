use tracing::debug;

use crate::raw_viewer::common::error::{Result, ViewerError};
use crate::raw_viewer::decode::stats::AxisStats;
use crate::raw_viewer::decode::types::Tile;

/// Clip distance used in place of an infinite far plane.
pub const INFINITE_FAR_CLIP_SUBSTITUTE: f64 = 100.0;

/// Statistics driving the depth normalization decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStats {
    /// Extremes of the input before invalid samples are zeroed
    pub natural_min: f64,
    pub natural_max: f64,
    /// Statistics of the zeroed field
    pub clipped: AxisStats,
    /// `[mean - 2σ, mean + 2σ]` tightened to the zeroed field's extremes
    pub range_min: f64,
    pub range_max: f64,
}

impl DepthStats {
    pub fn compute(natural: AxisStats, clipped: &[f32]) -> Self {
        let clipped = AxisStats::compute(clipped.iter().copied());
        let range_min = clipped.min.max(clipped.mean - 2.0 * clipped.std);
        let range_max = clipped.max.min(clipped.mean + 2.0 * clipped.std);
        Self {
            natural_min: natural.min,
            natural_max: natural.max,
            clipped,
            range_min,
            range_max,
        }
    }

    /// `(offset, span)` of the linear stretch, or `None` when the input looks
    /// already normalized or the range is degenerate.
    pub fn rescale(&self) -> Option<(f64, f64)> {
        let span = self.range_max - self.range_min;
        let needs_stretch = self.natural_min < 0.0 && self.natural_max > 1.0;
        if needs_stretch && span.is_finite() && span > 0.0 {
            Some((self.range_min, span))
        } else {
            None
        }
    }
}

/// Converts a depth plane into a grayscale tile.
///
/// Negative, NaN and beyond-far-plane samples are zeroed. Inputs whose raw
/// extremes straddle `[0, 1]` are stretched into `[0, 1]` using the outlier
/// clipped range; anything else is assumed normalized upstream and kept.
/// The statistics behind that decision are returned alongside the tile.
pub fn decode_depth(
    depth: &[f32],
    width: usize,
    height: usize,
    far_clip_plane: f64,
) -> Result<(Tile, DepthStats)> {
    if depth.len() != width * height {
        return Err(ViewerError::ShapeMismatch {
            expected: format!("{} depth samples ({}x{})", width * height, height, width),
            actual: format!("{} samples", depth.len()),
        });
    }

    let far = if far_clip_plane == f64::INFINITY {
        INFINITE_FAR_CLIP_SUBSTITUTE
    } else {
        far_clip_plane
    };

    let natural = AxisStats::compute(depth.iter().copied());
    let mut plane: Vec<f32> = depth
        .iter()
        .map(|&d| {
            if d.is_nan() || d < 0.0 || f64::from(d) >= far {
                0.0
            } else {
                d
            }
        })
        .collect();

    let stats = DepthStats::compute(natural, &plane);
    debug!(
        "Depth (min, max, mean, std): ({:.4}, {:.4}, {:.4}, {:.4}) natural=({:.4}, {:.4}) far={}",
        stats.clipped.min,
        stats.clipped.max,
        stats.clipped.mean,
        stats.clipped.std,
        stats.natural_min,
        stats.natural_max,
        far
    );

    match stats.rescale() {
        Some((offset, span)) => {
            debug!("Stretching depth over [{:.4}, {:.4}]", stats.range_min, stats.range_max);
            for v in &mut plane {
                *v = ((f64::from(*v) - offset) / span).clamp(0.0, 1.0) as f32;
            }
        }
        None => debug!("Depth left unscaled"),
    }

    Ok((Tile::from_gray(width, height, &plane), stats))
}
