use crate::raw_viewer::common::error::{Result, ViewerError};
use crate::raw_viewer::decode::types::Tile;
use crate::raw_viewer::raw::types::RawFrame;

/// Reorders the leading RGB channels of a color capture into the tile's BGR
/// order. Alpha is dropped and no scaling is applied.
pub fn decode_color(raw: &RawFrame) -> Result<Tile> {
    if raw.channels() < 3 {
        return Err(ViewerError::ShapeMismatch {
            expected: "at least 3 channels".to_string(),
            actual: raw.shape.to_string(),
        });
    }

    let data = raw
        .data
        .chunks_exact(raw.channels())
        .flat_map(|px| [px[2], px[1], px[0]])
        .collect();

    Tile::from_bgr(raw.width(), raw.height(), data)
}
