use font8x8::legacy::BASIC_LEGACY;

use crate::raw_viewer::decode::types::Tile;

const GLYPH_SIZE: usize = 8;

/// Appearance of tile captions. Colors are BGR.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStyle {
    /// Integer magnification of the 8x8 bitmap font
    pub scale: usize,
    pub padding: usize,
    pub foreground: [f32; 3],
    pub background: [f32; 3],
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            scale: 2,
            padding: 5,
            foreground: [1.0, 0.0, 0.0],
            background: [0.0, 0.0, 0.0],
        }
    }
}

impl CaptionStyle {
    pub fn text_size(&self, text: &str) -> (usize, usize) {
        let glyph = GLYPH_SIZE * self.scale.max(1);
        (text.chars().count() * glyph, glyph)
    }
}

/// A label anchored at the lower-left corner of one mosaic tile, with its
/// baseline on the tile's bottom edge rather than at the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    /// Tile rectangle `(x, y, width, height)` the caption belongs to
    pub tile: (usize, usize, usize, usize),
}

impl Caption {
    pub fn new(text: impl Into<String>, tile: (usize, usize, usize, usize)) -> Self {
        Self {
            text: text.into(),
            tile,
        }
    }

    /// Background box `[x0, x1) x [y0, y1)`, clipped to the tile.
    pub fn bounds(&self, style: &CaptionStyle) -> (usize, usize, usize, usize) {
        let (tx, ty, tw, th) = self.tile;
        let (w, h) = style.text_size(&self.text);
        let box_w = (w + 2 * style.padding).min(tw);
        let box_h = (h + 2 * style.padding).min(th);
        (tx, ty + th - box_h, tx + box_w, ty + th)
    }

    pub fn draw(&self, canvas: &mut Tile, style: &CaptionStyle) {
        let (x0, y0, x1, y1) = self.bounds(style);
        canvas.fill_rect(x0, y0, x1, y1, style.background);

        let scale = style.scale.max(1);
        let glyph_px = GLYPH_SIZE * scale;
        let text_x = x0 + style.padding;
        let text_y = y1.saturating_sub(style.padding + glyph_px).max(y0);

        for (col, ch) in self.text.chars().enumerate() {
            let glyph = glyph_for_char(ch);
            let gx = text_x + col * glyph_px;
            for (row, bits) in glyph.iter().enumerate() {
                for bit in 0..GLYPH_SIZE {
                    if (bits >> bit) & 0x01 == 0 {
                        continue;
                    }
                    let px = gx + bit * scale;
                    let py = text_y + row * scale;
                    // stay inside the caption box
                    canvas.fill_rect(px, py, (px + scale).min(x1), (py + scale).min(y1), style.foreground);
                }
            }
        }
    }
}

fn glyph_for_char(ch: char) -> [u8; 8] {
    let index = ch as usize;
    if index < BASIC_LEGACY.len() {
        BASIC_LEGACY[index]
    } else {
        BASIC_LEGACY[b'?' as usize]
    }
}
