use std::f64::consts::TAU;

use tracing::debug;

use crate::raw_viewer::common::error::{Result, ViewerError};
use crate::raw_viewer::decode::stats::AxisStats;
use crate::raw_viewer::decode::types::Tile;

// Velocity buffer fixed-point convention of the capturing renderer.
const VELOCITY_SCALE: f64 = 0.499 * 0.5;
const VELOCITY_BIAS: f64 = 32767.0 / 65535.0;

/// 8-bit hue range: degrees halved.
const HUE_RANGE: f64 = 180.0;
const DISPLAY_MAX: f64 = 255.0;

/// Recovers a signed screen-space velocity component from its texture encoding.
pub fn decode_velocity(encoded: f32) -> f32 {
    let inv_div = 1.0 / VELOCITY_SCALE;
    let v = f64::from(encoded) * inv_div - VELOCITY_BIAS * inv_div;
    (v * v.abs() * 0.5) as f32
}

/// Inverse of [`decode_velocity`].
pub fn encode_velocity(velocity: f32) -> f32 {
    let v = f64::from(velocity);
    let companded = v.signum() * (2.0 * v.abs()).sqrt();
    let companded = if v == 0.0 { 0.0 } else { companded };
    (companded * VELOCITY_SCALE + VELOCITY_BIAS) as f32
}

/// Per-axis `(x, y)` statistics of a decoded velocity field.
pub fn motion_stats(velocities: &[[f32; 2]]) -> [AxisStats; 2] {
    [
        AxisStats::compute(velocities.iter().map(|v| v[0])),
        AxisStats::compute(velocities.iter().map(|v| v[1])),
    ]
}

/// HSV to BGR with hue in degrees and saturation/value in `[0, 1]`.
pub fn hsv_to_bgr(hue_degrees: f64, saturation: f64, value: f64) -> [f32; 3] {
    let h = (hue_degrees / 60.0).rem_euclid(6.0);
    let sector = h.floor();
    let f = h - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    [b as f32, g as f32, r as f32]
}

/// Visualizes an encoded motion field: hue is direction, value is magnitude
/// min-max normalized over this frame, saturation is full.
pub fn decode_motion(encoded: &[[f32; 2]], width: usize, height: usize) -> Result<Tile> {
    if encoded.len() != width * height {
        return Err(ViewerError::ShapeMismatch {
            expected: format!("{} motion vectors ({}x{})", width * height, height, width),
            actual: format!("{} vectors", encoded.len()),
        });
    }

    let velocities: Vec<[f32; 2]> = encoded
        .iter()
        .map(|v| [decode_velocity(v[0]), decode_velocity(v[1])])
        .collect();

    let [sx, sy] = motion_stats(&velocities);
    debug!("Motion x (min, max, mean, std): ({:.5}, {:.5}, {:.5}, {:.5})", sx.min, sx.max, sx.mean, sx.std);
    debug!("Motion y (min, max, mean, std): ({:.5}, {:.5}, {:.5}, {:.5})", sy.min, sy.max, sy.mean, sy.std);

    let polar: Vec<(f64, f64)> = velocities
        .iter()
        .map(|&[x, y]| {
            let (x, y) = (f64::from(x), f64::from(y));
            let angle = y.atan2(x);
            let angle = if angle < 0.0 { angle + TAU } else { angle };
            (x.hypot(y), angle)
        })
        .collect();

    let (mag_min, mag_max) = polar
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(m, _)| (lo.min(m), hi.max(m)));
    let mag_span = mag_max - mag_min;
    let scale = if mag_span > f64::EPSILON { DISPLAY_MAX / mag_span } else { 0.0 };

    let data = polar
        .iter()
        .flat_map(|&(mag, angle)| {
            let hue = angle.to_degrees() / 2.0;
            let value = (mag - mag_min) * scale;
            hsv_to_bgr(hue * 360.0 / HUE_RANGE, 1.0, value / DISPLAY_MAX)
        })
        .collect();

    Tile::from_bgr(width, height, data)
}
