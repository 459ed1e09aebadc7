//! Channel decoding module
//!
//! Stateless transforms from raw capture channels to display tiles.

mod color;
mod depth;
mod motion;
mod stats;
pub mod types;


pub use color::decode_color;
pub use depth::{decode_depth, DepthStats, INFINITE_FAR_CLIP_SUBSTITUTE};
pub use motion::{decode_motion, decode_velocity, encode_velocity, hsv_to_bgr, motion_stats};
pub use stats::AxisStats;
pub use types::Tile;
