//! Interactive playback module
//!
//! Keyboard-driven state machine that walks a camera's frames and hands each
//! composed mosaic to a display.

mod controller;
mod display;
mod minifb_display;
pub mod state;

#[cfg(test)]
mod tests;

pub use controller::{PlaybackController, SessionEnd};
pub use display::Display;
pub use minifb_display::MinifbDisplay;
pub use state::{KeyCommand, PlaybackState, Step};
