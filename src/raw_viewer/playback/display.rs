use std::time::Duration;

use crate::raw_viewer::common::error::Result;
use crate::raw_viewer::compose::Mosaic;
use crate::raw_viewer::playback::state::KeyCommand;

/// Output surface and keyboard source of a playback session.
pub trait Display {
    fn show(&mut self, mosaic: &Mosaic) -> Result<()>;

    /// Waits at most `timeout` for a recognized key.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyCommand>>;

    /// Releases the window. Called once when the session ends.
    fn close(&mut self);
}
