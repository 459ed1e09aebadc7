//! Window display backed by minifb.

use std::time::{Duration, Instant};

use minifb::{Key, KeyRepeat, Window, WindowOptions};
use tracing::debug;

use crate::raw_viewer::common::error::{Result, ViewerError};
use crate::raw_viewer::compose::Mosaic;
use crate::raw_viewer::playback::display::Display;
use crate::raw_viewer::playback::state::KeyCommand;

/// Event pump rate while waiting for keys.
const POLL_RATE: usize = 250;

impl KeyCommand {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Escape | Key::Q => Some(KeyCommand::Quit),
            Key::Space => Some(KeyCommand::TogglePlay),
            Key::P => Some(KeyCommand::Previous),
            Key::N => Some(KeyCommand::Next),
            _ => None,
        }
    }
}

/// First recognized command among the keys pressed since the last event pump.
pub(crate) fn first_command(keys: &[Key]) -> Option<KeyCommand> {
    keys.iter().copied().find_map(KeyCommand::from_key)
}

/// One window per session. It is opened lazily on the first mosaic so its
/// size matches the camera.
pub struct MinifbDisplay {
    title: String,
    window: Option<Window>,
    size: (usize, usize),
}

impl MinifbDisplay {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            window: None,
            size: (0, 0),
        }
    }

    fn window_for(&mut self, width: usize, height: usize) -> Result<&mut Window> {
        if self.window.is_none() || self.size != (width, height) {
            debug!("Opening window {}x{}", width, height);
            let mut window = Window::new(&self.title, width, height, WindowOptions::default())
                .map_err(|e| ViewerError::DisplayError(e.to_string()))?;
            window.set_target_fps(POLL_RATE);
            self.window = Some(window);
            self.size = (width, height);
        }
        self.window
            .as_mut()
            .ok_or_else(|| ViewerError::DisplayError("window not available".to_string()))
    }
}

impl Display for MinifbDisplay {
    fn show(&mut self, mosaic: &Mosaic) -> Result<()> {
        let (width, height) = (mosaic.width(), mosaic.height());
        let buffer = mosaic.to_framebuffer();
        self.window_for(width, height)?
            .update_with_buffer(&buffer, width, height)
            .map_err(|e| ViewerError::DisplayError(e.to_string()))
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyCommand>> {
        let Some(window) = self.window.as_mut() else {
            std::thread::sleep(timeout);
            return Ok(None);
        };

        // keys gathered by the last `update_with_buffer` are read before
        // the next `update` replaces them
        let deadline = Instant::now() + timeout;
        loop {
            if !window.is_open() {
                return Ok(Some(KeyCommand::Quit));
            }
            let pressed = first_command(&window.get_keys_pressed(KeyRepeat::No));
            if pressed.is_some() {
                return Ok(pressed);
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
            window.update();
        }
    }

    fn close(&mut self) {
        if self.window.take().is_some() {
            debug!("Window closed");
        }
    }
}
