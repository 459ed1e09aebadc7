//! Playback state types

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Esc or `q`
    Quit,
    /// Space
    TogglePlay,
    /// `p`
    Previous,
    /// `n`
    Next,
}

/// What the controller does after one input poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Build and show the mosaic for the (possibly unchanged) index
    Render,
    /// Nothing changed; poll again
    Idle,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub camera_name: String,
    pub index: u64,
    pub playing: bool,
    pub fps: u32,
}

impl PlaybackState {
    pub fn new(camera_name: impl Into<String>, index: u64, fps: u32) -> Self {
        Self {
            camera_name: camera_name.into(),
            index,
            playing: false,
            fps,
        }
    }

    /// Applies one poll result. `None` means the poll timed out without a key.
    pub fn apply(&mut self, key: Option<KeyCommand>) -> Step {
        match key {
            Some(KeyCommand::Quit) => Step::Quit,
            Some(KeyCommand::TogglePlay) => {
                self.playing = !self.playing;
                Step::Render
            }
            Some(KeyCommand::Previous) => {
                self.index = self.index.saturating_sub(1);
                Step::Render
            }
            Some(KeyCommand::Next) => {
                self.index = self.index.saturating_add(1);
                Step::Render
            }
            None if self.playing => {
                self.index = self.index.saturating_add(1);
                Step::Render
            }
            None => Step::Idle,
        }
    }
}
