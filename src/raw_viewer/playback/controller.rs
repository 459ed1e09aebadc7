use tracing::{error, info, instrument};

use crate::raw_viewer::common::error::Result;
use crate::raw_viewer::playback::display::Display;
use crate::raw_viewer::playback::state::{PlaybackState, Step};
use crate::raw_viewer::raw::{FileFrameReader, RawFrameReader};
use crate::raw_viewer::session::Session;

/// Terminal value of a playback session that ended by request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEnd {
    pub final_index: u64,
    pub frames_rendered: u64,
}

pub struct PlaybackController<R: RawFrameReader = FileFrameReader> {
    session: Session<R>,
    state: PlaybackState,
}

impl<R: RawFrameReader> PlaybackController<R> {
    pub fn new(session: Session<R>) -> Self {
        let config = session.config();
        let state = PlaybackState::new(session.camera().name.clone(), config.start_index, config.fps);
        Self { session, state }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Renders, polls, and transitions until a quit key or a fatal frame error.
    ///
    /// A current or depth-motion frame that cannot be read ends the session
    /// with that error; the display is closed either way.
    #[instrument(skip(self, display), fields(camera = %self.state.camera_name))]
    pub fn run<D: Display>(&mut self, display: &mut D) -> Result<SessionEnd> {
        let interval = self.session.config().frame_interval();
        let mut frames_rendered = 0u64;
        info!(index = self.state.index, fps = self.state.fps, "Starting playback");

        loop {
            let shown = self
                .session
                .build_mosaic(self.state.index)
                .and_then(|mosaic| display.show(&mosaic));
            if let Err(e) = shown {
                error!(index = self.state.index, "Cannot show frame {}: {}", self.state.index, e);
                display.close();
                return Err(e);
            }
            frames_rendered += 1;

            loop {
                let key = match display.poll_key(interval) {
                    Ok(key) => key,
                    Err(e) => {
                        display.close();
                        return Err(e);
                    }
                };
                match self.state.apply(key) {
                    Step::Render => break,
                    Step::Idle => continue,
                    Step::Quit => {
                        display.close();
                        info!(index = self.state.index, frames_rendered, "Playback stopped");
                        return Ok(SessionEnd {
                            final_index: self.state.index,
                            frames_rendered,
                        });
                    }
                }
            }
        }
    }
}
