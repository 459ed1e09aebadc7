use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;

use crate::raw_viewer::camera::CameraRecord;
use crate::raw_viewer::common::error::{Result, ViewerError};
use crate::raw_viewer::compose::Mosaic;
use crate::raw_viewer::playback::{Display, KeyCommand, PlaybackController, PlaybackState, SessionEnd, Step};
use crate::raw_viewer::raw::FileFrameReader;
use crate::raw_viewer::session::tests::write_capture;
use crate::raw_viewer::session::{Session, ViewerConfig};

struct MockDisplay {
    script: VecDeque<Option<KeyCommand>>,
    shown: Vec<String>,
    should_fail: bool,
    closed: bool,
    timeouts: Vec<Duration>,
}

impl MockDisplay {
    fn new(script: Vec<Option<KeyCommand>>) -> Self {
        Self {
            script: script.into(),
            shown: Vec::new(),
            should_fail: false,
            closed: false,
            timeouts: Vec::new(),
        }
    }
}

impl Display for MockDisplay {
    fn show(&mut self, mosaic: &Mosaic) -> Result<()> {
        if self.should_fail {
            return Err(ViewerError::DisplayError("Mock display error".to_string()));
        }
        self.shown.push(mosaic.caption_texts()[0].to_string());
        Ok(())
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyCommand>> {
        self.timeouts.push(timeout);
        // an exhausted script behaves like the quit key
        Ok(self.script.pop_front().unwrap_or(Some(KeyCommand::Quit)))
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

fn session_with_frames(dir: &Path, frames: &[u64], config: ViewerConfig) -> Session {
    for &index in frames {
        write_capture(dir, 6, 8, index);
    }
    let camera = CameraRecord {
        name: "Front Cam".to_string(),
        height: 6,
        width: 8,
        focal_length: 35.0,
        field_of_view: 90.0,
        near_clip_plane: 0.1,
        far_clip_plane: 1000.0,
    };
    Session::with_custom(camera, dir, FileFrameReader, config)
}

#[test]
fn test_previous_clamps_at_zero() {
    let mut state = PlaybackState::new("cam", 0, 30);
    for _ in 0..10 {
        assert_eq!(state.apply(Some(KeyCommand::Previous)), Step::Render);
        assert_eq!(state.index, 0);
    }
}

#[test]
fn test_space_toggles_without_moving() {
    let mut state = PlaybackState::new("cam", 4, 30);
    assert_eq!(state.apply(Some(KeyCommand::TogglePlay)), Step::Render);
    assert!(state.playing);
    assert_eq!(state.index, 4);
    assert_eq!(state.apply(Some(KeyCommand::TogglePlay)), Step::Render);
    assert!(!state.playing);
    assert_eq!(state.index, 4);
}

#[test]
fn test_no_key_idles_when_paused_and_advances_when_playing() {
    let mut state = PlaybackState::new("cam", 2, 30);
    assert_eq!(state.apply(None), Step::Idle);
    assert_eq!(state.index, 2);

    state.playing = true;
    assert_eq!(state.apply(None), Step::Render);
    assert_eq!(state.index, 3);
}

#[test]
fn test_step_keys_work_while_playing() {
    let mut state = PlaybackState::new("cam", 5, 30);
    state.playing = true;
    state.apply(Some(KeyCommand::Previous));
    assert_eq!(state.index, 4);
    state.apply(Some(KeyCommand::Next));
    state.apply(Some(KeyCommand::Next));
    assert_eq!(state.index, 6);
    assert!(state.playing);
    assert_eq!(state.apply(Some(KeyCommand::Quit)), Step::Quit);
}

#[test]
fn test_controller_follows_key_script() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_with_frames(dir.path(), &[0, 1, 2, 3], ViewerConfig::default());
    let mut controller = PlaybackController::new(session);
    let mut display = MockDisplay::new(vec![
        None,
        Some(KeyCommand::Next),
        Some(KeyCommand::Next),
        Some(KeyCommand::TogglePlay),
        None,
        Some(KeyCommand::Previous),
        Some(KeyCommand::Quit),
    ]);

    let end = controller.run(&mut display).unwrap();

    assert_eq!(
        display.shown,
        vec!["Current: 0", "Current: 1", "Current: 2", "Current: 2", "Current: 3", "Current: 2"]
    );
    assert_eq!(end, SessionEnd { final_index: 2, frames_rendered: 6 });
    assert!(display.closed);
    assert!(controller.state().playing);
}

#[test]
fn test_controller_polls_at_frame_interval() {
    let dir = tempfile::tempdir().unwrap();
    let config = ViewerConfig::builder().fps(20).build();
    let session = session_with_frames(dir.path(), &[0], config);
    let mut display = MockDisplay::new(vec![None, None]);

    PlaybackController::new(session).run(&mut display).unwrap();
    assert_eq!(display.timeouts, vec![Duration::from_millis(50); 3]);
}

#[test]
fn test_controller_previous_at_start() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_with_frames(dir.path(), &[0], ViewerConfig::default());
    let mut display = MockDisplay::new(vec![Some(KeyCommand::Previous); 10]);

    let end = PlaybackController::new(session).run(&mut display).unwrap();
    assert_eq!(end.final_index, 0);
    assert_eq!(end.frames_rendered, 11);
    assert!(display.shown.iter().all(|c| c == "Current: 0"));
}

#[test]
fn test_controller_stops_on_missing_current_frame() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_with_frames(dir.path(), &[0], ViewerConfig::default());
    let mut controller = PlaybackController::new(session);
    let mut display = MockDisplay::new(vec![Some(KeyCommand::Next)]);

    let err = controller.run(&mut display).unwrap_err();
    assert_eq!(err.frame_index(), Some(1));
    assert_eq!(display.shown, vec!["Current: 0"]);
    assert!(display.closed);
}

#[test]
fn test_controller_starts_at_configured_index() {
    let dir = tempfile::tempdir().unwrap();
    let config = ViewerConfig::builder().start_index(3).build();
    let session = session_with_frames(dir.path(), &[2, 3], config);
    let mut display = MockDisplay::new(vec![]);

    let end = PlaybackController::new(session).run(&mut display).unwrap();
    assert_eq!(end, SessionEnd { final_index: 3, frames_rendered: 1 });
}

#[test]
fn test_controller_surfaces_display_errors() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_with_frames(dir.path(), &[0], ViewerConfig::default());
    let mut display = MockDisplay::new(vec![]);
    display.should_fail = true;

    let err = PlaybackController::new(session).run(&mut display).unwrap_err();
    assert!(matches!(err, ViewerError::DisplayError(_)));
    assert!(display.closed);
}

#[test]
fn test_key_mapping() {
    use minifb::Key;
    assert_eq!(KeyCommand::from_key(Key::Escape), Some(KeyCommand::Quit));
    assert_eq!(KeyCommand::from_key(Key::Q), Some(KeyCommand::Quit));
    assert_eq!(KeyCommand::from_key(Key::Space), Some(KeyCommand::TogglePlay));
    assert_eq!(KeyCommand::from_key(Key::P), Some(KeyCommand::Previous));
    assert_eq!(KeyCommand::from_key(Key::N), Some(KeyCommand::Next));
    assert_eq!(KeyCommand::from_key(Key::A), None);
}

#[test]
fn test_first_recognized_key_wins() {
    use crate::raw_viewer::playback::minifb_display::first_command;
    use minifb::Key;
    assert_eq!(first_command(&[Key::A, Key::N, Key::Q]), Some(KeyCommand::Next));
    assert_eq!(first_command(&[Key::LeftShift, Key::Escape]), Some(KeyCommand::Quit));
    assert_eq!(first_command(&[Key::A, Key::B]), None);
    assert_eq!(first_command(&[]), None);
}
