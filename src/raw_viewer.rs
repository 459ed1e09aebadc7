//! Raw frame viewer module
//!
//! Decodes fixed-layout 4-channel float captures (color, depth, motion) into
//! display tiles, composes them into a captioned 2x2 mosaic, and drives an
//! interactive frame-by-frame playback session.

pub mod common;
pub mod camera;
pub mod raw;
pub mod decode;
pub mod compose;
pub mod session;
pub mod playback;

pub use common::{
    ViewerError,
    Result,
    CycleTimings,
    Timer,
};

pub use camera::{
    canonical_name,
    CameraRecord,
    CameraConfigStore,
};

pub use raw::{
    FrameKind,
    FrameShape,
    RawFrame,
    RawFrameReader,
    FileFrameReader,
    SampleFormat,
};

pub use decode::{
    Tile,
    AxisStats,
    DepthStats,
    decode_color,
    decode_depth,
    decode_motion,
    decode_velocity,
    encode_velocity,
    motion_stats,
};

pub use compose::{
    Caption,
    CaptionStyle,
    Mosaic,
    PreviousFrame,
    compose,
};

pub use session::{
    FrameLocator,
    Session,
    ViewerConfig,
    ViewerConfigBuilder,
};

pub use playback::{
    Display,
    KeyCommand,
    MinifbDisplay,
    PlaybackController,
    PlaybackState,
    SessionEnd,
    Step,
};
