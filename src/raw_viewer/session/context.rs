use std::path::Path;

use tracing::{info, instrument, warn};

use crate::raw_viewer::camera::{CameraConfigStore, CameraRecord};
use crate::raw_viewer::common::error::Result;
use crate::raw_viewer::common::timing::CycleTimings;
use crate::raw_viewer::compose::{compose, Mosaic, PreviousFrame};
use crate::raw_viewer::decode::{decode_color, decode_depth, decode_motion, Tile};
use crate::raw_viewer::raw::{FileFrameReader, FrameKind, FrameShape, RawFrame, RawFrameReader};
use crate::raw_viewer::session::config::ViewerConfig;
use crate::raw_viewer::session::locator::FrameLocator;

pub struct Session<R: RawFrameReader = FileFrameReader> {
    camera: CameraRecord,
    locator: FrameLocator,
    reader: R,
    config: ViewerConfig,
}

impl Session<FileFrameReader> {
    /// Loads the camera table from `data_dir` and selects `camera_name`.
    #[instrument(skip(data_dir, config), fields(data_dir = %data_dir.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(data_dir: P, camera_name: &str, config: ViewerConfig) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let store = CameraConfigStore::load(data_dir.join(&config.camera_config_file))?;
        let camera = store.get(camera_name)?.clone();
        info!(
            camera = %camera.name,
            height = camera.height,
            width = camera.width,
            "Session opened ({} cameras configured: {})",
            store.len(),
            store.names().join(", ")
        );
        Ok(Self::with_custom(camera, data_dir, FileFrameReader, config))
    }
}

impl<R: RawFrameReader> Session<R> {
    pub fn with_custom(camera: CameraRecord, data_dir: &Path, reader: R, config: ViewerConfig) -> Self {
        let locator = FrameLocator::new(data_dir, &camera.name);
        Self {
            camera,
            locator,
            reader,
            config,
        }
    }

    pub fn camera(&self) -> &CameraRecord {
        &self.camera
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    fn read(&self, kind: FrameKind, index: u64) -> Result<RawFrame> {
        let shape = FrameShape::capture(self.camera.height, self.camera.width);
        self.reader
            .read_frame(&self.locator.path(kind, index), self.config.sample_format, shape)
            .map_err(|e| e.at_frame(index))
    }

    pub fn load_color(&self, index: u64) -> Result<Tile> {
        decode_color(&self.read(FrameKind::Color, index)?)
    }

    /// Color tile of `index - 1`, or `Missing` when there is none to show.
    pub fn load_previous(&self, index: u64) -> PreviousFrame {
        let Some(previous) = index.checked_sub(1) else {
            warn!(index, "No previous frame before index 0, showing current frame instead");
            return PreviousFrame::Missing;
        };
        match self.load_color(previous) {
            Ok(tile) => PreviousFrame::Loaded { tile, index: previous },
            Err(e) => {
                warn!(index, "Could not load previous frame, showing current frame instead: {}", e);
                PreviousFrame::Missing
            }
        }
    }

    /// Depth and motion tiles decoded from the combined capture of `index`.
    pub fn load_depth_motion(&self, index: u64) -> Result<(Tile, Tile)> {
        let raw = self.read(FrameKind::DepthMotion, index)?;
        let (w, h) = (raw.width(), raw.height());
        let (depth, _) = decode_depth(&raw.channel(0), w, h, self.camera.far_clip_plane)?;
        let motion = decode_motion(&raw.channel_pair(1, 2), w, h)?;
        Ok((depth, motion))
    }

    /// One full read-decode-compose cycle for frame `index`.
    ///
    /// Fails when the current color or depth-motion capture cannot be read;
    /// a missing previous frame only degrades the mosaic.
    #[instrument(skip(self), fields(camera = %self.camera.name))]
    pub fn build_mosaic(&self, index: u64) -> Result<Mosaic> {
        let mut timings = CycleTimings::new(index);

        let current = timings.time("color", || self.load_color(index))?;
        let previous = timings.time("previous_color", || self.load_previous(index));
        let (depth, motion) = timings.time("depth_motion", || self.load_depth_motion(index))?;
        let mosaic = timings.time("compose", || {
            compose(&current, &previous, &depth, &motion, index, &self.config.caption_style)
        })?;

        timings.log_summary();
        Ok(mosaic)
    }

    pub fn window_title(&self) -> String {
        format!("{}: Color + Depth | Color + Motion", self.camera.name)
    }
}
