use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::raw_viewer::camera::types::{canonical_name, CameraRecord};
use crate::raw_viewer::common::error::{Result, ViewerError};

/// Columns of the camera table, in file order.
const COLUMNS: [&str; 7] = [
    "name",
    "width",
    "height",
    "focalLength",
    "fov",
    "nearClipPlane",
    "farClipPlane",
];

/// Read-only set of camera records keyed by canonical name.
#[derive(Debug, Clone, Default)]
pub struct CameraConfigStore {
    cameras: HashMap<String, CameraRecord>,
}

impl CameraConfigStore {
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ViewerError::ConfigError(format!("{}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Parses the comma separated camera table: one header row followed by
    /// `name,width,height,focalLength,fov,nearClipPlane,farClipPlane` rows.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines
            .next()
            .ok_or_else(|| ViewerError::ConfigError("empty camera table".to_string()))?;
        let header_cols = header.split(',').count();
        if header_cols != COLUMNS.len() {
            return Err(ViewerError::ConfigError(format!(
                "header has {} columns, expected {} ({})",
                header_cols,
                COLUMNS.len(),
                COLUMNS.join(",")
            )));
        }
        debug!("Camera table header: {}", header.trim());

        let mut cameras = HashMap::new();
        for (line_no, line) in lines {
            let record = parse_row(line_no + 1, line)?;
            info!(
                camera = %record.name,
                width = record.width,
                height = record.height,
                far_clip = record.far_clip_plane,
                "Loaded camera config"
            );
            if let Some(old) = cameras.insert(record.key(), record) {
                warn!("Duplicate camera entry {}, keeping the last one", old.name);
            }
        }

        let store = Self { cameras };
        if store.is_empty() {
            return Err(ViewerError::ConfigError("camera table has no camera rows".to_string()));
        }
        Ok(store)
    }

    pub fn get(&self, name: &str) -> Result<&CameraRecord> {
        self.cameras.get(&canonical_name(name)).ok_or_else(|| {
            ViewerError::UnknownCamera(format!("{} (known: {})", name, self.names().join(", ")))
        })
    }

    /// Configured camera names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cameras.values().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}

fn parse_row(line_no: usize, line: &str) -> Result<CameraRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != COLUMNS.len() {
        return Err(ViewerError::ConfigError(format!(
            "line {}: expected {} columns, got {}",
            line_no,
            COLUMNS.len(),
            fields.len()
        )));
    }

    let width: usize = parse_field(line_no, COLUMNS[1], fields[1])?;
    let height: usize = parse_field(line_no, COLUMNS[2], fields[2])?;
    if width == 0 || height == 0 {
        return Err(ViewerError::InvalidDimensions(width, height));
    }

    Ok(CameraRecord {
        name: fields[0].to_string(),
        height,
        width,
        focal_length: parse_field(line_no, COLUMNS[3], fields[3])?,
        field_of_view: parse_field(line_no, COLUMNS[4], fields[4])?,
        near_clip_plane: parse_field(line_no, COLUMNS[5], fields[5])?,
        far_clip_plane: parse_field(line_no, COLUMNS[6], fields[6])?,
    })
}

fn parse_field<T>(line_no: usize, column: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| {
        ViewerError::ConfigError(format!(
            "line {}: bad {} value {:?}: {}",
            line_no, column, value, e
        ))
    })
}
