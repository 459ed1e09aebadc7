//! Camera record types

/// Lowercases a camera name and replaces spaces with underscores.
///
/// The result is used both as the lookup key and as the file name prefix
/// of the camera's raw captures.
pub fn canonical_name(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

/// Immutable geometry and optics of one camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRecord {
    /// Name as written in the config file
    pub name: String,
    /// Image height in pixels
    pub height: usize,
    /// Image width in pixels
    pub width: usize,
    pub focal_length: f64,
    pub field_of_view: f64,
    pub near_clip_plane: f64,
    /// May be `f64::INFINITY` (reverse-Z renderers)
    pub far_clip_plane: f64,
}

impl CameraRecord {
    /// `(height, width)`
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn key(&self) -> String {
        canonical_name(&self.name)
    }
}
