//! Viewer configuration.

use crate::{Error, InputMode};

/// Number of frames in a turntable ring (one every 10 degrees).
pub const DEFAULT_FRAME_COUNT: usize = 36;

/// Canvas backing size is the viewport size divided by this.
pub const DEFAULT_VIEWPORT_DIVISOR: f64 = 1.2;

/// Frames are drawn at half their natural size.
pub const DEFAULT_IMAGE_SCALE: f64 = 0.5;

/// Idle-callback deadline for a coalesced redraw: one frame at 60Hz, rounded up.
pub const DEFAULT_REDRAW_TIMEOUT_MS: u32 = 17;

/// Largest accepted ring. Every frame is a decoded image held for the viewer's lifetime.
pub const MAX_FRAME_COUNT: usize = 4096;

pub const DEFAULT_CANVAS_ID: &str = "canvas";
pub const DEFAULT_BASE_PATH: &str = "/assets";
pub const DEFAULT_EXTENSION: &str = "jpg";

/// User-agent substrings that select touch input. Matching is an ordered substring scan.
pub const DEFAULT_MOBILE_AGENTS: &[&str] = &[
    "iPhone",
    "iPad",
    "Android",
    "Windows Phone",
    "BB10; Touch",
    "PlayBook",
    "Nokia",
];

/// Immutable viewer settings.
///
/// Build one with [`ViewerConfig::default`] and struct update syntax, or (with the `json`
/// feature) from a JSON document where every field is optional.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default, rename_all = "camelCase"))]
pub struct ViewerConfig {
    pub frame_count: usize,
    pub base_path: String,
    pub extension: String,
    pub canvas_id: String,
    pub viewport_divisor: f64,
    pub image_scale: f64,
    pub redraw_timeout_ms: u32,
    pub mobile_agents: Vec<String>,
    /// Explicit input wiring. When set, the user agent is never inspected.
    pub input_mode: Option<InputMode>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            base_path: DEFAULT_BASE_PATH.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            viewport_divisor: DEFAULT_VIEWPORT_DIVISOR,
            image_scale: DEFAULT_IMAGE_SCALE,
            redraw_timeout_ms: DEFAULT_REDRAW_TIMEOUT_MS,
            mobile_agents: DEFAULT_MOBILE_AGENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            input_mode: None,
        }
    }
}

impl ViewerConfig {
    #[cfg(feature = "json")]
    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        let config = serde_json::from_str::<Self>(text).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.frame_count > MAX_FRAME_COUNT {
            return Err(invalid(format!(
                "frame count must be at most {MAX_FRAME_COUNT}, got {}",
                self.frame_count
            )));
        }
        if !(self.viewport_divisor.is_finite() && self.viewport_divisor > 0.0) {
            return Err(invalid(format!(
                "viewport divisor must be a positive number, got {}",
                self.viewport_divisor
            )));
        }
        if !(self.image_scale.is_finite() && self.image_scale > 0.0) {
            return Err(invalid(format!(
                "image scale must be a positive number, got {}",
                self.image_scale
            )));
        }
        if self.base_path.trim().is_empty() {
            return Err(invalid("base path is empty".to_string()));
        }
        if self.extension.trim().is_empty() {
            return Err(invalid("texture extension is empty".to_string()));
        }
        if self.canvas_id.is_empty() {
            return Err(invalid("canvas id is empty".to_string()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig { message }
}
