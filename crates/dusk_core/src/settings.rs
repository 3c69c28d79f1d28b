//! Render settings.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! reproduces the stock 256x256, 32 spp render of the default scene.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scene::{SceneDesc, SceneError};

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid setting '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Largest image, in pixels, a render may allocate.
pub const MAX_PIXELS: u64 = 1 << 28;

/// Image file format written after the render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text portable pixmap (P3)
    #[default]
    Ppm,
    /// 8-bit RGB PNG
    Png,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Ppm => "ppm",
            OutputFormat::Png => "png",
        }
    }
}

/// Everything needed to run one render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel
    pub samples_per_pixel: u32,
    /// Bounce cap; paths still scattering at this depth contribute black
    pub max_depth: u32,
    /// RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub format: OutputFormat,
    /// Directory the image file is written into
    pub output_dir: PathBuf,
    /// Program launched with the image path once it is saved
    pub viewer: Option<String>,
    pub scene: SceneDesc,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            samples_per_pixel: 32,
            max_depth: 20,
            seed: None,
            format: OutputFormat::Ppm,
            output_dir: PathBuf::from("."),
            viewer: None,
            scene: SceneDesc::default(),
        }
    }
}

impl RenderSettings {
    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.width == 0 {
            return Err(SettingsError::Invalid {
                field: "width",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.height == 0 {
            return Err(SettingsError::Invalid {
                field: "height",
                reason: "must be at least 1".to_string(),
            });
        }
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels > MAX_PIXELS {
            return Err(SettingsError::Invalid {
                field: "width",
                reason: format!(
                    "{}x{} is {} pixels, more than the limit of {}",
                    self.width, self.height, pixels, MAX_PIXELS
                ),
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(SettingsError::Invalid {
                field: "samples_per_pixel",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(viewer) = &self.viewer {
            if viewer.trim().is_empty() {
                return Err(SettingsError::Invalid {
                    field: "viewer",
                    reason: "must name a program".to_string(),
                });
            }
        }
        self.scene.validate()?;
        Ok(())
    }
}

/// Parse and validate settings from a JSON string.
pub fn load_settings_from_str(json: &str) -> SettingsResult<RenderSettings> {
    let settings: RenderSettings = serde_json::from_str(json)?;
    settings.validate()?;
    Ok(settings)
}

/// Load and validate settings from a JSON file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> SettingsResult<RenderSettings> {
    let path = path.as_ref();
    log::debug!("Loading render settings from {}", path.display());
    let contents = fs::read_to_string(path)?;
    load_settings_from_str(&contents)
}
