//! dusk core - scene description and render settings.
//!
//! This crate provides:
//!
//! - **Scene description**: `SceneDesc`, named materials and spheres
//! - **Render settings**: `RenderSettings`, loaded from JSON or defaulted
//!
//! Both are plain data; turning a `SceneDesc` into something that can be
//! intersected is the renderer's job.
//!
//! # Example
//!
//! ```ignore
//! use dusk_core::settings::load_settings;
//!
//! let settings = load_settings("render.json")?;
//! println!("{}x{} @ {} spp", settings.width, settings.height, settings.samples_per_pixel);
//! ```

pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use scene::{MaterialDesc, MaterialKind, SceneDesc, SceneError, SphereDesc};
pub use settings::{
    load_settings, load_settings_from_str, OutputFormat, RenderSettings, SettingsError,
    SettingsResult, MAX_PIXELS,
};
