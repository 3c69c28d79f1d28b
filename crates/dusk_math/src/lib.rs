// Re-export glam for convenience
pub use glam::*;

// dusk math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Linear RGB color, each channel nominally in [0, 1].
pub type Color = Vec3;
