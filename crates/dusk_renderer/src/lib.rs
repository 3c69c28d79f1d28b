//! dusk renderer - CPU diffuse path tracing.
//!
//! A Monte Carlo path tracer for spheres with Lambertian materials lit by
//! a sky gradient. Single-threaded; the random number generator is passed
//! explicitly so renders are reproducible from a seed.

mod camera;
mod hittable;
mod material;
mod output;
mod random;
mod renderer;
mod sphere;
mod world;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, Surface, SurfaceList};
pub use material::{Lambertian, Material, Scatter, ScatterResult};
pub use output::{
    image_filename, launch_viewer, save_image, save_png, save_ppm, write_ppm, OutputError,
    OutputResult,
};
pub use random::{gen_f32, random_in_unit_sphere, seeded_rng};
pub use renderer::{
    color_to_rgb, ray_color, render, render_pixel, sky_gradient, to_display, ImageBuffer,
    RenderConfig, T_MIN,
};
pub use sphere::Sphere;
pub use world::build_world;

/// Re-export math types from dusk_math
pub use dusk_math::{Color, Interval, Ray, Vec3};
