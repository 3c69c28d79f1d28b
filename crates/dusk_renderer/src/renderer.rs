//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Iterative bounce loop with a hard depth cap
//! - Sky gradient as the only light source
//! - Box-filtered jittered multi-sampling
//! - Gamma 2.2 display transform

use crate::{gen_f32, Camera, Color, HitRecord, Hittable, Ray, Scatter};
use dusk_core::RenderSettings;
use dusk_math::Interval;
use rand::RngCore;

/// Smallest accepted hit distance; keeps bounced rays off their own surface.
pub const T_MIN: f32 = 0.001;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            samples_per_pixel: 32,
            max_depth: 20,
        }
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            samples_per_pixel: settings.samples_per_pixel,
            max_depth: settings.max_depth,
        }
    }
}

/// Compute the color seen by a ray that has already bounced `depth` times.
///
/// Each bounce multiplies the path throughput by the material attenuation.
/// A miss returns the throughput times the sky. A hit at `max_depth` or on a
/// material that absorbs returns black.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut ray = *ray;
    let mut depth = depth;
    let mut throughput = Color::ONE;

    loop {
        let mut rec = HitRecord::default();
        if !world.hit(&ray, Interval::new(T_MIN, f32::MAX), &mut rec) {
            return throughput * sky_gradient(&ray);
        }

        if depth >= config.max_depth {
            return Color::ZERO;
        }

        match rec.material.scatter(&ray, &rec, rng) {
            Some(result) => {
                throughput *= result.attenuation;
                ray = result.scattered;
                depth += 1;
            }
            None => return Color::ZERO,
        }
    }
}

/// Vertical white-to-blue sky, independent of x and z.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Map a linear channel value to 8 bits with gamma 2.2.
///
/// Clamps to [0, 1], raises to 1/2.2, scales to 255 and rounds half up.
#[inline]
pub fn to_display(linear: f32) -> u8 {
    (Interval::UNIT.clamp(linear).powf(1.0 / 2.2) * 255.0 + 0.5) as u8
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [to_display(color.x), to_display(color.y), to_display(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// `(i, j)` are plane coordinates: `i` grows to the right, `j` grows upward.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (i as f32 + gen_f32(rng)) / config.width as f32;
        let v = (j as f32 + gen_f32(rng)) / config.height as f32;
        let ray = camera.get_ray(u, v);
        pixel_color += ray_color(&ray, world, 0, config, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Linear color buffer, row-major with row 0 at the top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Number of pixels `width * height` implies.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when `pixels` holds exactly `width * height` colors.
    pub fn is_complete(&self) -> bool {
        self.pixels.len() == self.pixel_count()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at column x, row y.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at column x, row y.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to gamma-corrected RGB bytes in buffer order.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Scanlines are traced from the top of the image plane down, so buffer
/// row 0 holds the top scanline.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.width, config.height);
    let total = image.pixel_count() as f64;

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth
    );

    for (row, j) in (0..config.height).rev().enumerate() {
        log::debug!(
            "Rendering ({} spp) {:5.2}%",
            config.samples_per_pixel,
            100.0 * (row * config.width as usize) as f64 / total
        );
        let row = row as u32;

        for i in 0..config.width {
            let color = render_pixel(camera, world, i, j, config, rng);
            image.set(i, row, color);
        }
    }

    image
}
