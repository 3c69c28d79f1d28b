//! End-to-end renders of small scenes through the public API.

use dusk_core::{load_settings_from_str, MaterialDesc, SceneDesc, SphereDesc};
use dusk_renderer::{
    build_world, render, seeded_rng, sky_gradient, write_ppm, Camera, Color, RenderConfig, Vec3,
};

fn small_config() -> RenderConfig {
    RenderConfig {
        width: 8,
        height: 8,
        samples_per_pixel: 4,
        max_depth: 20,
    }
}

#[test]
fn test_same_seed_same_image() {
    let world = build_world(&SceneDesc::default()).unwrap();
    let camera = Camera::new();
    let config = small_config();

    let a = render(&camera, &world, &config, &mut seeded_rng(Some(99)));
    let b = render(&camera, &world, &config, &mut seeded_rng(Some(99)));
    let c = render(&camera, &world, &config, &mut seeded_rng(Some(100)));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_ppm_from_default_scene() {
    let world = build_world(&SceneDesc::default()).unwrap();
    let image = render(
        &Camera::new(),
        &world,
        &small_config(),
        &mut seeded_rng(Some(1)),
    );

    let mut bytes = Vec::new();
    write_ppm(&image, &mut bytes).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    let body = text.strip_prefix("P3\n8 8\n255\n").expect("pixmap header");
    let values: Vec<u32> = body
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    assert_eq!(values.len(), 8 * 8 * 3);
    assert!(values.iter().all(|&v| v <= 255));
}

#[test]
fn test_settings_drive_render() {
    let json = r#"{
        "width": 6,
        "height": 4,
        "samples_per_pixel": 2,
        "seed": 5,
        "scene": {
            "materials": [{"name": "void", "type": "absorbing"}],
            "spheres": [{"center": [0.0, 0.0, -1.0], "radius": 0.5, "material": "void"}]
        }
    }"#;
    let settings = load_settings_from_str(json).unwrap();
    let world = build_world(&settings.scene).unwrap();
    let config = RenderConfig::from(&settings);

    let image = render(
        &Camera::new(),
        &world,
        &config,
        &mut seeded_rng(settings.seed),
    );

    assert_eq!((image.width, image.height), (6, 4));
    assert_eq!(image.pixels.len(), 24);
}

#[test]
fn test_ground_lit_by_sky_only() {
    // A huge diffuse floor under an open sky: every pixel looking down is
    // dimmer than the sky straight above it, but never black.
    let desc = SceneDesc {
        materials: vec![MaterialDesc::lambertian("floor", Color::splat(0.5))],
        spheres: vec![SphereDesc::new(Vec3::new(0.0, -1000.5, -1.0), 1000.0, "floor")],
    };
    let world = build_world(&desc).unwrap();
    let image = render(
        &Camera::new(),
        &world,
        &small_config(),
        &mut seeded_rng(Some(3)),
    );

    let brightest_sky = sky_gradient(&dusk_renderer::Ray::new(Vec3::ZERO, Vec3::NEG_Y));
    for y in 6..8 {
        for x in 0..8 {
            let color = image.get(x, y);
            assert!(color.min_element() > 0.0);
            assert!(color.max_element() <= brightest_sky.max_element() * 0.5 + 1e-6);
        }
    }
}
