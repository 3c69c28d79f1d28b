//! `dusk` - render a sphere scene to an image file.
//!
//! Usage: dusk [settings.json]
//!
//! Without a settings file the stock 256x256, 32 spp render of the default
//! scene is produced. Set `RUST_LOG=debug` for per-scanline progress.

use std::env;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use dusk_core::{load_settings, RenderSettings};
use dusk_renderer::{
    build_world, launch_viewer, render, save_image, seeded_rng, Camera, RenderConfig,
};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let settings = match args.as_slice() {
        [] => RenderSettings::default(),
        [path] => load_settings(path)
            .with_context(|| format!("Failed to load settings from {}", path))?,
        _ => bail!("Usage: dusk [settings.json]"),
    };

    let world = build_world(&settings.scene).context("Failed to build scene")?;
    let config = RenderConfig::from(&settings);
    let camera = Camera::new();
    let mut rng = seeded_rng(settings.seed);

    let start = Instant::now();
    let image = render(&camera, &world, &config, &mut rng);
    let elapsed = start.elapsed();
    log::info!("Render done in {:.3}s", elapsed.as_secs_f64());

    let path = save_image(
        &image,
        &settings.output_dir,
        config.samples_per_pixel,
        elapsed.as_secs(),
        settings.format,
    )
    .context("Failed to save image")?;

    if let Some(viewer) = &settings.viewer {
        if let Err(e) = launch_viewer(viewer, &path) {
            log::warn!("{}", e);
        }
    }

    Ok(())
}
