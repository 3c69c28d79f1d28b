//! Writing finished renders to disk and handing them to a viewer.
//!
//! The image is only touched here after the render loop has completed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use dusk_core::OutputFormat;
use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while saving or displaying an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },

    #[error("Failed to launch viewer '{program}': {source}")]
    Viewer {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

fn check_size(image: &ImageBuffer) -> OutputResult<()> {
    if image.is_complete() {
        Ok(())
    } else {
        Err(OutputError::BufferSize {
            width: image.width,
            height: image.height,
        })
    }
}

/// File name for a finished render.
///
/// `image-<width>-<height>-<samples>-<elapsed_secs>.<ext>`
pub fn image_filename(
    width: u32,
    height: u32,
    samples: u32,
    elapsed_secs: u64,
    format: OutputFormat,
) -> String {
    format!(
        "image-{}-{}-{}-{}.{}",
        width,
        height,
        samples,
        elapsed_secs,
        format.extension()
    )
}

/// Write a plain-text (P3) pixmap.
///
/// Pixels follow the header in buffer order as `"r g b "` triples.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: W) -> OutputResult<()> {
    check_size(image)?;
    let mut writer = BufWriter::new(writer);

    write!(writer, "P3\n{} {}\n255\n", image.width, image.height)?;
    for rgb in image.to_rgb8().chunks_exact(3) {
        write!(writer, "{} {} {} ", rgb[0], rgb[1], rgb[2])?;
    }
    writer.flush()?;

    Ok(())
}

/// Save as a plain-text pixmap.
pub fn save_ppm(image: &ImageBuffer, path: &Path) -> OutputResult<()> {
    let file = File::create(path)?;
    write_ppm(image, file)
}

/// Save as an 8-bit RGB PNG with the same display transform as the pixmap.
pub fn save_png(image: &ImageBuffer, path: &Path) -> OutputResult<()> {
    check_size(image)?;
    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8()).ok_or(
        OutputError::BufferSize {
            width: image.width,
            height: image.height,
        },
    )?;
    rgb.save(path)?;
    Ok(())
}

/// Save a finished render into `dir` under its conventional file name.
///
/// Returns the path that was written.
pub fn save_image(
    image: &ImageBuffer,
    dir: &Path,
    samples: u32,
    elapsed_secs: u64,
    format: OutputFormat,
) -> OutputResult<PathBuf> {
    let filename = image_filename(image.width, image.height, samples, elapsed_secs, format);
    let path = dir.join(filename);

    match format {
        OutputFormat::Ppm => save_ppm(image, &path)?,
        OutputFormat::Png => save_png(image, &path)?,
    }

    log::info!("Saved {}", path.display());
    Ok(path)
}

/// Run `program <path>` and wait for it to exit.
///
/// A viewer that exits unsuccessfully is only logged; the image is already
/// on disk.
pub fn launch_viewer(program: &str, path: &Path) -> OutputResult<()> {
    log::info!("Opening {} with {}", path.display(), program);

    let status = Command::new(program)
        .arg(path)
        .status()
        .map_err(|source| OutputError::Viewer {
            program: program.to_string(),
            source,
        })?;

    if !status.success() {
        log::warn!("Viewer '{}' exited with {}", program, status);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn tiny_image() -> ImageBuffer {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 0, Color::new(1.0, 0.0, 0.5));
        image.set(1, 0, Color::ONE);
        image.set(0, 1, Color::new(2.0, -1.0, 0.0));
        image
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dusk-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_image_filename() {
        assert_eq!(
            image_filename(256, 256, 32, 17, OutputFormat::Ppm),
            "image-256-256-32-17.ppm"
        );
        assert_eq!(
            image_filename(640, 480, 8, 0, OutputFormat::Png),
            "image-640-480-8-0.png"
        );
    }

    #[test]
    fn test_write_ppm() {
        let mut bytes = Vec::new();
        write_ppm(&tiny_image(), &mut bytes).unwrap();

        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "P3\n2 2\n255\n255 0 186 255 255 255 255 0 0 0 0 0 ");
    }

    #[test]
    fn test_write_ppm_rejects_short_buffer() {
        let mut image = tiny_image();
        image.pixels.pop();
        let mut bytes = Vec::new();

        let err = write_ppm(&image, &mut bytes).unwrap_err();
        assert!(matches!(
            err,
            OutputError::BufferSize {
                width: 2,
                height: 2
            }
        ));
        assert!(bytes.is_empty());

        image.pixels.extend([Color::ZERO, Color::ZERO]);
        assert!(write_ppm(&image, &mut Vec::<u8>::new()).is_err());
    }

    #[test]
    fn test_save_image_ppm() {
        let dir = scratch_dir("ppm");
        let path = save_image(&tiny_image(), &dir, 4, 3, OutputFormat::Ppm).unwrap();

        assert_eq!(path.file_name().unwrap(), "image-2-2-4-3.ppm");
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("P3\n2 2\n255\n"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_image_png() {
        let dir = scratch_dir("png");
        let path = save_image(&tiny_image(), &dir, 4, 3, OutputFormat::Png).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 186]);
        assert_eq!(decoded.get_pixel(0, 1).0, [255, 0, 0]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = Path::new("/nonexistent/dusk/output");
        let err = save_image(&tiny_image(), dir, 1, 0, OutputFormat::Ppm).unwrap_err();
        assert!(matches!(err, OutputError::Io(_)));
    }

    #[test]
    fn test_missing_viewer() {
        let err = launch_viewer("dusk-no-such-viewer", Path::new("image.ppm")).unwrap_err();
        assert!(matches!(err, OutputError::Viewer { .. }));
    }
}
