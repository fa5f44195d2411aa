//! Fitted preview canvas and pixel sampling.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbImage};
use paint_model::Rgb;

use crate::error::{PickError, Result};

/// Largest preview the picker draws.
pub const MAX_CANVAS_WIDTH: u32 = 600;
pub const MAX_CANVAS_HEIGHT: u32 = 400;

/// Fit `width`×`height` inside the preview bounds, keeping aspect ratio.
///
/// Width is constrained first, then height; fractional results truncate.
pub fn fit_dimensions(width: u32, height: u32) -> (u32, u32) {
    let max_width = f64::from(MAX_CANVAS_WIDTH);
    let max_height = f64::from(MAX_CANVAS_HEIGHT);
    let mut w = f64::from(width);
    let mut h = f64::from(height);
    if w > max_width {
        h = h * max_width / w;
        w = max_width;
    }
    if h > max_height {
        w = w * max_height / h;
        h = max_height;
    }
    ((w as u32).max(1), (h as u32).max(1))
}

/// A decoded photo scaled to preview size. Coordinates passed to
/// [`Canvas::pick`] are in canvas pixels.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    pub fn from_image(image: &DynamicImage) -> Self {
        let (width, height) = fit_dimensions(image.width(), image.height());
        let pixels = if (width, height) == (image.width(), image.height()) {
            image.to_rgb8()
        } else {
            image
                .resize_exact(width, height, FilterType::Triangle)
                .to_rgb8()
        };
        tracing::debug!(
            source_width = image.width(),
            source_height = image.height(),
            width,
            height,
            "Prepared canvas"
        );
        Self { pixels }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pick(&self, x: u32, y: u32) -> Result<Rgb> {
        let (width, height) = self.dimensions();
        let pixel = self
            .pixels
            .get_pixel_checked(x, y)
            .ok_or(PickError::OutOfBounds {
                x,
                y,
                width,
                height,
            })?;
        let [r, g, b] = pixel.0;
        Ok(Rgb::new(r, g, b))
    }

    /// Picked color as `#rrggbb`.
    pub fn pick_hex(&self, x: u32, y: u32) -> Result<String> {
        self.pick(x, y).map(Rgb::to_hex)
    }
}

/// Decode an uploaded file into a canvas.
///
/// The format is sniffed from the file contents, falling back to the
/// extension. Files that are not images are rejected with
/// [`PickError::NotAnImage`].
pub fn load_canvas(path: &Path) -> Result<Canvas> {
    let io_error = |source| PickError::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::open(path)
        .map_err(io_error)?
        .with_guessed_format()
        .map_err(io_error)?;
    if reader.format().is_none() {
        tracing::warn!("Rejected non-image upload {}", path.display());
        return Err(PickError::NotAnImage {
            path: path.to_path_buf(),
        });
    }
    let image = reader.decode().map_err(|source| PickError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Loaded image {}", path.display());
    Ok(Canvas::from_image(&image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_keeps_small_images() {
        assert_eq!(fit_dimensions(300, 200), (300, 200));
        assert_eq!(fit_dimensions(600, 400), (600, 400));
    }

    #[test]
    fn fit_constrains_width_then_height() {
        assert_eq!(fit_dimensions(1200, 400), (600, 200));
        assert_eq!(fit_dimensions(1000, 1000), (400, 400));
        assert_eq!(fit_dimensions(300, 800), (150, 400));
        assert_eq!(fit_dimensions(1000, 700), (571, 400));
    }

    #[test]
    fn fit_never_collapses_to_zero() {
        assert_eq!(fit_dimensions(100_000, 1), (600, 1));
    }
}
