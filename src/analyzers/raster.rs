//! Pixel statistics shared by the raster analyzers.

use crate::error::{CertError, ErrorContext, InputErrorKind};
use image::{DynamicImage, GrayImage};
use std::path::Path;

/// Summary statistics of one rasterized page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterStats {
    pub width: u32,
    pub height: u32,
    /// Population variance of the grayscale pixel values
    pub gray_variance: f64,
    /// Mean of the per-band (RGB) means
    pub mean_brightness: f64,
    /// Mean response of the 3x3 edge filter on the grayscale page
    pub edge_density: f64,
}

impl RasterStats {
    /// Decode an image file and compute its statistics.
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let image = image::open(path)
            .map_err(CertError::from)
            .with_context(|| format!("opening {}", path.display()))?;
        Self::from_image(&image).with_context(|| path.display().to_string())
    }

    /// Decode an in-memory PNG or JPEG.
    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        let image = image::load_from_memory(bytes)?;
        Self::from_image(&image)
    }

    /// Compute statistics for a decoded image.
    pub fn from_image(image: &DynamicImage) -> crate::Result<Self> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(CertError::input(
                "computing raster statistics",
                InputErrorKind::EmptyRaster,
            ));
        }

        let gray = image.to_luma8();
        let rgb = image.to_rgb8();

        let stats = Self {
            width,
            height,
            gray_variance: population_variance(gray.as_raw()),
            mean_brightness: mean(rgb.as_raw()),
            edge_density: edge_density(&gray),
        };
        tracing::debug!(
            width,
            height,
            gray_variance = stats.gray_variance,
            mean_brightness = stats.mean_brightness,
            edge_density = stats.edge_density,
            "Computed raster statistics"
        );
        Ok(stats)
    }

    /// Width over height
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    sum as f64 / values.len() as f64
}

fn population_variance(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let (sum, sum_sq) = values.iter().fold((0.0_f64, 0.0_f64), |(s, sq), &v| {
        let v = f64::from(v);
        (s + v, sq + v * v)
    });
    let mean = sum / n;
    (sum_sq / n - mean * mean).max(0.0)
}

/// Mean of the 8-neighbour Laplacian, each response clamped to 0..=255.
///
/// The outermost rows and columns pass through unfiltered, so a page
/// narrower or shorter than the kernel is its own edge map.
fn edge_density(gray: &GrayImage) -> f64 {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return 0.0;
    }
    let at = |x: u32, y: u32| i32::from(gray.get_pixel(x, y).0[0]);

    let mut total: u64 = 0;
    for y in 0..height {
        for x in 0..width {
            let border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
            let response = if border {
                at(x, y)
            } else {
                let neighbours: i32 = (y - 1..=y + 1)
                    .flat_map(|ny| (x - 1..=x + 1).map(move |nx| (nx, ny)))
                    .filter(|&p| p != (x, y))
                    .map(|(nx, ny)| at(nx, ny))
                    .sum();
                (8 * at(x, y) - neighbours).clamp(0, 255)
            };
            total += u64::from(response.unsigned_abs());
        }
    }
    total as f64 / (f64::from(width) * f64::from(height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    fn gray_page(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| Luma([f(x, y)])))
    }

    #[test]
    fn test_flat_page() {
        let stats = RasterStats::from_image(&gray_page(40, 20, |_, _| 128)).unwrap();
        assert_eq!(stats.gray_variance, 0.0);
        assert_eq!(stats.mean_brightness, 128.0);
        // 116 border pixels keep their value; the flat interior responds 0
        assert!((stats.edge_density - 116.0 * 128.0 / 800.0).abs() < 1e-9);
        assert_eq!(stats.aspect_ratio(), 2.0);
        assert_eq!(stats.pixel_count(), 800);
    }

    #[test]
    fn test_half_black_half_white_variance() {
        // Values 0 and 255 in equal parts: variance = 127.5^2
        let stats =
            RasterStats::from_image(&gray_page(10, 10, |x, _| if x < 5 { 0 } else { 255 })).unwrap();
        assert!((stats.gray_variance - 16_256.25).abs() < 1e-6);
        assert!((stats.mean_brightness - 127.5).abs() < 1e-9);
    }

    #[test]
    fn test_single_bright_dot_edges() {
        // Centre responds 8*255 (clamped to 255); the 8 neighbours go negative and clamp to 0
        let stats =
            RasterStats::from_image(&gray_page(3, 3, |x, y| if (x, y) == (1, 1) { 255 } else { 0 }))
                .unwrap();
        assert!((stats.edge_density - 255.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_border_passes_through_unfiltered() {
        // Bright frame around a dark interior: only the frame counts, the
        // interior pixels next to it go negative and clamp to 0
        let stats = RasterStats::from_image(&gray_page(5, 4, |x, y| {
            if x == 0 || y == 0 || x == 4 || y == 3 {
                200
            } else {
                0
            }
        }))
        .unwrap();
        assert!((stats.edge_density - 14.0 * 200.0 / 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_thin_strip_is_its_own_edge_map() {
        let stats = RasterStats::from_image(&gray_page(6, 2, |x, _| (x * 40) as u8)).unwrap();
        assert!((stats.edge_density - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_brightness_averages_bands() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([30, 60, 90])));
        let stats = RasterStats::from_image(&image).unwrap();
        assert!((stats.mean_brightness - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_raster_rejected() {
        let err = RasterStats::from_image(&gray_page(0, 0, |_, _| 0)).unwrap_err();
        assert!(matches!(
            err,
            CertError::Input {
                source: InputErrorKind::EmptyRaster,
                ..
            }
        ));
    }

    #[test]
    fn test_png_bytes_round_trip() {
        let mut bytes = Vec::new();
        gray_page(8, 6, |x, y| ((x * 30 + y * 10) % 256) as u8)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        let stats = RasterStats::from_bytes(&bytes).unwrap();
        assert_eq!((stats.width, stats.height), (8, 6));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = RasterStats::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(
            err,
            CertError::Input {
                source: InputErrorKind::RasterDecode(_),
                ..
            }
        ));
    }
}
