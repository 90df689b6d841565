// SPDX-License-Identifier: MPL-2.0
//! Page and logo image loading (PNG, JPEG, WebP, SVG, etc.) and placeholders.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Size of the placeholder shown in place of a single page.
pub const SINGLE_PLACEHOLDER_SIZE: (u32, u32) = (1920, 1080);

/// Size of the placeholder shown in place of one half of a spread.
pub const HALF_PLACEHOLDER_SIZE: (u32, u32) = (960, 1080);

const PLACEHOLDER_RGBA: [u8; 4] = [0xD9, 0xD4, 0xCC, 0xFF];

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Load an image from the given path and return its data.
///
/// SVG files are rasterized with resvg at their intrinsic size.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Image`]
/// when its contents cannot be decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        rasterize_svg(&bytes)
    } else {
        let img = image_rs::load_from_memory(&bytes)?;
        let (width, height) = img.dimensions();
        Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
    }
}

fn rasterize_svg(svg_data: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())
        .map_err(|e| Error::Image(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(Error::Image("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Image("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(ImageData::from_rgba(width, height, pixmap.take()))
}

/// Loads an image off the UI thread.
pub async fn load_image_async(path: std::path::PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

/// Placeholder for a page shown alone (cover or closing page).
pub fn single_placeholder() -> &'static ImageData {
    static PLACEHOLDER: OnceLock<ImageData> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| solid(SINGLE_PLACEHOLDER_SIZE))
}

/// Placeholder for one half of a spread.
pub fn half_placeholder() -> &'static ImageData {
    static PLACEHOLDER: OnceLock<ImageData> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| solid(HALF_PLACEHOLDER_SIZE))
}

fn solid((width, height): (u32, u32)) -> ImageData {
    let pixels = PLACEHOLDER_RGBA
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 4)
        .collect();
    ImageData::from_rgba(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!((data.width, data.height), (4, 2));
    }

    #[test]
    fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("logo.svg");
        let svg_content =
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3"><rect width="6" height="3" fill="blue"/></svg>"#;
        fs::write(&svg_path, svg_content).expect("failed to write svg");

        let data = load_image(&svg_path).expect("svg should load successfully");
        assert_eq!((data.width, data.height), (6, 3));
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        match load_image(temp_dir.path().join("7.jpg")) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_jpeg_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("3.jpg");
        fs::write(&bad_path, b"not a jpeg").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_svg_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_svg_path = temp_dir.path().join("broken.svg");
        fs::write(&bad_svg_path, "<svg>oops").expect("failed to write invalid svg");

        assert!(matches!(load_image(&bad_svg_path), Err(Error::Image(_))));
    }

    #[test]
    fn placeholders_have_fixed_sizes() {
        let single = single_placeholder();
        assert_eq!((single.width, single.height), SINGLE_PLACEHOLDER_SIZE);
        let half = half_placeholder();
        assert_eq!((half.width, half.height), HALF_PLACEHOLDER_SIZE);
    }

    #[tokio::test]
    async fn async_load_reports_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_image_async(temp_dir.path().join("1.jpg")).await;
        assert!(result.is_err());
    }
}
