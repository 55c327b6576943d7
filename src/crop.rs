//! Cropping the white margins around a rendered brain.

use image::{imageops, RgbImage};
use log::debug;

use std::cmp;
use std::path::Path;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct CropSettings {
    /// A pixel is background if every channel is strictly above this value.
    pub bg_thresh: u8,
    /// Pixels kept around the content on each side, as far as the image extends.
    pub padding: u32,
}

impl Default for CropSettings {
    fn default() -> CropSettings {
        CropSettings { bg_thresh: 245, padding: 5 }
    }
}

/// A pixel rectangle, `x`/`y` is the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}


/// The bounding box of all non-background pixels, grown by `padding` and clamped to the image.
///
/// Returns `None` if the whole image is background.
pub fn content_bounds(img: &RgbImage, settings: &CropSettings) -> Option<CropRect> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None; // (min_x, min_y, max_x, max_y)
    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel.0.iter().all(|c| *c > settings.bg_thresh) {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y)),
        });
    }

    let (min_x, min_y, max_x, max_y) = bounds?;
    let (width, height) = img.dimensions();
    let x0 = min_x.saturating_sub(settings.padding);
    let y0 = min_y.saturating_sub(settings.padding);
    let x1 = cmp::min(max_x.saturating_add(settings.padding), width - 1);
    let y1 = cmp::min(max_y.saturating_add(settings.padding), height - 1);

    Some(CropRect { x: x0, y: y0, width: x1 - x0 + 1, height: y1 - y0 + 1 })
}


/// Crop the image file at `path` to its content and overwrite it.
///
/// Returns whether the file was rewritten. An image that is all background is left untouched.
pub fn crop_to_content<P: AsRef<Path>>(path: P, settings: &CropSettings) -> Result<bool> {
    let img = image::open(&path)?.to_rgb8();
    let rect = match content_bounds(&img, settings) {
        Some(rect) => rect,
        None => {
            debug!("{}: only background, not cropped.", path.as_ref().display());
            return Ok(false);
        }
    };

    let cropped = imageops::crop_imm(&img, rect.x, rect.y, rect.width, rect.height).to_image();
    cropped.save(&path)?;
    debug!(
        "{}: cropped from {}x{} to {}x{}.",
        path.as_ref().display(),
        img.width(),
        img.height(),
        rect.width,
        rect.height
    );
    Ok(true)
}
