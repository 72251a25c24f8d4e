//! Image helpers for cell post-processing and encoding
//!
//! The crops coming out of the extractor may carry an alpha channel
//! (PNG sources in particular); JPEG cannot represent it, so transparent
//! cells are composited onto an opaque white background before encoding.

use std::fs;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage, RgbaImage};

use crate::grid::errors::{SliceError, SliceResult};

/// Composite an RGBA image onto an opaque white background
///
/// Standard source-over blend against white, producing a fully opaque
/// RGB image of identical dimensions.
pub fn flatten_onto_white(rgba: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::from_pixel(rgba.width(), rgba.height(), Rgb([255, 255, 255]));
    for (x, y, px) in rgba.enumerate_pixels() {
        let alpha = px[3] as u32;
        let dst = out.get_pixel_mut(x, y);
        for c in 0..3 {
            dst[c] = ((px[c] as u32 * alpha + 255 * (255 - alpha)) / 255) as u8;
        }
    }
    out
}

/// Encode an RGB image as JPEG and write it to disk
///
/// Encoding happens in memory first so a failed encode never leaves a
/// truncated file behind.
///
/// # Arguments
/// * `image` - The image to encode
/// * `path` - Destination file path
/// * `quality` - JPEG quality, 1-100
pub fn save_jpeg(image: &RgbImage, path: &Path, quality: u8) -> SliceResult<()> {
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    image
        .write_with_encoder(encoder)
        .map_err(|e| SliceError::WriteError(format!("failed to encode {}: {}", path.display(), e)))?;
    fs::write(path, &buf)
        .map_err(|e| SliceError::WriteError(format!("cannot write {}: {}", path.display(), e)))?;
    Ok(())
}
