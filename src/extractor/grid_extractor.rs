//! The grid extractor
//!
//! Decodes the source image once, then runs a single synchronous pass
//! over the grid cells in row-major order. Each cell is cropped, any
//! alpha channel is flattened onto white, and the result is written as
//! `security-{n}.jpg` with n counting from 1 in iteration order. A
//! failure at any point aborts the remaining cells; files already
//! written stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgb, RgbImage};
use log::{debug, info};

use crate::grid::{GridSpec, Region, SliceError, SliceResult};
use crate::utils::image_utils;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// JPEG quality used for every cell
pub const JPEG_QUALITY: u8 = 95;

/// Extracts the cells of a grid from a source image
pub struct GridExtractor<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> GridExtractor<'a> {
    /// Create a new extractor
    pub fn new(logger: &'a Logger) -> Self {
        GridExtractor { logger }
    }

    /// Extract every grid cell to a numbered JPEG in `output_dir`
    ///
    /// The output directory is created if absent, including parents.
    /// Cells that reach past the source bounds are clipped to the
    /// available pixels; a cell entirely outside the source produces a
    /// blank white image of the full cell size.
    ///
    /// # Arguments
    /// * `source_path` - Path to the source image
    /// * `output_dir` - Directory receiving `security-{n}.jpg` files
    /// * `spec` - Grid layout to slice along
    ///
    /// # Returns
    /// The paths written, in iteration order, or the first error hit
    pub fn extract_to_dir(
        &self,
        source_path: &str,
        output_dir: &str,
        spec: &GridSpec,
    ) -> SliceResult<Vec<PathBuf>> {
        info!("Loading source image: {}", source_path);

        let path = Path::new(source_path);
        if !path.exists() {
            return Err(SliceError::SourceNotFound(source_path.to_string()));
        }

        let img = image::open(path).map_err(|e| SliceError::DecodeError(e.to_string()))?;
        info!("Source image dimensions: {}x{}", img.width(), img.height());
        info!("Grid: {}x{}", spec.columns, spec.rows);
        info!("Cell dimensions: {}x{}", spec.cell_width, spec.cell_height);
        info!("Spacing: {}x{}", spec.h_spacing, spec.v_spacing);

        fs::create_dir_all(output_dir).map_err(|e| {
            SliceError::WriteError(format!("cannot create output directory {}: {}", output_dir, e))
        })?;

        let progress = ProgressTracker::new(spec.cell_count() as u64, "Extracting cells");
        let mut written = Vec::with_capacity(spec.cell_count() as usize);

        let mut index = 1u32;
        for row in 0..spec.rows {
            for col in 0..spec.columns {
                let region = spec.cell_region(row, col);
                let cell = self.crop_cell(&img, region);

                let out_path = Path::new(output_dir).join(format!("security-{}.jpg", index));
                image_utils::save_jpeg(&cell, &out_path, JPEG_QUALITY)?;

                info!(
                    "Extracted image {}: {} (position: {},{}, {}x{})",
                    index,
                    out_path.display(),
                    region.x,
                    region.y,
                    cell.width(),
                    cell.height()
                );
                progress.increment(1);
                written.push(out_path);
                index += 1;
            }
        }

        progress.finish("All cells extracted");
        info!("Successfully extracted {} security images", written.len());
        self.logger
            .log(&format!("Extracted {} images to {}", written.len(), output_dir))?;

        Ok(written)
    }

    /// Crop one cell out of the source, normalized to opaque RGB
    fn crop_cell(&self, img: &DynamicImage, region: Region) -> RgbImage {
        let clipped = region.clamped(img.width(), img.height());
        if clipped.is_empty() {
            // Cell lies entirely outside the source; emit a blank cell
            // rather than failing the run.
            debug!("Region {:?} is outside the source image", region);
            return RgbImage::from_pixel(region.width, region.height, Rgb([255, 255, 255]));
        }
        if clipped != region {
            debug!("Region {:?} clipped to {:?}", region, clipped);
        }

        let view = img.crop_imm(clipped.x, clipped.y, clipped.width, clipped.height);
        if view.color().has_alpha() {
            image_utils::flatten_onto_white(&view.to_rgba8())
        } else {
            view.to_rgb8()
        }
    }
}
