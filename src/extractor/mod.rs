//! Grid extraction from a decoded source image
//!
//! This module walks the cells of a grid laid out on a source photo,
//! crops each one and writes it out as a numbered JPEG.

mod grid_extractor;

pub use grid_extractor::{GridExtractor, JPEG_QUALITY};
