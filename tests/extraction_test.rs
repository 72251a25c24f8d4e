//! Integration tests for grid extraction
//!
//! Each test builds a synthetic source image in a scratch directory,
//! runs the extractor against it and inspects the JPEGs it wrote.

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

use gridslice::{GridExtractor, SliceError, SECURITY_GRID};
use gridslice::utils::logger::Logger;

/// Color used to fill cell `n` (1-based) in the synthetic source
fn cell_color(n: u32) -> Rgb<u8> {
    Rgb([(n * 20) as u8, (255 - n * 15) as u8, (n * 10) as u8])
}

/// Build a 562x588 source image with each grid cell filled in a
/// distinct solid color on a white background.
fn make_grid_source() -> RgbImage {
    let (width, height) = SECURITY_GRID.max_extent();
    let mut img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));

    for (i, region) in SECURITY_GRID.regions().iter().enumerate() {
        let color = cell_color(i as u32 + 1);
        for y in region.y..region.end_y() {
            for x in region.x..region.end_x() {
                img.put_pixel(x, y, color);
            }
        }
    }
    img
}

fn test_logger(dir: &TempDir) -> Logger {
    let path = dir.path().join("test.log");
    Logger::new(path.to_str().unwrap()).unwrap()
}

fn assert_close(actual: Rgb<u8>, expected: Rgb<u8>, tolerance: i16) {
    for c in 0..3 {
        let diff = (actual[c] as i16 - expected[c] as i16).abs();
        assert!(
            diff <= tolerance,
            "channel {} off by {}: {:?} vs {:?}",
            c,
            diff,
            actual,
            expected
        );
    }
}

#[test]
fn test_extracts_twelve_numbered_jpegs() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source.png");
    make_grid_source().save(&source).unwrap();
    let out_dir = dir.path().join("out");

    let logger = test_logger(&dir);
    let extractor = GridExtractor::new(&logger);
    let written = extractor
        .extract_to_dir(source.to_str().unwrap(), out_dir.to_str().unwrap(), &SECURITY_GRID)
        .unwrap();

    assert_eq!(written.len(), 12);
    for n in 1..=12 {
        let path = out_dir.join(format!("security-{}.jpg", n));
        assert!(path.is_file(), "missing {}", path.display());

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width(), 119);
        assert_eq!(decoded.height(), 82);
        assert!(!decoded.color().has_alpha());
    }
}

#[test]
fn test_fifth_cell_content_matches_its_rectangle() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source.png");
    make_grid_source().save(&source).unwrap();
    let out_dir = dir.path().join("out");

    let logger = test_logger(&dir);
    let extractor = GridExtractor::new(&logger);
    extractor
        .extract_to_dir(source.to_str().unwrap(), out_dir.to_str().unwrap(), &SECURITY_GRID)
        .unwrap();

    // security-5 covers the cell at (290, 290); its fill color survives
    // JPEG encoding within a small tolerance.
    let decoded = image::open(out_dir.join("security-5.jpg")).unwrap().to_rgb8();
    assert_close(*decoded.get_pixel(59, 41), cell_color(5), 10);
}

#[test]
fn test_running_twice_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source.png");
    make_grid_source().save(&source).unwrap();

    let logger = test_logger(&dir);
    let extractor = GridExtractor::new(&logger);
    let out_a = dir.path().join("a");
    let out_b = dir.path().join("b");
    extractor
        .extract_to_dir(source.to_str().unwrap(), out_a.to_str().unwrap(), &SECURITY_GRID)
        .unwrap();
    extractor
        .extract_to_dir(source.to_str().unwrap(), out_b.to_str().unwrap(), &SECURITY_GRID)
        .unwrap();

    for n in 1..=12 {
        let name = format!("security-{}.jpg", n);
        let bytes_a = fs::read(out_a.join(&name)).unwrap();
        let bytes_b = fs::read(out_b.join(&name)).unwrap();
        assert_eq!(bytes_a, bytes_b, "{} differs between runs", name);
    }
}

#[test]
fn test_missing_source_reports_source_not_found() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("out");

    let logger = test_logger(&dir);
    let extractor = GridExtractor::new(&logger);
    let result = extractor.extract_to_dir(
        dir.path().join("nope.jpeg").to_str().unwrap(),
        out_dir.to_str().unwrap(),
        &SECURITY_GRID,
    );

    assert!(matches!(result, Err(SliceError::SourceNotFound(_))));
    // Nothing was written, not even the output directory
    assert!(!out_dir.exists());
}

#[test]
fn test_undecodable_source_reports_decode_error() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("not-an-image.jpeg");
    fs::write(&source, b"definitely not a raster").unwrap();
    let out_dir = dir.path().join("out");

    let logger = test_logger(&dir);
    let extractor = GridExtractor::new(&logger);
    let result = extractor.extract_to_dir(
        source.to_str().unwrap(),
        out_dir.to_str().unwrap(),
        &SECURITY_GRID,
    );

    assert!(matches!(result, Err(SliceError::DecodeError(_))));
}

#[test]
fn test_blocked_output_dir_reports_write_error() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source.png");
    make_grid_source().save(&source).unwrap();

    // A plain file where the output directory should go
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, b"in the way").unwrap();

    let logger = test_logger(&dir);
    let extractor = GridExtractor::new(&logger);
    let result = extractor.extract_to_dir(
        source.to_str().unwrap(),
        blocked.to_str().unwrap(),
        &SECURITY_GRID,
    );

    assert!(matches!(result, Err(SliceError::WriteError(_))));
}

#[test]
fn test_alpha_source_is_flattened_onto_white() {
    let dir = TempDir::new().unwrap();
    let (width, height) = SECURITY_GRID.max_extent();

    // Fully transparent red everywhere; flattening must leave white
    let rgba = RgbaImage::from_pixel(width, height, Rgba([200, 0, 0, 0]));
    let source = dir.path().join("source.png");
    rgba.save(&source).unwrap();
    let out_dir = dir.path().join("out");

    let logger = test_logger(&dir);
    let extractor = GridExtractor::new(&logger);
    extractor
        .extract_to_dir(source.to_str().unwrap(), out_dir.to_str().unwrap(), &SECURITY_GRID)
        .unwrap();

    let decoded = image::open(out_dir.join("security-1.jpg")).unwrap();
    assert!(!decoded.color().has_alpha());
    assert_close(*decoded.to_rgb8().get_pixel(10, 10), Rgb([255, 255, 255]), 10);
}

#[test]
fn test_semi_transparent_pixels_blend_with_white() {
    let dir = TempDir::new().unwrap();
    let (width, height) = SECURITY_GRID.max_extent();

    let rgba = RgbaImage::from_pixel(width, height, Rgba([200, 0, 0, 128]));
    let source = dir.path().join("source.png");
    rgba.save(&source).unwrap();
    let out_dir = dir.path().join("out");

    let logger = test_logger(&dir);
    let extractor = GridExtractor::new(&logger);
    extractor
        .extract_to_dir(source.to_str().unwrap(), out_dir.to_str().unwrap(), &SECURITY_GRID)
        .unwrap();

    // (200*128 + 255*127) / 255 = 227 on red, 127 on the others
    let decoded = image::open(out_dir.join("security-1.jpg")).unwrap().to_rgb8();
    assert_close(*decoded.get_pixel(59, 41), Rgb([227, 127, 127]), 10);
}

#[test]
fn test_small_source_clips_cells_instead_of_failing() {
    let dir = TempDir::new().unwrap();

    // 400x300 covers the first cell in full, cuts the second row short
    // and leaves the third column entirely outside.
    let img = RgbImage::from_pixel(400, 300, Rgb([10, 120, 230]));
    let source = dir.path().join("source.png");
    img.save(&source).unwrap();
    let out_dir = dir.path().join("out");

    let logger = test_logger(&dir);
    let extractor = GridExtractor::new(&logger);
    let written = extractor
        .extract_to_dir(source.to_str().unwrap(), out_dir.to_str().unwrap(), &SECURITY_GRID)
        .unwrap();
    assert_eq!(written.len(), 12);

    // Fully in-bounds cell keeps the nominal size
    let full = image::open(out_dir.join("security-1.jpg")).unwrap();
    assert_eq!((full.width(), full.height()), (119, 82));

    // row 0, col 2 starts at x=443, past the right edge: blank full-size cell
    let blank = image::open(out_dir.join("security-3.jpg")).unwrap().to_rgb8();
    assert_eq!((blank.width(), blank.height()), (119, 82));
    assert_close(*blank.get_pixel(59, 41), Rgb([255, 255, 255]), 10);

    // row 1, col 0 starts at y=290 with only 10 rows left below it
    let clipped = image::open(out_dir.join("security-4.jpg")).unwrap();
    assert_eq!((clipped.width(), clipped.height()), (119, 10));
}

#[test]
fn test_existing_outputs_are_overwritten() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source.png");
    make_grid_source().save(&source).unwrap();
    let out_dir = dir.path().join("out");

    fs::create_dir_all(&out_dir).unwrap();
    let stale = out_dir.join("security-1.jpg");
    fs::write(&stale, b"stale bytes").unwrap();

    let logger = test_logger(&dir);
    let extractor = GridExtractor::new(&logger);
    extractor
        .extract_to_dir(source.to_str().unwrap(), out_dir.to_str().unwrap(), &SECURITY_GRID)
        .unwrap();

    let decoded = image::open(&stale).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (119, 82));
}

#[test]
fn test_written_paths_are_in_iteration_order() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source.png");
    make_grid_source().save(&source).unwrap();
    let out_dir = dir.path().join("out");

    let logger = test_logger(&dir);
    let extractor = GridExtractor::new(&logger);
    let written = extractor
        .extract_to_dir(source.to_str().unwrap(), out_dir.to_str().unwrap(), &SECURITY_GRID)
        .unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| Path::new(p).file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    let expected: Vec<String> = (1..=12).map(|n| format!("security-{}.jpg", n)).collect();
    assert_eq!(names, expected);
}
