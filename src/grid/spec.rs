//! Grid layout configuration
//!
//! A GridSpec describes a rectangular grid of equally sized cells laid
//! out on a source image: where the first cell starts, how big each
//! cell is, and the stride between the top-left corners of adjacent
//! cells. The spec is an immutable value passed into the extractor,
//! which makes alternate layouts easy to inject in tests.

use crate::grid::region::Region;

/// Immutable description of a grid of equally sized cells
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    /// Number of cell columns
    pub columns: u32,
    /// Number of cell rows
    pub rows: u32,
    /// X-coordinate of the first cell's top-left corner
    pub start_x: u32,
    /// Y-coordinate of the first cell's top-left corner
    pub start_y: u32,
    /// Width of each cell in pixels
    pub cell_width: u32,
    /// Height of each cell in pixels
    pub cell_height: u32,
    /// Horizontal distance between left edges of adjacent cells
    pub h_spacing: u32,
    /// Vertical distance between top edges of adjacent cells
    pub v_spacing: u32,
}

/// Layout of the 3x4 security image grid inside the profile picture,
/// measured from the actual image.
pub const SECURITY_GRID: GridSpec = GridSpec {
    columns: 3,
    rows: 4,
    start_x: 137,
    start_y: 182,
    cell_width: 119,
    cell_height: 82,
    h_spacing: 153,
    v_spacing: 108,
};

impl GridSpec {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> u32 {
        self.rows * self.columns
    }

    /// Compute the crop region for one cell
    ///
    /// # Arguments
    /// * `row` - Cell row, 0-indexed from the top
    /// * `col` - Cell column, 0-indexed from the left
    ///
    /// # Returns
    /// The pixel region the cell covers on the source image
    pub fn cell_region(&self, row: u32, col: u32) -> Region {
        Region::new(
            self.start_x + col * self.h_spacing,
            self.start_y + row * self.v_spacing,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Enumerate all cell regions in row-major order
    ///
    /// All columns of a row are visited before advancing to the next
    /// row, matching the 1-based output numbering.
    pub fn regions(&self) -> Vec<Region> {
        let mut regions = Vec::with_capacity(self.cell_count() as usize);
        for row in 0..self.rows {
            for col in 0..self.columns {
                regions.push(self.cell_region(row, col));
            }
        }
        regions
    }

    /// Smallest source dimensions that contain every cell in full
    ///
    /// # Returns
    /// (width, height) reached by the bottom-right cell
    pub fn max_extent(&self) -> (u32, u32) {
        let last = self.cell_region(self.rows - 1, self.columns - 1);
        (last.end_x(), last.end_y())
    }
}
