//! Region structure for defining a crop area
//!
//! A Region specifies a rectangular area of an image in pixel
//! coordinates, where (0,0) is the top-left corner of the image.

/// Rectangular crop area (in pixel coordinates)
///
/// Defined by its top-left corner and dimensions. Used to specify
/// which portion of the source image one grid cell covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Clip this region to the bounds of an image
    ///
    /// Regions that reach past the image edge are reduced to the pixels
    /// actually available; a region entirely outside the image collapses
    /// to zero size. Clipping never fails.
    ///
    /// # Arguments
    /// * `img_width` - Width of the image in pixels
    /// * `img_height` - Height of the image in pixels
    ///
    /// # Returns
    /// The intersection of this region with the image bounds
    pub fn clamped(&self, img_width: u32, img_height: u32) -> Region {
        let x = self.x.min(img_width);
        let y = self.y.min(img_height);
        Region {
            x,
            y,
            width: self.width.min(img_width - x),
            height: self.height.min(img_height - y),
        }
    }

    /// Whether the region covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
