//! Geometry types: pixel rectangles, the icon grid, and cell transforms.

/// A rectangle defined in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the target surface
    pub x: u32,
    /// Y offset from the top edge of the target surface
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RectPx {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle starting at origin (0, 0) with the given dimensions.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Shrinks the rectangle by `amount` on every side.
    ///
    /// Saturates at an empty rectangle centered where the original was.
    pub fn inset(&self, amount: u32) -> Self {
        let dx = amount.min(self.width / 2);
        let dy = amount.min(self.height / 2);
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width - dx * 2,
            height: self.height - dy * 2,
        }
    }
}

// ============================================================================
// Grid
// ============================================================================

/// The square, cell-aligned drawing area an icon is laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Left edge of the square.
    pub x: u32,
    /// Top edge of the square.
    pub y: u32,
    /// Side length, a multiple of the cell count.
    pub size: u32,
    /// Side length of one cell.
    pub cell_size: u32,
}

impl Grid {
    /// Top-left corner of cell `(column, row)` as a float point.
    pub fn cell_origin(&self, column: u32, row: u32) -> Point {
        Point::new(
            (self.x + column * self.cell_size) as f32,
            (self.y + row * self.cell_size) as f32,
        )
    }
}

/// Fits a `cell_count` x `cell_count` grid into `rect`.
///
/// The side is the largest multiple of `cell_count` not exceeding the
/// shorter edge of `rect`, and the square is centered on both axes
/// (rounding offsets down).
///
/// # Panics
///
/// Panics if `cell_count` is zero.
pub fn normalize_grid(rect: RectPx, cell_count: u32) -> Grid {
    let mut size = rect.width.min(rect.height);
    size -= size % cell_count;

    Grid {
        x: rect.x + (rect.width - size) / 2,
        y: rect.y + (rect.height - size) / 2,
        size,
        cell_size: size / cell_count,
    }
}

// ============================================================================
// Point / Transform
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Maps cell-local coordinates to icon coordinates.
///
/// A cell is a `size` x `size` square at `(x, y)`, turned clockwise by
/// `rotation` quarter turns (taken modulo 4).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub rotation: u8,
}

impl Transform {
    /// Passes points through unchanged.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        size: 0.0,
        rotation: 0,
    };

    pub fn new(origin: Point, size: f32, rotation: u8) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            size,
            rotation: rotation % 4,
        }
    }

    /// Transforms the top-left corner of a `w` x `h` box at cell-local
    /// `(x, y)`.
    ///
    /// Pass zero extents to transform a bare point. With extents the result
    /// is the top-left corner of the rotated box, which is what circles need.
    pub fn transform_point(&self, x: f32, y: f32, w: f32, h: f32) -> Point {
        let right = self.x + self.size;
        let bottom = self.y + self.size;

        match self.rotation % 4 {
            1 => Point::new(right - y - h, self.y + x),
            2 => Point::new(right - x - w, bottom - y - h),
            3 => Point::new(self.x + y, bottom - x - w),
            _ => Point::new(self.x + x, self.y + y),
        }
    }
}
