//! Shape categories: which hash octets drive which grid cells.

use crate::shapes::{self, ShapeFn};

/// Number of cells along each side of the icon grid.
pub const CELL_COUNT: u32 = 4;

/// A `(column, row)` grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
    pub x: u32,
    pub y: u32,
}

impl CellPos {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A group of cells sharing one color, shape variant and rotation.
///
/// The three indices are half-byte positions in the hash (see
/// [`crate::hash::get_octet`]).
#[derive(Debug, Clone, Copy)]
pub struct ShapeCategory<'a> {
    /// Octet selecting the palette entry.
    pub color_index: usize,
    /// Octet selecting the shape variant.
    pub shape_index: usize,
    /// Octet selecting the starting rotation; `None` starts every shape
    /// unrotated.
    pub rotation_index: Option<usize>,
    pub shapes: &'a [ShapeFn],
    /// Occupied cells in drawing order.
    pub positions: &'a [CellPos],
}

impl ShapeCategory<'_> {
    /// Largest octet index this category reads.
    pub fn max_octet_index(&self) -> usize {
        self.color_index
            .max(self.shape_index)
            .max(self.rotation_index.unwrap_or(0))
    }
}

/// Minimum hash length in bytes for `categories`.
pub fn required_hash_len(categories: &[ShapeCategory<'_>]) -> usize {
    categories
        .iter()
        .map(|c| c.max_octet_index() / 2 + 1)
        .max()
        .unwrap_or(0)
}

static SIDE_CELLS: [CellPos; 8] = [
    CellPos::new(1, 0),
    CellPos::new(2, 0),
    CellPos::new(2, 3),
    CellPos::new(1, 3),
    CellPos::new(0, 1),
    CellPos::new(3, 1),
    CellPos::new(3, 2),
    CellPos::new(0, 2),
];

static CORNER_CELLS: [CellPos; 4] = [
    CellPos::new(0, 0),
    CellPos::new(3, 0),
    CellPos::new(3, 3),
    CellPos::new(0, 3),
];

static CENTER_CELLS: [CellPos; 4] = [
    CellPos::new(1, 1),
    CellPos::new(2, 1),
    CellPos::new(2, 2),
    CellPos::new(1, 2),
];

/// The standard layout, in drawing order: sides, corners, center.
///
/// The order matters: the color collision rule only looks at categories
/// resolved earlier.
pub static DEFAULT_CATEGORIES: [ShapeCategory<'static>; 3] = [
    ShapeCategory {
        color_index: 8,
        shape_index: 2,
        rotation_index: Some(3),
        shapes: &shapes::OUTER,
        positions: &SIDE_CELLS,
    },
    ShapeCategory {
        color_index: 9,
        shape_index: 4,
        rotation_index: Some(5),
        shapes: &shapes::OUTER,
        positions: &CORNER_CELLS,
    },
    ShapeCategory {
        color_index: 10,
        shape_index: 1,
        rotation_index: None,
        shapes: &shapes::CENTER,
        positions: &CENTER_CELLS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_table_needs_six_bytes() {
        assert_eq!(required_hash_len(&DEFAULT_CATEGORIES), 6);
        assert_eq!(required_hash_len(&[]), 0);
    }

    #[test]
    fn default_table_covers_grid_once() {
        let cells: Vec<CellPos> = DEFAULT_CATEGORIES
            .iter()
            .flat_map(|c| c.positions.iter().copied())
            .collect();
        let unique: HashSet<(u32, u32)> = cells.iter().map(|c| (c.x, c.y)).collect();

        assert_eq!(cells.len(), (CELL_COUNT * CELL_COUNT) as usize);
        assert_eq!(unique.len(), cells.len());
        assert!(cells.iter().all(|c| c.x < CELL_COUNT && c.y < CELL_COUNT));
    }

    #[test]
    fn center_has_no_rotation() {
        assert_eq!(DEFAULT_CATEGORIES[2].rotation_index, None);
        assert_eq!(DEFAULT_CATEGORIES[2].shapes.len(), 14);
        assert_eq!(DEFAULT_CATEGORIES[0].shapes.len(), 4);
    }
}
