//! Shape variants drawn into grid cells.
//!
//! Every variant draws one cell in cell-local coordinates (`0..cell` on both
//! axes); the [`Graphics`] handle rotates and places it. Some variants snap
//! their insets to whole pixels so small icons stay crisp.

use crate::render::Graphics;

/// Signature of a shape drawing callback: graphics handle, cell size, and the
/// position of the cell within its category.
pub type ShapeFn = fn(&mut Graphics<'_>, f32, usize);

/// Variants for the sides and corners categories.
pub static OUTER: [ShapeFn; 4] = [
    outer_triangle,
    outer_half_triangle,
    outer_rhombus,
    outer_circle,
];

/// Variants for the center category.
pub static CENTER: [ShapeFn; 14] = [
    center_cut_corner,
    center_sail,
    center_inner_square,
    center_offset_square,
    center_offset_circle,
    center_triangle_window,
    center_folded,
    center_quarter_triangle,
    center_stair,
    center_square_window,
    center_round_window,
    center_quarter_triangle,
    center_diamond_window,
    center_big_circle,
];

// ============================================================================
// Outer Shapes
// ============================================================================

fn outer_triangle(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    g.add_triangle(0.0, 0.0, cell, cell, 0, false);
}

fn outer_half_triangle(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    g.add_triangle(0.0, cell / 2.0, cell, cell / 2.0, 0, false);
}

fn outer_rhombus(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    g.add_rhombus(0.0, 0.0, cell, cell, false);
}

fn outer_circle(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    let m = cell / 6.0;
    g.add_circle(m, m, cell - 2.0 * m, false);
}

// ============================================================================
// Center Shapes
// ============================================================================

fn center_cut_corner(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    let k = cell * 0.42;
    g.add_polygon(
        &[
            (0.0, 0.0),
            (cell, 0.0),
            (cell, cell - k * 2.0),
            (cell - k, cell),
            (0.0, cell),
        ],
        false,
    );
}

fn center_sail(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    let w = (cell * 0.5).floor();
    let h = (cell * 0.8).floor();
    g.add_triangle(cell - w, 0.0, w, h, 2, false);
}

fn center_inner_square(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    let s = (cell / 3.0).floor();
    g.add_rectangle(s, s, cell - s, cell - s, false);
}

fn center_offset_square(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    let inner = cell * 0.1;
    let inner = if inner > 1.0 {
        inner.floor()
    } else if inner > 0.5 {
        1.0
    } else {
        inner
    };
    let outer = if cell < 6.0 {
        1.0
    } else if cell < 8.0 {
        2.0
    } else {
        (cell * 0.25).floor()
    };
    g.add_rectangle(outer, outer, cell - inner - outer, cell - inner - outer, false);
}

fn center_offset_circle(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    let m = (cell * 0.15).floor();
    let s = (cell * 0.5).floor();
    g.add_circle(cell - s - m, cell - s - m, s, false);
}

fn center_triangle_window(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    let inner = cell * 0.1;
    let mut outer = inner * 4.0;
    if outer > 3.0 {
        outer = outer.floor();
    }
    g.add_rectangle(0.0, 0.0, cell, cell, false);
    g.add_polygon(
        &[
            (outer, outer),
            (cell - inner, outer),
            (outer + (cell - outer - inner) / 2.0, cell - inner),
        ],
        true,
    );
}

fn center_folded(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    g.add_polygon(
        &[
            (0.0, 0.0),
            (cell, 0.0),
            (cell, cell * 0.7),
            (cell * 0.4, cell * 0.4),
            (cell * 0.7, cell),
            (0.0, cell),
        ],
        false,
    );
}

fn center_quarter_triangle(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    let half = cell / 2.0;
    g.add_triangle(half, half, half, half, 3, false);
}

fn center_stair(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    let half = cell / 2.0;
    g.add_rectangle(0.0, 0.0, cell, half, false);
    g.add_rectangle(0.0, half, half, half, false);
    g.add_triangle(half, half, half, half, 1, false);
}

fn center_square_window(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    let inner = cell * 0.14;
    let inner = if cell < 8.0 { inner } else { inner.floor() };
    let outer = if cell < 4.0 {
        1.0
    } else if cell < 6.0 {
        2.0
    } else {
        (cell * 0.35).floor()
    };
    g.add_rectangle(0.0, 0.0, cell, cell, false);
    g.add_rectangle(outer, outer, cell - outer - inner, cell - outer - inner, true);
}

fn center_round_window(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    let inner = cell * 0.12;
    let outer = inner * 3.0;
    g.add_rectangle(0.0, 0.0, cell, cell, false);
    g.add_circle(outer, outer, cell - inner - outer, true);
}

fn center_diamond_window(g: &mut Graphics<'_>, cell: f32, _index: usize) {
    let m = cell * 0.25;
    g.add_rectangle(0.0, 0.0, cell, cell, false);
    g.add_rhombus(m, m, cell - m, cell - m, true);
}

/// One circle spanning the four center cells, drawn from the first cell only.
fn center_big_circle(g: &mut Graphics<'_>, cell: f32, index: usize) {
    if index == 0 {
        let m = cell * 0.4;
        g.add_circle(m, m, cell * 1.2, false);
    }
}
