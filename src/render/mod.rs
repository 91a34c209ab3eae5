//! Rendering contract between the generator and a drawing backend.
//!
//! The generator never touches pixels. It talks to a [`Renderer`] through
//! three kinds of calls:
//!
//! - [`Renderer::set_background`] once per icon
//! - a begin/end pair per shape group, managed by [`ShapeScope`]
//! - polygon and circle primitives in absolute icon coordinates
//!
//! Shape callbacks draw in cell-local coordinates through [`Graphics`],
//! which carries the active [`Transform`] explicitly. The renderer itself
//! holds no transform state.

pub mod raster;

pub use raster::PixmapRenderer;

use crate::color::Color;
use crate::geometry::{Point, Transform};

// ============================================================================
// Renderer
// ============================================================================

/// A drawing backend.
///
/// Primitives are only meaningful between [`begin_shape`](Self::begin_shape)
/// and [`end_shape`](Self::end_shape); every primitive of one group shares
/// the group's color and is filled with the non-zero winding rule, so a
/// primitive wound the other way cuts a hole.
pub trait Renderer {
    /// Fills the whole surface with a flat color.
    fn set_background(&mut self, color: Color);

    /// Opens a drawing group tinted with `color`.
    fn begin_shape(&mut self, color: Color);

    /// Finalizes the group opened by the last `begin_shape`.
    fn end_shape(&mut self);

    /// Adds a closed polygon. Clockwise (on screen) adds area.
    fn add_polygon(&mut self, points: &[Point]);

    /// Adds a circle whose bounding box starts at `top_left`.
    fn add_circle(&mut self, top_left: Point, diameter: f32, counter_clockwise: bool);
}

// ============================================================================
// ShapeScope
// ============================================================================

/// An open drawing group. Dropping the scope closes the group.
///
/// The group is closed exactly once, also when a drawing callback panics
/// and the scope is dropped during unwinding.
pub struct ShapeScope<'a> {
    renderer: &'a mut dyn Renderer,
}

impl<'a> ShapeScope<'a> {
    pub fn begin(renderer: &'a mut dyn Renderer, color: Color) -> Self {
        renderer.begin_shape(color);
        Self { renderer }
    }

    /// Returns a drawing handle for one cell of this group.
    pub fn graphics(&mut self, transform: Transform) -> Graphics<'_> {
        Graphics::new(&mut *self.renderer, transform)
    }
}

impl Drop for ShapeScope<'_> {
    fn drop(&mut self) {
        self.renderer.end_shape();
    }
}

// ============================================================================
// Graphics
// ============================================================================

/// Cell-local drawing handle: a renderer plus the transform of one cell.
pub struct Graphics<'a> {
    renderer: &'a mut dyn Renderer,
    transform: Transform,
}

impl<'a> Graphics<'a> {
    pub fn new(renderer: &'a mut dyn Renderer, transform: Transform) -> Self {
        Self { renderer, transform }
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Adds a polygon given in cell-local coordinates. `invert` reverses the
    /// winding so the polygon cuts a hole.
    pub fn add_polygon(&mut self, points: &[(f32, f32)], invert: bool) {
        let transform = self.transform;
        let map = |&(x, y): &(f32, f32)| transform.transform_point(x, y, 0.0, 0.0);

        let transformed: Vec<Point> = if invert {
            points.iter().rev().map(map).collect()
        } else {
            points.iter().map(map).collect()
        };
        self.renderer.add_polygon(&transformed);
    }

    /// Adds a circle with its bounding box at cell-local `(x, y)`.
    pub fn add_circle(&mut self, x: f32, y: f32, diameter: f32, invert: bool) {
        let top_left = self.transform.transform_point(x, y, diameter, diameter);
        self.renderer.add_circle(top_left, diameter, invert);
    }

    pub fn add_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, invert: bool) {
        self.add_polygon(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)], invert);
    }

    /// Adds a right triangle filling half of the `w` x `h` box.
    ///
    /// `corner` picks which box corner is left out: 0 top-right, 1
    /// bottom-right, 2 bottom-left, 3 top-left (modulo 4).
    pub fn add_triangle(&mut self, x: f32, y: f32, w: f32, h: f32, corner: usize, invert: bool) {
        let mut points = vec![(x + w, y), (x + w, y + h), (x, y + h), (x, y)];
        points.remove(corner % 4);
        self.add_polygon(&points, invert);
    }

    /// Adds a rhombus touching the midpoints of the `w` x `h` box.
    pub fn add_rhombus(&mut self, x: f32, y: f32, w: f32, h: f32, invert: bool) {
        self.add_polygon(
            &[
                (x + w / 2.0, y),
                (x + w, y + h / 2.0),
                (x + w / 2.0, y + h),
                (x, y + h / 2.0),
            ],
            invert,
        );
    }
}

// ============================================================================
// Test Support
// ============================================================================
