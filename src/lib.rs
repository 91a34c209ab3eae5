//! hashicon: deterministic identicons from hashes
//!
//! This crate turns a hash (any byte string of at least six bytes) into a
//! small set of colored, rotated shapes on a 4x4 grid. The same hash always
//! yields the same icon, on every platform.
//!
//! # Example
//!
//! ```
//! use hashicon::{IconGenerator, IconStyle, PixmapRenderer, hash};
//!
//! let identity = hash::digest("jane@example.com");
//! let style = IconStyle::default();
//! let generator = IconGenerator::default();
//!
//! // Inspect what will be drawn
//! let shapes = generator.resolve(&style, &identity).unwrap();
//! assert_eq!(shapes.len(), 3);
//!
//! // Or draw it
//! let mut renderer = PixmapRenderer::new(128, 128).unwrap();
//! generator.render(&mut renderer, 128, &style, &identity).unwrap();
//! let image = renderer.into_image();
//! ```
//!
//! # Custom Backends
//!
//! Implement [`Renderer`] to draw somewhere else. Shapes arrive as
//! polygons and circles in icon coordinates, grouped by color:
//!
//! ```
//! use hashicon::{Color, IconGenerator, IconStyle, Point, RectPx, Renderer};
//!
//! #[derive(Default)]
//! struct CountingRenderer {
//!     groups: usize,
//!     primitives: usize,
//! }
//!
//! impl Renderer for CountingRenderer {
//!     fn set_background(&mut self, _color: Color) {}
//!     fn begin_shape(&mut self, _color: Color) {
//!         self.groups += 1;
//!     }
//!     fn end_shape(&mut self) {}
//!     fn add_polygon(&mut self, _points: &[Point]) {
//!         self.primitives += 1;
//!     }
//!     fn add_circle(&mut self, _top_left: Point, _diameter: f32, _ccw: bool) {
//!         self.primitives += 1;
//!     }
//! }
//!
//! let mut renderer = CountingRenderer::default();
//! IconGenerator::default()
//!     .generate(&mut renderer, RectPx::from_size(64, 64), &IconStyle::default(), &[7u8; 16])
//!     .unwrap();
//! assert_eq!(renderer.groups, 3);
//! ```

pub mod category;
mod color;
mod error;
mod generator;
mod geometry;
pub mod hash;
mod render;
pub mod selector;
pub mod shapes;
mod style;
mod theme;

pub use category::{CELL_COUNT, CellPos, DEFAULT_CATEGORIES, ShapeCategory};
pub use color::Color;
pub use error::{Error, Result};
pub use generator::IconGenerator;
pub use geometry::{Grid, Point, RectPx, Transform, normalize_grid};
pub use render::{Graphics, PixmapRenderer, Renderer, ShapeScope};
pub use selector::{ResolvedShape, Selection, ShapeSelector};
pub use shapes::ShapeFn;
pub use style::{IconStyle, LightnessRange};
pub use theme::{Palette, slot};
