//! Icon generation pipeline.
//!
//! ```text
//! hash ──► hue ──► palette (style)
//!   │                 │
//!   └──► ShapeSelector ◄┘ ──► resolved shapes ──► renderer, cell by cell
//! ```

use crate::category::{CELL_COUNT, DEFAULT_CATEGORIES, ShapeCategory};
use crate::error::Result;
use crate::geometry::{RectPx, Transform, normalize_grid};
use crate::hash::get_hue;
use crate::render::{Renderer, ShapeScope};
use crate::selector::{ResolvedShape, ShapeSelector};
use crate::style::IconStyle;
use crate::theme::Palette;

/// Drives a [`Renderer`] through one icon per call.
///
/// The generator holds only a reference to its category table, so it is
/// cheap to copy and can be shared across threads; each call needs its own
/// renderer.
///
/// # Example
///
/// ```
/// use hashicon::{IconGenerator, IconStyle, PixmapRenderer, hash};
///
/// let generator = IconGenerator::default();
/// let mut renderer = PixmapRenderer::new(64, 64).unwrap();
///
/// generator
///     .render(&mut renderer, 64, &IconStyle::default(), &hash::digest("alice"))
///     .unwrap();
///
/// let image = renderer.into_image();
/// assert_eq!(image.dimensions(), (64, 64));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IconGenerator<'c, const N: usize> {
    selector: ShapeSelector<'c, N>,
}

impl Default for IconGenerator<'static, 3> {
    fn default() -> Self {
        Self::new(&DEFAULT_CATEGORIES)
    }
}

impl<'c, const N: usize> IconGenerator<'c, N> {
    /// Creates a generator for a custom category table.
    pub const fn new(categories: &'c [ShapeCategory<'c>; N]) -> Self {
        Self {
            selector: ShapeSelector::new(categories),
        }
    }

    pub fn selector(&self) -> &ShapeSelector<'c, N> {
        &self.selector
    }

    /// Resolves the shapes for `hash` without drawing anything.
    pub fn resolve(&self, style: &IconStyle, hash: &[u8]) -> Result<Vec<ResolvedShape<'c>>> {
        let palette = Palette::from_hue(get_hue(hash)?, style)?;
        Ok(self.selector.select(hash, &palette)?.collect())
    }

    /// Draws a `size` x `size` icon, leaving `style.padding` empty on each
    /// side of the shapes.
    pub fn render(&self, renderer: &mut dyn Renderer, size: u32, style: &IconStyle, hash: &[u8]) -> Result<()> {
        let padding = (size as f32 * style.padding).round() as u32;
        let rect = RectPx::from_size(size, size).inset(padding);
        self.generate(renderer, rect, style, hash)
    }

    /// Draws the icon for `hash` into `rect`.
    ///
    /// The background covers the whole surface; shapes are laid out on the
    /// largest cell-aligned square that fits in `rect`, centered. Each shape
    /// group is opened and closed on the renderer exactly once. Inputs are
    /// validated before anything is drawn.
    pub fn generate(
        &self,
        renderer: &mut dyn Renderer,
        rect: RectPx,
        style: &IconStyle,
        hash: &[u8],
    ) -> Result<()> {
        let hue = get_hue(hash)?;
        let palette = Palette::from_hue(hue, style)?;
        let shapes = self.selector.select(hash, &palette)?;

        renderer.set_background(style.back_color);

        let grid = normalize_grid(rect, CELL_COUNT);
        let cell_size = grid.cell_size as f32;
        tracing::debug!(
            hue,
            palette = palette.len(),
            x = grid.x,
            y = grid.y,
            cell_size = grid.cell_size,
            "generating icon"
        );

        for shape in shapes {
            let mut scope = ShapeScope::begin(&mut *renderer, shape.color);

            for (i, cell) in shape.positions.iter().enumerate() {
                let rotation = ((usize::from(shape.rotation) + i) % 4) as u8;
                let transform = Transform::new(grid.cell_origin(cell.x, cell.y), cell_size, rotation);
                (shape.shape)(&mut scope.graphics(transform), cell_size, i);
            }
        }

        Ok(())
    }
}
