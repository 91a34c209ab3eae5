//! In-memory raster backend built on tiny-skia (re-exported by resvg).
//!
//! Each shape group becomes one path filled with the non-zero rule when the
//! group closes, so inverted primitives inside a group punch holes. The
//! result is handed out as an [`image::RgbaImage`]; encoding it to a file
//! format is left to the caller.

use image::RgbaImage;
use resvg::tiny_skia::{self, FillRule, Paint, PathBuilder, Pixmap};

use super::Renderer;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Cubic Bézier handle length for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

struct OpenShape {
    color: Color,
    path: PathBuilder,
}

/// Renders icons into a tiny-skia [`Pixmap`].
///
/// Primitives added outside a `begin_shape`/`end_shape` pair are ignored.
pub struct PixmapRenderer {
    pixmap: Pixmap,
    open: Option<OpenShape>,
    anti_alias: bool,
}

impl PixmapRenderer {
    /// Creates a transparent `width` x `height` surface.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCanvasSize`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(Error::InvalidCanvasSize { width, height })?;
        Ok(Self {
            pixmap,
            open: None,
            anti_alias: true,
        })
    }

    /// Turns edge smoothing on or off for subsequent shapes.
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Reads back one pixel with straight (non-premultiplied) alpha.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::from_rgba(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Consumes the renderer and returns the pixels with straight alpha.
    pub fn into_image(self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            dst.0 = [c.red(), c.green(), c.blue(), c.alpha()];
        }
        image
    }
}

impl Renderer for PixmapRenderer {
    fn set_background(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r(), color.g(), color.b(), color.a()));
    }

    fn begin_shape(&mut self, color: Color) {
        self.open = Some(OpenShape {
            color,
            path: PathBuilder::new(),
        });
    }

    fn end_shape(&mut self) {
        let Some(shape) = self.open.take() else {
            return;
        };
        // Cells of zero size leave nothing to fill.
        let Some(path) = shape.path.finish() else {
            return;
        };

        let color = shape.color;
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r(), color.g(), color.b(), color.a());
        paint.anti_alias = self.anti_alias;

        tracing::trace!(color = %color, bounds = ?path.bounds(), "filling shape group");
        self.pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            tiny_skia::Transform::identity(),
            None,
        );
    }

    fn add_polygon(&mut self, points: &[Point]) {
        let Some(shape) = self.open.as_mut() else {
            return;
        };
        let [first, rest @ ..] = points else {
            return;
        };

        shape.path.move_to(first.x, first.y);
        for p in rest {
            shape.path.line_to(p.x, p.y);
        }
        shape.path.close();
    }

    fn add_circle(&mut self, top_left: Point, diameter: f32, counter_clockwise: bool) {
        let Some(shape) = self.open.as_mut() else {
            return;
        };

        let r = diameter / 2.0;
        let k = r * KAPPA;
        let (cx, cy) = (top_left.x + r, top_left.y + r);
        let path = &mut shape.path;

        path.move_to(cx + r, cy);
        if counter_clockwise {
            path.cubic_to(cx + r, cy - k, cx + k, cy - r, cx, cy - r);
            path.cubic_to(cx - k, cy - r, cx - r, cy - k, cx - r, cy);
            path.cubic_to(cx - r, cy + k, cx - k, cy + r, cx, cy + r);
            path.cubic_to(cx + k, cy + r, cx + r, cy + k, cx + r, cy);
        } else {
            path.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
            path.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
            path.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
            path.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
        }
        path.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Transform;
    use crate::render::ShapeScope;

    const RED: Color = Color::from_rgb(255, 0, 0);
    const BLUE: Color = Color::from_rgb(0, 0, 255);

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            PixmapRenderer::new(0, 10),
            Err(Error::InvalidCanvasSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn background_fills_everything() {
        let mut renderer = PixmapRenderer::new(8, 8).unwrap();
        renderer.set_background(BLUE);
        assert_eq!(renderer.pixel(0, 0), Some(BLUE));
        assert_eq!(renderer.pixel(7, 7), Some(BLUE));
        assert_eq!(renderer.pixel(8, 8), None);
    }

    #[test]
    fn inverted_rectangle_cuts_hole() {
        let mut renderer = PixmapRenderer::new(20, 20).unwrap().with_anti_alias(false);
        renderer.set_background(BLUE);
        {
            let mut scope = ShapeScope::begin(&mut renderer, RED);
            let mut g = scope.graphics(Transform::new(Point::new(0.0, 0.0), 20.0, 0));
            g.add_rectangle(0.0, 0.0, 20.0, 20.0, false);
            g.add_rectangle(5.0, 5.0, 10.0, 10.0, true);
        }
        assert_eq!(renderer.pixel(2, 2), Some(RED));
        assert_eq!(renderer.pixel(10, 10), Some(BLUE));
        assert_eq!(renderer.pixel(17, 17), Some(RED));
    }

    #[test]
    fn circle_fills_center_not_corner() {
        let mut renderer = PixmapRenderer::new(20, 20).unwrap().with_anti_alias(false);
        {
            let mut scope = ShapeScope::begin(&mut renderer, RED);
            scope
                .graphics(Transform::IDENTITY)
                .add_circle(0.0, 0.0, 20.0, false);
        }
        assert_eq!(renderer.pixel(10, 10), Some(RED));
        assert_eq!(renderer.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn primitives_outside_scope_are_ignored() {
        let mut renderer = PixmapRenderer::new(4, 4).unwrap();
        renderer.add_polygon(&[
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
        ]);
        renderer.end_shape();
        assert_eq!(renderer.pixel(3, 1), Some(Color::TRANSPARENT));
    }

    #[test]
    fn image_has_straight_alpha() {
        let mut renderer = PixmapRenderer::new(2, 2).unwrap();
        renderer.set_background(Color::from_rgba(200, 100, 50, 128));
        let image = renderer.into_image();
        let [r, g, b, a] = image.get_pixel(1, 1).0;
        assert_eq!(a, 128);
        assert!(r.abs_diff(200) <= 1 && g.abs_diff(100) <= 1 && b.abs_diff(50) <= 1);
    }
}
