//! Maps a hash and a palette to resolved shapes.
//!
//! For each category, in table order, the selector reads a palette index,
//! a shape variant and a starting rotation out of the hash. One rule couples
//! the categories: two low-contrast pairs of palette slots may not both be
//! used in the same icon.
//!
//! - dark gray (0) with dark color (4)
//! - light gray (2) with light color (3)
//!
//! A category that would complete such a pair falls back to the mid color
//! (1) instead.

use crate::category::{CellPos, ShapeCategory, required_hash_len};
use crate::color::Color;
use crate::error::{Error, Result};
use crate::hash::nibble;
use crate::shapes::ShapeFn;
use crate::theme::{Palette, slot};

/// Palette slot pairs that must not appear together.
const CONFLICTING_SLOTS: [(usize, usize); 2] = [
    (slot::DARK_GRAY, slot::DARK_COLOR),
    (slot::LIGHT_GRAY, slot::LIGHT_COLOR),
];

/// Slot used when the chosen one would conflict.
const FALLBACK_SLOT: usize = slot::MID_COLOR;

/// One category with everything needed to draw it.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedShape<'c> {
    pub shape: ShapeFn,
    pub color: Color,
    /// Palette slot `color` was taken from, after the collision rule.
    pub palette_index: usize,
    pub positions: &'c [CellPos],
    /// Starting quarter-turn rotation in `0..=3`.
    pub rotation: u8,
}

/// Resolves shapes for an injected category table of `N` entries.
#[derive(Debug, Clone, Copy)]
pub struct ShapeSelector<'c, const N: usize> {
    categories: &'c [ShapeCategory<'c>; N],
}

impl<'c, const N: usize> ShapeSelector<'c, N> {
    pub const fn new(categories: &'c [ShapeCategory<'c>; N]) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &'c [ShapeCategory<'c>; N] {
        self.categories
    }

    /// Minimum hash length in bytes accepted by [`select`](Self::select).
    pub fn required_hash_len(&self) -> usize {
        required_hash_len(self.categories)
    }

    /// Returns a lazy iterator over exactly `N` resolved shapes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCategory`] if a category has no shape variants, and
    /// [`Error::HashTooShort`] if `hash` does not cover every octet the
    /// table reads. The checks happen here, once, so iteration itself cannot
    /// fail.
    pub fn select<'a>(&self, hash: &'a [u8], palette: &'a Palette) -> Result<Selection<'a, 'c, N>> {
        if let Some(index) = self.categories.iter().position(|c| c.shapes.is_empty()) {
            return Err(Error::InvalidCategory(format!(
                "category {index} has no shape variants"
            )));
        }

        let required = self.required_hash_len();
        if hash.len() < required {
            return Err(Error::HashTooShort {
                required,
                actual: hash.len(),
            });
        }

        Ok(Selection {
            categories: self.categories,
            hash,
            palette,
            chosen: [0; N],
            next: 0,
        })
    }
}

/// Iterator returned by [`ShapeSelector::select`].
pub struct Selection<'a, 'c, const N: usize> {
    categories: &'c [ShapeCategory<'c>; N],
    hash: &'a [u8],
    palette: &'a Palette,
    /// Final palette slots of the categories resolved so far, by position.
    chosen: [usize; N],
    next: usize,
}

impl<'c, const N: usize> Selection<'_, 'c, N> {
    fn conflicts(&self, index: usize) -> bool {
        let earlier = &self.chosen[..self.next];
        CONFLICTING_SLOTS.iter().any(|&(a, b)| {
            (index == a && earlier.contains(&b)) || (index == b && earlier.contains(&a))
        })
    }
}

impl<'c, const N: usize> Iterator for Selection<'_, 'c, N> {
    type Item = ResolvedShape<'c>;

    fn next(&mut self) -> Option<Self::Item> {
        let categories = self.categories;
        let category = categories.get(self.next)?;

        let raw_index = usize::from(nibble(self.hash, category.color_index)) % self.palette.len();
        let collided = self.conflicts(raw_index);
        let palette_index = if collided { FALLBACK_SLOT } else { raw_index };

        self.chosen[self.next] = palette_index;
        self.next += 1;

        let variant = usize::from(nibble(self.hash, category.shape_index)) % category.shapes.len();
        let rotation = category
            .rotation_index
            .map_or(0, |index| nibble(self.hash, index) % 4);

        tracing::debug!(
            category = self.next - 1,
            raw_index,
            palette_index,
            collided,
            variant,
            rotation,
            "resolved shape"
        );

        Some(ResolvedShape {
            shape: category.shapes[variant],
            color: self.palette[palette_index],
            palette_index,
            positions: category.positions,
            rotation,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = N - self.next;
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Selection<'_, '_, N> {}
