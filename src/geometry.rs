//! Drawing surface abstraction and bar layout math.

use palette::Srgb;

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Creates a rectangle from its edges.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Trait for abstracting the 2D surface bars are painted onto.
///
/// Implement this for your display or graphics backend. Colors are `Srgb<f32>`
/// in the 0.0-1.0 range; convert to the native format inside the implementation.
pub trait Canvas {
    /// Surface size in pixels as `(width, height)`.
    fn size(&self) -> (f32, f32);

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Srgb);

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Srgb);
}

/// Row geometry for a stack of `nodes` bars on a surface of a given width.
///
/// Sizes are not validated; a zero-sized surface yields degenerate rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    width: f32,
    gap: f32,
}

impl Layout {
    /// Computes the layout for `nodes` rows across `width` pixels.
    pub fn new(width: f32, nodes: usize) -> Self {
        Self {
            width,
            gap: width / (nodes as f32 + 1.0),
        }
    }

    /// Spacing between rows, also the length of each segment.
    #[inline]
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Thickness of a segment.
    #[inline]
    pub fn bar_height(&self) -> f32 {
        self.gap / 3.0
    }

    /// Vertical center of row `index`.
    #[inline]
    pub fn row_center(&self, index: usize) -> f32 {
        self.gap + index as f32 * self.gap
    }

    /// Both segments of row `index` at `scale`.
    ///
    /// The first segment covers the lower half of the scale range and the
    /// second the upper half: each moves from its screen edge to the center.
    pub fn segments(&self, index: usize, scale: f32) -> [Rect; 2] {
        [self.segment(index, scale, 0), self.segment(index, scale, 1)]
    }

    fn segment(&self, index: usize, scale: f32, j: usize) -> Rect {
        let jf = j as f32;
        let sf = 1.0 - 2.0 * jf;
        let sc = (scale - 0.5 * jf).clamp(0.0, 0.5) * 2.0;
        let half_w = self.width / 2.0;
        let left = half_w - (half_w - self.gap) * sf * (1.0 - sc) - self.gap + jf * self.gap;
        let cy = self.row_center(index);
        let half_h = self.bar_height() / 2.0;
        Rect::new(left, cy - half_h, left + self.gap, cy + half_h)
    }
}
