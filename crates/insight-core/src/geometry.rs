#![forbid(unsafe_code)]

//! Cell-space layout primitives.

/// A rectangle in cell coordinates (origin top-left, 0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by `horizontal` cells on the left and right and `vertical`
    /// cells on the top and bottom.
    pub fn inset(&self, horizontal: u16, vertical: u16) -> Rect {
        Rect {
            x: self.x.saturating_add(horizontal),
            y: self.y.saturating_add(vertical),
            width: self.width.saturating_sub(horizontal.saturating_mul(2)),
            height: self.height.saturating_sub(vertical.saturating_mul(2)),
        }
    }

    /// Split off the first `rows` rows. The second rect holds the remainder.
    pub fn split_top(&self, rows: u16) -> (Rect, Rect) {
        let rows = rows.min(self.height);
        (
            Rect::new(self.x, self.y, self.width, rows),
            Rect::new(self.x, self.y + rows, self.width, self.height - rows),
        )
    }

    /// Move the top edge down by `rows`, keeping the bottom edge fixed.
    ///
    /// Used to translate a surface that is clipped by its container.
    pub fn shifted_down(&self, rows: u16) -> Rect {
        let rows = rows.min(self.height);
        Rect::new(self.x, self.y + rows, self.width, self.height - rows)
    }

    /// A `width` × `height` rect centered horizontally at row `y`.
    pub fn centered_row(&self, y: u16, width: u16, height: u16) -> Rect {
        let width = width.min(self.width);
        let x = self.x + (self.width - width) / 2;
        Rect::new(x, y, width, height)
    }
}
