#![forbid(unsafe_code)]

//! Cell grid a screen renders into.
//!
//! A [`Frame`] is rebuilt every render pass. Screens paint backgrounds and
//! text into it; the presenter then writes the whole grid to the terminal.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`.
//! 2. Writes outside the frame are clipped, never panics.
//! 3. A wide glyph occupies its cell plus a continuation cell, so column
//!    arithmetic in screens matches what the terminal shows.

use insight_core::geometry::Rect;
use insight_widgets::gradient::Rgb;
use unicode_width::UnicodeWidthChar;

pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const INK: Rgb = Rgb::new(20, 20, 30);
/// Frosted panel fill.
pub const GLASS: Rgb = Rgb::new(232, 232, 240);
pub const MUTED: Rgb = Rgb::new(190, 190, 205);
/// Placeholder text on a frosted fill.
pub const MUTED_INK: Rgb = Rgb::new(120, 120, 135);
pub const RECORDING: Rgb = Rgb::new(230, 40, 40);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// `None` marks the trailing half of a wide glyph.
    pub ch: Option<char>,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: Some(' '),
            fg: WHITE,
            bg: Rgb::default(),
            bold: false,
        }
    }
}

/// Foreground attributes for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Rgb,
    pub bold: bool,
}

impl TextStyle {
    #[must_use]
    pub const fn fg(fg: Rgb) -> Self {
        Self { fg, bold: false }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::fg(WHITE)
    }
}

#[derive(Debug, Clone)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Frame {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Reallocate for a new terminal size, clearing everything.
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    #[must_use]
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Set the background of every cell in `rect`, keeping glyphs.
    pub fn fill_bg(&mut self, rect: Rect, bg: Rgb) {
        let x_end = rect.right().min(self.width);
        let y_end = rect.bottom().min(self.height);
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                if let Some(i) = self.index(x, y) {
                    self.cells[i].bg = bg;
                }
            }
        }
    }

    /// Write `text` starting at `(x, y)`, clipped to `max_x`. Returns the
    /// column after the last glyph written.
    pub fn print_clipped(&mut self, x: u16, y: u16, text: &str, style: TextStyle, max_x: u16) -> u16 {
        let max_x = max_x.min(self.width);
        let mut col = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if col.saturating_add(w) > max_x {
                break;
            }
            if let Some(i) = self.index(col, y) {
                let cell = &mut self.cells[i];
                cell.ch = Some(ch);
                cell.fg = style.fg;
                cell.bold = style.bold;
            }
            for k in 1..w {
                if let Some(i) = self.index(col + k, y) {
                    self.cells[i].ch = None;
                }
            }
            col += w;
        }
        col
    }

    pub fn print(&mut self, x: u16, y: u16, text: &str, style: TextStyle) -> u16 {
        self.print_clipped(x, y, text, style, self.width)
    }

    /// Center `text` horizontally within `area` on row `y`. Returns the rect
    /// the text occupies.
    pub fn print_centered(&mut self, area: Rect, y: u16, text: &str, style: TextStyle) -> Rect {
        let w = display_width(text).min(area.width);
        let rect = area.centered_row(y, w, 1);
        self.print_clipped(rect.x, y, text, style, area.right());
        rect
    }

    /// Visible text of row `y`, trailing spaces trimmed.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = usize::from(y) * usize::from(self.width);
        let row = &self.cells[start..start + usize::from(self.width)];
        let text: String = row.iter().filter_map(|c| c.ch).collect();
        text.trim_end().to_string()
    }

    /// All rows joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width.max(1)))
    }
}

/// Terminal column width of `text`.
#[must_use]
pub fn display_width(text: &str) -> u16 {
    let w: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    u16::try_from(w).unwrap_or(u16::MAX)
}
