#![forbid(unsafe_code)]

//! Writes a [`Frame`] to a terminal writer.
//!
//! Every present repaints the full grid inside one synchronized update.
//! Style escapes are emitted only when the style changes between cells.

use std::io::{self, Write};

use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use insight_widgets::gradient::Rgb;

use crate::frame::{Cell, Frame};

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Paint `frame` and flush.
pub fn present<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    queue!(out, terminal::BeginSynchronizedUpdate, cursor::Hide)?;

    let mut last: Option<(Rgb, Rgb, bool)> = None;
    for (y, row) in frame.rows().enumerate() {
        queue!(out, cursor::MoveTo(0, y as u16))?;
        for cell in row {
            emit_cell(out, cell, &mut last)?;
        }
    }

    queue!(
        out,
        SetAttribute(Attribute::Reset),
        terminal::EndSynchronizedUpdate
    )?;
    out.flush()
}

fn emit_cell<W: Write>(out: &mut W, cell: &Cell, last: &mut Option<(Rgb, Rgb, bool)>) -> io::Result<()> {
    // Continuation cells were already covered by the wide glyph before them.
    let Some(ch) = cell.ch else {
        return Ok(());
    };

    let style = (cell.fg, cell.bg, cell.bold);
    if *last != Some(style) {
        let bold_changed = last.is_none_or(|(_, _, bold)| bold != cell.bold);
        if bold_changed {
            let attr = if cell.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            queue!(out, SetAttribute(attr))?;
        }
        queue!(out, SetForegroundColor(color(cell.fg)), SetBackgroundColor(color(cell.bg)))?;
        *last = Some(style);
    }
    queue!(out, Print(ch))
}
