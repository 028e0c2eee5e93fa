//! Colored terminal output via crossterm.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use gridwalk_core::{Grid, Point};

use crate::overlay::{Glyph, Overlay};

/// Maps a [`Glyph`] to the terminal color it is printed in.
fn glyph_color(g: Glyph) -> Color {
    match g {
        Glyph::Open => Color::DarkGrey,
        Glyph::Obstacle => Color::Grey,
        Glyph::Start => Color::Green,
        Glyph::Destination => Color::Red,
        Glyph::Path => Color::Cyan,
        Glyph::Arrow(_) | Glyph::Depth(_) => Color::Yellow,
    }
}

/// Print the grid with `overlay` to `w`, one colored glyph per cell.
///
/// Cells are padded the same way as [`draw_grid`](crate::draw_grid).
pub fn print_colored<W: Write>(w: &mut W, grid: &Grid, overlay: &Overlay<'_>) -> io::Result<()> {
    let glyphs: Vec<(Glyph, String)> = grid
        .range()
        .iter()
        .map(|p| {
            let g = overlay.glyph(grid, p);
            (g, g.text())
        })
        .collect();
    let width = glyphs
        .iter()
        .map(|(_, s)| s.chars().count())
        .max()
        .unwrap_or(1);

    let mut cells = glyphs.into_iter();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let Some((g, text)) = cells.next() else {
                break;
            };
            if width > 1 && x > 0 {
                queue!(w, Print(' '))?;
            }
            queue!(
                w,
                SetForegroundColor(glyph_color(g)),
                Print(format!("{text:>width$}"))
            )?;
            log::trace!("term: {} drawn as {g:?}", Point::new(x, y));
        }
        queue!(w, ResetColor, Print('\n'))?;
    }
    w.flush()
}
