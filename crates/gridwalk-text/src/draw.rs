use gridwalk_core::{Grid, Point};

use crate::overlay::Overlay;

/// The text of cell `p`.
pub fn draw_cell(grid: &Grid, p: Point, overlay: &Overlay<'_>) -> String {
    overlay.glyph(grid, p).text()
}

/// Draw every in-bounds cell, one line per row, each line ending in `'\n'`.
///
/// When any cell needs more than one character (depth numbers of 10 or
/// more), all cells are right-aligned to the widest one and separated by a
/// space.
pub fn draw_grid(grid: &Grid, overlay: &Overlay<'_>) -> String {
    let rows: Vec<Vec<String>> = (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| draw_cell(grid, Point::new(x, y), overlay))
                .collect()
        })
        .collect();

    let width = rows
        .iter()
        .flatten()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(1);
    let sep = if width > 1 { " " } else { "" };

    let mut out = String::new();
    for row in rows {
        let cells: Vec<String> = row.iter().map(|s| format!("{s:>width$}")).collect();
        out.push_str(&cells.join(sep));
        out.push('\n');
    }
    out
}
