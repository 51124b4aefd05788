//! Additive pattern placement.

use crate::schema::{ALIVE, Pattern};

use super::grid::Grid;

/// How a stamp anchor maps onto grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Anchor is in viewport-style coordinates with the origin at the
    /// grid center; half the grid size is added before placement. Used
    /// for pointer-driven stamping.
    ViewportRelative,
    /// Anchor is a raw grid coordinate. Used for centered presets.
    GridAbsolute,
}

/// Stamp a pattern onto the grid with its center at the anchor.
///
/// Placement is additive: targets inside the grid are set alive, targets
/// outside are silently skipped, and no cell is ever cleared.
pub fn stamp(grid: &mut Grid, x: i32, y: i32, pattern: &Pattern, alignment: Alignment) {
    let (center_x, center_y) = pattern.center();
    let (anchor_x, anchor_y) = match alignment {
        Alignment::ViewportRelative => (
            x + (grid.width() / 2) as i32,
            y + (grid.height() / 2) as i32,
        ),
        Alignment::GridAbsolute => (x, y),
    };

    for &(dx, dy) in &pattern.cells {
        let tx = anchor_x + dx - center_x;
        let ty = anchor_y + dy - center_y;
        if tx < 0 || ty < 0 || tx >= grid.width() as i32 || ty >= grid.height() as i32 {
            continue;
        }
        grid.set(tx as usize, ty as usize, ALIVE);
    }
}
