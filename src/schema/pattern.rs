//! Sparse cell patterns for brushes and presets.

use log::warn;
use serde::{Deserialize, Serialize};

/// A named set of alive cells, stored as integer offsets.
///
/// Offsets are relative to an arbitrary local origin; [`Pattern::center`]
/// computes the anchor point used when the pattern is placed on a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Display name, e.g. for a brush-selection dropdown.
    #[serde(default)]
    pub name: String,
    /// Alive cells as (dx, dy) offsets.
    pub cells: Vec<(i32, i32)>,
}

impl Pattern {
    /// Create a pattern from raw offsets.
    pub fn new(name: impl Into<String>, cells: Vec<(i32, i32)>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Center of the pattern's bounding box.
    ///
    /// The box always includes the origin, so a pattern drawn entirely in
    /// one quadrant still anchors near where it was drawn. Division floors
    /// toward negative infinity to keep negative extents consistent with
    /// positive ones. An empty pattern centers at (0, 0).
    pub fn center(&self) -> (i32, i32) {
        if self.cells.is_empty() {
            warn!("no cells found in pattern {:?}", self.name);
            return (0, 0);
        }

        let (mut min_x, mut min_y) = (0, 0);
        let (mut max_x, mut max_y) = (0, 0);
        for &(x, y) in &self.cells {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        ((min_x + max_x).div_euclid(2), (min_y + max_y).div_euclid(2))
    }

    /// A single cell, the default brush.
    pub fn dot() -> Self {
        Self::new("Dot", vec![(0, 0)])
    }

    /// Period-2 oscillator: three cells in a row.
    pub fn blinker() -> Self {
        Self::new("Blinker", vec![(-1, 0), (0, 0), (1, 0)])
    }

    /// Still life: a 2x2 square.
    pub fn block() -> Self {
        Self::new("Block", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Period-2 oscillator: two offset rows of three.
    pub fn toad() -> Self {
        Self::new(
            "Toad",
            vec![(-1, 0), (0, 0), (1, 0), (-2, 1), (-1, 1), (0, 1)],
        )
    }

    /// The classic diagonal glider.
    pub fn glider() -> Self {
        Self::new("Glider", vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
    }

    /// Lightweight spaceship, travels horizontally.
    pub fn lwss() -> Self {
        Self::new(
            "LWSS",
            vec![
                (0, 1),
                (0, 3),
                (1, 0),
                (2, 0),
                (3, 0),
                (3, 3),
                (4, 0),
                (4, 1),
                (4, 2),
            ],
        )
    }

    /// R-pentomino, a long-lived methuselah.
    pub fn r_pentomino() -> Self {
        Self::new("R-pentomino", vec![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)])
    }
}
