//! One-generation rule application.

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::schema::{ALIVE, Boundary, DEAD, RuleTable, UpdateMask};

use super::grid::Grid;
use super::neighbors::alive_neighbors;

/// Next value for a single cell.
///
/// A masked-off branch yields dead, not the current value: disabling a
/// branch clears cells of that state rather than freezing them.
#[inline]
pub fn next_cell(current: u8, neighbors: u8, rules: &RuleTable, mask: UpdateMask) -> u8 {
    if current == ALIVE {
        if mask.update_alive {
            rules.alive[neighbors as usize]
        } else {
            DEAD
        }
    } else if mask.update_dead {
        rules.dead[neighbors as usize]
    } else {
        DEAD
    }
}

/// Apply `rules` to every cell and swap buffers.
///
/// The next generation is computed into the scratch buffer from the
/// settled front buffer, then the buffers exchange roles, so the result
/// fully replaces the grid with no partial commits. Rows are processed in
/// parallel on native targets; the result is identical to the sequential
/// pass.
pub fn evaluate(grid: &mut Grid, rules: &RuleTable, mask: UpdateMask, boundary: Boundary) {
    let width = grid.width();
    let height = grid.height();

    {
        let (cells, scratch) = grid.buffers_mut();

        #[cfg(not(target_arch = "wasm32"))]
        scratch
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, out) in row.iter_mut().enumerate() {
                    let n = alive_neighbors(cells, width, height, x, y, boundary);
                    *out = next_cell(cells[y * width + x], n, rules, mask);
                }
            });

        #[cfg(target_arch = "wasm32")]
        for (y, row) in scratch.chunks_mut(width).enumerate() {
            for (x, out) in row.iter_mut().enumerate() {
                let n = alive_neighbors(cells, width, height, x, y, boundary);
                *out = next_cell(cells[y * width + x], n, rules, mask);
            }
        }
    }

    grid.swap_buffers();
}
