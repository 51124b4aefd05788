//! Moore-neighborhood counting under each boundary policy.

use crate::schema::{ALIVE, Boundary};

/// Count alive cells among the 8 Moore neighbors of (x, y).
///
/// `cells` is a flat `y * width + x` buffer. Out-of-range neighbors are
/// never dropped from the scan: under [`Boundary::Walls`] they resolve to
/// the wall state, under [`Boundary::Wrap`] each axis wraps independently
/// to the opposite edge.
pub fn alive_neighbors(
    cells: &[u8],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    boundary: Boundary,
) -> u8 {
    let w = width as i64;
    let h = height as i64;
    let mut count = 0;

    for dy in -1..=1i64 {
        for dx in -1..=1i64 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;

            match boundary {
                Boundary::Walls { alive } => {
                    if nx < 0 || ny < 0 || nx >= w || ny >= h {
                        if alive {
                            count += 1;
                        }
                    } else if cells[(ny * w + nx) as usize] == ALIVE {
                        count += 1;
                    }
                }
                Boundary::Wrap => {
                    let nx = nx.rem_euclid(w);
                    let ny = ny.rem_euclid(h);
                    if cells[(ny * w + nx) as usize] == ALIVE {
                        count += 1;
                    }
                }
            }
        }
    }

    count
}
