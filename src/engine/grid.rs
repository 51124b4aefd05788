//! Double-buffered cell grid.

use log::debug;
use rand::Rng;

use crate::schema::{ALIVE, ConfigError, DEAD};

/// Double-buffered byte grid.
///
/// Cells live in a flat vector indexed `y * width + x`, with [`DEAD`] and
/// [`ALIVE`] as the only values. The scratch buffer always matches the
/// front buffer's dimensions; its contents are undefined between
/// evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    scratch: Vec<u8>,
    width: usize,
    height: usize,
    center: (usize, usize),
}

impl Grid {
    /// Allocate a zeroed grid.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        Ok(Self {
            cells: vec![DEAD; width * height],
            scratch: vec![DEAD; width * height],
            width,
            height,
            center: (width / 2, height / 2),
        })
    }

    /// Reallocate both buffers to new dimensions, all cells dead.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        debug!("resizing grid {}x{} -> {}x{}", self.width, self.height, width, height);
        self.cells = vec![DEAD; width * height];
        self.scratch = vec![DEAD; width * height];
        self.width = width;
        self.height = height;
        self.center = (width / 2, height / 2);
        Ok(())
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Center cell, `(width / 2, height / 2)`.
    #[inline]
    pub fn center(&self) -> (usize, usize) {
        self.center
    }

    /// Convert (x, y) coordinates to a flat index.
    ///
    /// # Panics
    /// Panics when the coordinate is outside the grid. Direct cell access
    /// is a programmer contract; only stamping clips silently.
    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Value at (x, y). Panics if out of range.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[self.index(x, y)]
    }

    /// Whether the cell at (x, y) is alive. Panics if out of range.
    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == ALIVE
    }

    /// Set the value at (x, y). Panics if out of range.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// Kill every cell in the front buffer.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    /// Rewrite every cell: alive with probability `chance`, dead otherwise.
    ///
    /// `chance` must already be validated to [0, 1].
    pub fn randomize(&mut self, chance: f32, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            *cell = if rng.gen_bool(chance as f64) { ALIVE } else { DEAD };
        }
    }

    /// Number of live cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ALIVE).count()
    }

    /// Read-only view of the front buffer.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Coordinates of every live cell, row-major.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == ALIVE)
            .map(move |(idx, _)| (idx % width, idx / width))
    }

    /// Front buffer read-only plus scratch buffer writable, for a full
    /// re-evaluation pass.
    #[inline]
    pub(crate) fn buffers_mut(&mut self) -> (&[u8], &mut [u8]) {
        (&self.cells, &mut self.scratch)
    }

    /// Exchange front and scratch buffers in O(1).
    #[inline]
    pub(crate) fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }
}
