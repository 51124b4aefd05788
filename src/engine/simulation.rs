//! Simulation facade tying grid, rules, sequencing, and timing together.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::schema::{
    Boundary, ConfigError, EngineConfig, Pattern, RuleSequence, RuleTable, UpdateMask,
};

use super::clock::IntervalTimer;
use super::evaluator::evaluate;
use super::grid::Grid;
use super::sequence::{SequencePhase, SequenceRunner};
use super::stamper::{Alignment, stamp};

/// A complete, independently constructible simulation.
///
/// Owns the grid buffers exclusively; readers get owned snapshots or
/// short-lived borrowed views between steps, never a live alias, so
/// every evaluation starts from a fully settled generation. Many
/// simulations can coexist; there is no shared state between instances.
pub struct Simulation {
    grid: Grid,
    rules: RuleTable,
    boundary: Boundary,
    mask: UpdateMask,
    brush: Pattern,
    timer: IntervalTimer,
    runner: SequenceRunner,
    rng: StdRng,
    generation: u64,
    running: bool,
}

impl Simulation {
    /// Build a simulation from a validated configuration.
    ///
    /// Starts paused, on Conway's rules, with a single-cell brush.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::build(config, StdRng::from_entropy())
    }

    /// Same as [`Simulation::new`] with a seeded RNG, for reproducible
    /// randomize and sequence runs.
    pub fn with_rng_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: EngineConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.width, config.height)?,
            rules: RuleTable::conway(),
            boundary: config.boundary,
            mask: config.mask,
            brush: Pattern::dot(),
            timer: IntervalTimer::new(config.period)?,
            runner: SequenceRunner::new(),
            rng,
            generation: 0,
            running: false,
        })
    }

    // --- Configuration setters ---

    /// Reallocate the grid; pauses and restarts from generation 0.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), ConfigError> {
        self.grid.resize(width, height)?;
        self.running = false;
        self.generation = 0;
        self.timer.reset();
        Ok(())
    }

    /// Select the rule table used outside sequence runs.
    ///
    /// While a sequence is armed the sequence's step rules take
    /// precedence; this table becomes active again once it finishes.
    pub fn set_rule_table(&mut self, rules: RuleTable) -> Result<(), ConfigError> {
        rules.validate()?;
        self.rules = rules;
        Ok(())
    }

    /// Change the boundary policy.
    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.boundary = boundary;
    }

    /// Change which rule branches run.
    pub fn set_update_mask(&mut self, mask: UpdateMask) {
        self.mask = mask;
    }

    /// Change the clock period in seconds.
    pub fn set_period(&mut self, period: f32) -> Result<(), ConfigError> {
        self.timer.set_period(period)
    }

    /// Select the pattern stamped by [`Simulation::stamp_at`].
    pub fn set_brush(&mut self, brush: Pattern) {
        self.brush = brush;
    }

    // --- Grid operations ---

    /// Stamp the brush at a viewport-relative anchor (origin at the grid
    /// center), e.g. a pointer position already translated by the caller.
    pub fn stamp_at(&mut self, x: i32, y: i32) {
        stamp(&mut self.grid, x, y, &self.brush, Alignment::ViewportRelative);
    }

    /// Clear the grid and place a pattern centered on it.
    pub fn place_preset_centered(&mut self, pattern: &Pattern) {
        self.reset();
        let (cx, cy) = self.grid.center();
        stamp(
            &mut self.grid,
            cx as i32,
            cy as i32,
            pattern,
            Alignment::GridAbsolute,
        );
    }

    /// Pause and rewrite every cell: alive with probability `chance`.
    pub fn randomize(&mut self, chance: f32) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&chance) || !chance.is_finite() {
            return Err(ConfigError::InvalidChance(chance));
        }
        self.running = false;
        self.grid.randomize(chance, &mut self.rng);
        Ok(())
    }

    /// Pause, kill every cell, and return to generation 0.
    ///
    /// Also unloads any sequence; the grid is a blank slate afterwards.
    pub fn reset(&mut self) {
        self.running = false;
        self.runner.stop();
        self.grid.clear();
        self.generation = 0;
        self.timer.reset();
    }

    // --- Time control ---

    /// Let the clock drive steps while running.
    pub fn run(&mut self) {
        self.running = true;
    }

    /// Stop the clock from driving steps.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Pause, then advance exactly one generation.
    pub fn step(&mut self) {
        self.running = false;
        self.advance_generation();
    }

    /// Feed elapsed seconds to the clock; steps at most one generation.
    ///
    /// Does nothing while paused. Returns `true` if a generation ran.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        if !self.timer.advance(dt) {
            return false;
        }
        self.advance_generation();
        true
    }

    /// One generation: the armed sequence step if any, else the selected
    /// rule table.
    fn advance_generation(&mut self) {
        if self.runner.is_armed() {
            if self.runner.tick(&mut self.grid, self.mask, self.boundary) {
                self.generation += 1;
            }
            if self.runner.phase() == SequencePhase::Finished {
                // Sequence over: stop the clock; the selected rule table
                // takes effect again on the next generation.
                self.running = false;
                debug!("sequence finished at generation {}", self.generation);
            }
        } else {
            evaluate(&mut self.grid, &self.rules, self.mask, self.boundary);
            self.generation += 1;
        }
    }

    // --- Sequencing ---

    /// Validate and start a scripted sequence.
    ///
    /// Clears the grid, seeds it from the sequence's alive chance, and
    /// arms the first step at generation 0. The clock is left as-is;
    /// call [`Simulation::run`] to let it drive the sequence.
    pub fn start_sequence(&mut self, sequence: RuleSequence) -> Result<(), ConfigError> {
        sequence.validate()?;
        self.generation = 0;
        self.timer.reset();
        self.runner.start(sequence, &mut self.grid, &mut self.rng);
        Ok(())
    }

    /// Abandon the sequence; the grid keeps its current state.
    pub fn stop_sequence(&mut self) {
        self.runner.stop();
    }

    /// Phase of the scripted sequence, if any.
    pub fn sequence_phase(&self) -> SequencePhase {
        self.runner.phase()
    }

    // --- Read side ---

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Generations elapsed since the last reset or resize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the clock is driving steps.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The rule table selected outside sequence runs.
    pub fn rule_table(&self) -> &RuleTable {
        &self.rules
    }

    /// Read-only view of the cell buffer, row-major `y * width + x`.
    pub fn cells(&self) -> &[u8] {
        self.grid.cells()
    }

    /// Whether the cell at (x, y) is alive. Panics if out of range.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.grid.is_alive(x, y)
    }

    /// Coordinates of every live cell, row-major.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.grid.alive_cells()
    }

    /// Owned copy of the current state for a renderer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            generation: self.generation,
            cells: self.grid.cells().to_vec(),
        }
    }

    /// Aggregate statistics for monitoring.
    pub fn stats(&self) -> GridStats {
        let total_cells = self.grid.width() * self.grid.height();
        let alive_cells = self.grid.alive_count();
        GridStats {
            generation: self.generation,
            alive_cells,
            total_cells,
            density: alive_cells as f32 / total_cells as f32,
        }
    }
}

/// Immutable copy of the grid for rendering, decoupled from the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    /// Row-major `y * width + x` cell buffer.
    pub cells: Vec<u8>,
}

impl Snapshot {
    /// Whether the cell at (x, y) is alive. Panics if out of range.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) outside {}x{} snapshot",
            x,
            y,
            self.width,
            self.height
        );
        self.cells[y * self.width + x] == crate::schema::ALIVE
    }

    /// Enumerate every cell as (x, y, is_alive), row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &c)| (idx % width, idx / width, c == crate::schema::ALIVE))
    }
}

/// Simulation statistics for monitoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridStats {
    pub generation: u64,
    pub alive_cells: usize,
    pub total_cells: usize,
    pub density: f32,
}
