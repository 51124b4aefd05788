//! Configuration types for the simulation engine.

use serde::{Deserialize, Serialize};

/// Default update period in seconds.
fn default_period() -> f32 {
    0.25
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Treatment of neighbors that fall outside the grid.
    #[serde(default)]
    pub boundary: Boundary,
    /// Which rule-table branches are consulted each generation.
    #[serde(default)]
    pub mask: UpdateMask,
    /// Seconds between generations while the simulation is running.
    #[serde(default = "default_period")]
    pub period: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            boundary: Boundary::default(),
            mask: UpdateMask::default(),
            period: default_period(),
        }
    }
}

impl EngineConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if !(self.period > 0.0 && self.period.is_finite()) {
            return Err(ConfigError::InvalidPeriod(self.period));
        }
        Ok(())
    }
}

/// Treatment of neighbor lookups past the edge of the grid.
///
/// An out-of-range neighbor is never dropped from the Moore scan; it is
/// resolved to a value according to this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Boundary {
    /// Each axis wraps independently to the opposite edge.
    Wrap,
    /// The grid ends at a wall; wall cells count as a fixed state.
    Walls {
        /// Whether wall cells count as alive.
        alive: bool,
    },
}

impl Default for Boundary {
    fn default() -> Self {
        Boundary::Walls { alive: false }
    }
}

/// Selects which rule-table branches run each generation.
///
/// A disabled branch does not freeze its cells: their next state is
/// forced to dead, matching the behavior visualizers built on this
/// engine already depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMask {
    /// Consult the alive table for currently-alive cells.
    pub update_alive: bool,
    /// Consult the dead table for currently-dead cells.
    pub update_dead: bool,
}

impl Default for UpdateMask {
    fn default() -> Self {
        Self {
            update_alive: true,
            update_dead: true,
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Update period must be positive and finite, got {0}")]
    InvalidPeriod(f32),
    #[error("Entry {entry} of the {table} table is {value}, expected 0 or 1")]
    InvalidRuleValue {
        table: &'static str,
        entry: usize,
        value: u8,
    },
    #[error("Alive chance must be within [0, 1], got {0}")]
    InvalidChance(f32),
    #[error("Sequence contains no steps")]
    EmptySequence,
    #[error("Sequence step {step} runs for {generations} generations, expected at least 1")]
    InvalidStepLength { step: usize, generations: u32 },
}
