//! Gridlife - Table-driven generalized Game of Life.
//!
//! This crate implements the deterministic core of a configurable 2D
//! cellular automaton: rule tables indexed by alive-neighbor count,
//! toroidal or walled boundaries, additive pattern stamping, scripted
//! rule sequencing, and fixed-interval step timing. Rendering and input
//! are left to the embedding visualizer, which feeds pre-parsed
//! configuration in and reads immutable snapshots back out.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types (rules, patterns, sequences, engine
//!   settings) loaded from the host or from JSON
//! - `engine`: The grid-transition core and the [`Simulation`] facade
//!
//! # Example
//!
//! ```rust
//! use gridlife::{
//!     engine::Simulation,
//!     schema::{ConfigError, EngineConfig, Pattern, RuleTable},
//! };
//!
//! fn main() -> Result<(), ConfigError> {
//!     let mut sim = Simulation::new(EngineConfig::default())?;
//!     sim.set_rule_table(RuleTable::conway())?;
//!     sim.place_preset_centered(&Pattern::glider());
//!
//!     for _ in 0..10 {
//!         sim.step();
//!     }
//!
//!     println!("alive after 10 generations: {}", sim.stats().alive_cells);
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use engine::{Alignment, Grid, GridStats, SequencePhase, Simulation, Snapshot};
pub use schema::{
    Boundary, ConfigError, EngineConfig, Pattern, RuleSequence, RuleTable, SequenceStep,
    UpdateMask,
};
