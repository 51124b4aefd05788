//! Scripted rule sequencing.

use log::debug;
use rand::Rng;

use crate::schema::{Boundary, RuleSequence, UpdateMask};

use super::evaluator::evaluate;
use super::grid::Grid;

/// Where a sequence run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePhase {
    /// No sequence loaded, or an explicit stop.
    Idle,
    /// Running `step` with `remaining` generations left on it.
    Armed { step: usize, remaining: u32 },
    /// Ran past the last step; ticks are no-ops until restarted.
    Finished,
}

/// Drives a [`RuleSequence`] over a grid, one generation per tick.
///
/// The sequence must be validated before it is started; step lengths of
/// zero are rejected there, so an armed runner always has work left.
#[derive(Debug, Clone, Default)]
pub struct SequenceRunner {
    sequence: Option<RuleSequence>,
    phase: SequencePhase,
}

impl Default for SequencePhase {
    fn default() -> Self {
        SequencePhase::Idle
    }
}

impl SequenceRunner {
    /// A runner with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> SequencePhase {
        self.phase
    }

    /// Whether a tick would produce a generation.
    pub fn is_armed(&self) -> bool {
        matches!(self.phase, SequencePhase::Armed { .. })
    }

    /// Load a sequence: clear and re-seed the grid, arm the first step.
    ///
    /// Starting from any phase cancels whatever run came before.
    pub fn start(&mut self, sequence: RuleSequence, grid: &mut Grid, rng: &mut impl Rng) {
        grid.clear();
        grid.randomize(sequence.alive_chance, rng);
        self.phase = SequencePhase::Armed {
            step: 0,
            remaining: sequence.steps[0].generations,
        };
        debug!(
            "sequence armed: {} steps, seeded at {:.0}%",
            sequence.steps.len(),
            sequence.alive_chance * 100.0
        );
        self.sequence = Some(sequence);
    }

    /// Abandon the sequence without touching the grid.
    pub fn stop(&mut self) {
        self.sequence = None;
        self.phase = SequencePhase::Idle;
    }

    /// Run one generation of the armed step's rule.
    ///
    /// Returns `true` if a generation was produced. When the armed step
    /// runs dry the runner advances to the next step, or to
    /// [`SequencePhase::Finished`] past the last one; from `Idle` or
    /// `Finished` a tick is a no-op returning `false`.
    pub fn tick(&mut self, grid: &mut Grid, mask: UpdateMask, boundary: Boundary) -> bool {
        let SequencePhase::Armed { step, remaining } = self.phase else {
            return false;
        };
        let Some(sequence) = self.sequence.as_ref() else {
            return false;
        };

        evaluate(grid, &sequence.steps[step].rule, mask, boundary);

        let remaining = remaining - 1;
        if remaining == 0 {
            let next = step + 1;
            if next < sequence.steps.len() {
                self.phase = SequencePhase::Armed {
                    step: next,
                    remaining: sequence.steps[next].generations,
                };
            } else {
                debug!("sequence finished after step {}", step);
                self.phase = SequencePhase::Finished;
            }
        } else {
            self.phase = SequencePhase::Armed { step, remaining };
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NEIGHBOR_STATES, RuleTable, SequenceStep, ALIVE, DEAD};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WALLS_DEAD: Boundary = Boundary::Walls { alive: false };

    /// Rule that kills every cell regardless of neighbors.
    fn clear_rule() -> RuleTable {
        RuleTable::new("clear", [DEAD; NEIGHBOR_STATES], [DEAD; NEIGHBOR_STATES]).unwrap()
    }

    /// Rule that fills every cell regardless of neighbors.
    fn fill_rule() -> RuleTable {
        RuleTable::new("fill", [ALIVE; NEIGHBOR_STATES], [ALIVE; NEIGHBOR_STATES]).unwrap()
    }

    fn sequence(steps: Vec<(RuleTable, u32)>) -> RuleSequence {
        RuleSequence {
            alive_chance: 0.5,
            steps: steps
                .into_iter()
                .map(|(rule, generations)| SequenceStep { rule, generations })
                .collect(),
        }
    }

    #[test]
    fn test_start_seeds_grid_and_arms_first_step() {
        let mut grid = Grid::new(16, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut runner = SequenceRunner::new();

        runner.start(sequence(vec![(clear_rule(), 2)]), &mut grid, &mut rng);

        assert_eq!(
            runner.phase(),
            SequencePhase::Armed {
                step: 0,
                remaining: 2
            }
        );
        assert!(grid.alive_count() > 0, "seeding should set some cells");
    }

    #[test]
    fn test_terminates_after_total_generation_count() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut runner = SequenceRunner::new();
        runner.start(
            sequence(vec![(clear_rule(), 2), (fill_rule(), 1)]),
            &mut grid,
            &mut rng,
        );

        assert!(runner.tick(&mut grid, UpdateMask::default(), WALLS_DEAD));
        assert!(runner.tick(&mut grid, UpdateMask::default(), WALLS_DEAD));
        assert_eq!(
            runner.phase(),
            SequencePhase::Armed {
                step: 1,
                remaining: 1
            }
        );

        assert!(runner.tick(&mut grid, UpdateMask::default(), WALLS_DEAD));
        assert_eq!(runner.phase(), SequencePhase::Finished);
    }

    #[test]
    fn test_finished_tick_is_a_no_op() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut runner = SequenceRunner::new();
        runner.start(sequence(vec![(fill_rule(), 1)]), &mut grid, &mut rng);

        assert!(runner.tick(&mut grid, UpdateMask::default(), WALLS_DEAD));
        let settled = grid.cells().to_vec();

        assert!(!runner.tick(&mut grid, UpdateMask::default(), WALLS_DEAD));
        assert_eq!(runner.phase(), SequencePhase::Finished);
        assert_eq!(grid.cells(), &settled[..], "no-op tick must not touch the grid");
    }

    #[test]
    fn test_idle_tick_is_a_no_op() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut runner = SequenceRunner::new();

        assert!(!runner.tick(&mut grid, UpdateMask::default(), WALLS_DEAD));
        assert_eq!(runner.phase(), SequencePhase::Idle);
    }

    #[test]
    fn test_step_rules_apply_in_order() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let mut runner = SequenceRunner::new();
        runner.start(
            sequence(vec![(clear_rule(), 1), (fill_rule(), 1)]),
            &mut grid,
            &mut rng,
        );

        runner.tick(&mut grid, UpdateMask::default(), WALLS_DEAD);
        assert_eq!(grid.alive_count(), 0, "first step clears the field");

        runner.tick(&mut grid, UpdateMask::default(), WALLS_DEAD);
        assert_eq!(grid.alive_count(), 64, "second step fills the field");
    }

    #[test]
    fn test_restart_cancels_and_reseeds() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut runner = SequenceRunner::new();
        runner.start(sequence(vec![(fill_rule(), 1)]), &mut grid, &mut rng);
        runner.tick(&mut grid, UpdateMask::default(), WALLS_DEAD);
        assert_eq!(runner.phase(), SequencePhase::Finished);

        runner.start(sequence(vec![(clear_rule(), 3)]), &mut grid, &mut rng);

        assert_eq!(
            runner.phase(),
            SequencePhase::Armed {
                step: 0,
                remaining: 3
            }
        );
        assert!(
            grid.alive_count() < 64,
            "restart must replace the filled grid with a fresh seed"
        );
    }

    #[test]
    fn test_stop_returns_to_idle_and_keeps_grid() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut runner = SequenceRunner::new();
        runner.start(sequence(vec![(clear_rule(), 4)]), &mut grid, &mut rng);
        let seeded = grid.cells().to_vec();

        runner.stop();

        assert_eq!(runner.phase(), SequencePhase::Idle);
        assert_eq!(grid.cells(), &seeded[..]);
        assert!(!runner.tick(&mut grid, UpdateMask::default(), WALLS_DEAD));
    }

    #[test]
    fn test_seeding_is_deterministic_per_rng_seed() {
        let mut grid_a = Grid::new(16, 16).unwrap();
        let mut grid_b = Grid::new(16, 16).unwrap();
        let mut runner = SequenceRunner::new();

        runner.start(
            sequence(vec![(clear_rule(), 1)]),
            &mut grid_a,
            &mut StdRng::seed_from_u64(42),
        );
        runner.start(
            sequence(vec![(clear_rule(), 1)]),
            &mut grid_b,
            &mut StdRng::seed_from_u64(42),
        );

        assert_eq!(grid_a.cells(), grid_b.cells());
    }
}
