//! Scripted rule sequences.

use serde::{Deserialize, Serialize};

use super::{ConfigError, RuleTable};

/// One stage of a sequence: a rule and how many generations to run it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStep {
    /// Rule to run during this stage.
    pub rule: RuleTable,
    /// Number of generations to run the rule for.
    pub generations: u32,
}

/// An ordered list of rule steps run over a randomized starting field.
///
/// Useful for scripted terrain-style generation: seed the grid with
/// `alive_chance`, then let each step's rule shape it for a fixed number
/// of generations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSequence {
    /// Per-cell probability of starting alive.
    pub alive_chance: f32,
    /// Steps to run, in order.
    pub steps: Vec<SequenceStep>,
}

impl RuleSequence {
    /// Validate the seeding chance, step lengths, and every rule table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.alive_chance) || !self.alive_chance.is_finite() {
            return Err(ConfigError::InvalidChance(self.alive_chance));
        }
        if self.steps.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        for (step, entry) in self.steps.iter().enumerate() {
            if entry.generations == 0 {
                return Err(ConfigError::InvalidStepLength {
                    step,
                    generations: entry.generations,
                });
            }
            entry.rule.validate()?;
        }
        Ok(())
    }
}
