//! Rule tables for life-like automata.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Cell value for a dead cell.
pub const DEAD: u8 = 0;
/// Cell value for a live cell.
pub const ALIVE: u8 = 1;

/// Number of possible alive-neighbor counts in a Moore neighborhood (0..=8).
pub const NEIGHBOR_STATES: usize = 9;

/// Lookup tables mapping alive-neighbor count to the next cell value.
///
/// `alive[n]` is consulted for a currently-alive cell with `n` alive
/// neighbors, `dead[n]` for a currently-dead one. Entries are the next
/// cell value itself: [`DEAD`] or [`ALIVE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Display name, e.g. for a rule-selection dropdown.
    #[serde(default)]
    pub name: String,
    /// Next state by neighbor count for currently-alive cells.
    pub alive: [u8; NEIGHBOR_STATES],
    /// Next state by neighbor count for currently-dead cells.
    pub dead: [u8; NEIGHBOR_STATES],
}

impl RuleTable {
    /// Create a validated rule table.
    pub fn new(
        name: impl Into<String>,
        alive: [u8; NEIGHBOR_STATES],
        dead: [u8; NEIGHBOR_STATES],
    ) -> Result<Self, ConfigError> {
        let table = Self {
            name: name.into(),
            alive,
            dead,
        };
        table.validate()?;
        Ok(table)
    }

    /// Build a table from birth/survival neighbor counts (B/S notation).
    ///
    /// A dead cell is born at any count in `births`; a live cell survives
    /// at any count in `survivals` and dies otherwise.
    pub fn from_birth_survival(
        name: impl Into<String>,
        births: &[usize],
        survivals: &[usize],
    ) -> Self {
        let mut alive = [DEAD; NEIGHBOR_STATES];
        let mut dead = [DEAD; NEIGHBOR_STATES];
        for &n in survivals {
            alive[n] = ALIVE;
        }
        for &n in births {
            dead[n] = ALIVE;
        }
        Self {
            name: name.into(),
            alive,
            dead,
        }
    }

    /// Conway's classic rules (B3/S23).
    pub fn conway() -> Self {
        Self::from_birth_survival("Conway", &[3], &[2, 3])
    }

    /// HighLife (B36/S23), known for its replicator pattern.
    pub fn high_life() -> Self {
        Self::from_birth_survival("HighLife", &[3, 6], &[2, 3])
    }

    /// Seeds (B2/S): every live cell dies each generation.
    pub fn seeds() -> Self {
        Self::from_birth_survival("Seeds", &[2], &[])
    }

    /// Day & Night (B3678/S34678), symmetric under state inversion.
    pub fn day_and_night() -> Self {
        Self::from_birth_survival("Day & Night", &[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    /// Check every entry is a valid cell value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (table, entries) in [("alive", &self.alive), ("dead", &self.dead)] {
            for (entry, &value) in entries.iter().enumerate() {
                if value > ALIVE {
                    return Err(ConfigError::InvalidRuleValue {
                        table,
                        entry,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_tables() {
        let rules = RuleTable::conway();

        assert_eq!(rules.alive, [0, 0, 1, 1, 0, 0, 0, 0, 0]);
        assert_eq!(rules.dead, [0, 0, 0, 1, 0, 0, 0, 0, 0]);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_seeds_kills_all_live_cells() {
        let rules = RuleTable::seeds();

        assert_eq!(rules.alive, [0; NEIGHBOR_STATES]);
        assert_eq!(rules.dead[2], ALIVE);
    }

    #[test]
    fn test_invalid_entry_rejected() {
        let mut alive = [DEAD; NEIGHBOR_STATES];
        alive[4] = 2;

        let err = RuleTable::new("bad", alive, [DEAD; NEIGHBOR_STATES]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRuleValue {
                table: "alive",
                entry: 4,
                value: 2,
            }
        ));
    }

    #[test]
    fn test_rule_json_roundtrip() {
        let rules = RuleTable::high_life();
        let json = serde_json::to_string(&rules).unwrap();
        let back: RuleTable = serde_json::from_str(&json).unwrap();

        assert_eq!(back, rules);
    }

    #[test]
    fn test_rule_json_without_name() {
        let rules: RuleTable = serde_json::from_str(
            r#"{"alive": [0, 0, 1, 1, 0, 0, 0, 0, 0], "dead": [0, 0, 0, 1, 0, 0, 0, 0, 0]}"#,
        )
        .unwrap();

        assert!(rules.name.is_empty());
        assert_eq!(rules.alive, RuleTable::conway().alive);
    }
}
