//! Encounter configuration.
//!
//! Callers configure the combat core at encounter setup by providing a
//! `CombatConfig`:
//! - `first_turn`: which side acts first (deterministic, never random)
//! - `seed`: seed for the single AI random source
//! - `damage`: percentage modifiers applied at damage-dealing time
//! - `ai`: thresholds and content-driven rules for the decision engine
//!
//! Everything is serde-serializable so content pipelines can ship tuning as
//! data alongside card definitions.

use serde::{Deserialize, Serialize};

use crate::ai::AiConfig;
use crate::turn::TurnState;

/// Percentage modifiers for damage dealt by or to afflicted characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageTuning {
    /// Outgoing damage multiplier (percent) while the source is Weak.
    pub weak_percent: u32,
    /// Incoming damage multiplier (percent) while the target is Vulnerable.
    pub vulnerable_percent: u32,
}

impl Default for DamageTuning {
    fn default() -> Self {
        Self {
            weak_percent: 75,
            vulnerable_percent: 150,
        }
    }
}

/// Complete combat configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Side that acts when the encounter begins.
    pub first_turn: TurnState,

    /// Seed for the AI random source.
    pub seed: u64,

    /// Damage modifiers.
    #[serde(default)]
    pub damage: DamageTuning,

    /// Decision engine tuning.
    #[serde(default)]
    pub ai: AiConfig,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            first_turn: TurnState::ReactingSide,
            seed: 42,
            damage: DamageTuning::default(),
            ai: AiConfig::default(),
        }
    }
}

impl CombatConfig {
    /// Set the side that acts first.
    #[must_use]
    pub fn with_first_turn(mut self, state: TurnState) -> Self {
        self.first_turn = state;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the damage modifiers.
    #[must_use]
    pub fn with_damage(mut self, damage: DamageTuning) -> Self {
        self.damage = damage;
        self
    }

    /// Replace the AI tuning.
    #[must_use]
    pub fn with_ai(mut self, ai: AiConfig) -> Self {
        self.ai = ai;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CombatConfig::default();
        assert_eq!(config.first_turn, TurnState::ReactingSide);
        assert_eq!(config.seed, 42);
        assert_eq!(config.damage.weak_percent, 75);
        assert_eq!(config.damage.vulnerable_percent, 150);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CombatConfig::default()
            .with_first_turn(TurnState::ActingSide)
            .with_seed(7);

        assert_eq!(config.first_turn, TurnState::ActingSide);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "first_turn": "ActingSide", "seed": 3 }"#;
        let config: CombatConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.first_turn, TurnState::ActingSide);
        assert_eq!(config.seed, 3);
        assert_eq!(config.damage, DamageTuning::default());
        assert_eq!(config.ai.synergy_window, 3);
    }
}
