//! Combatant identification and side membership.
//!
//! Every character in an encounter has a unique `CharacterId`, allocated by
//! the `Encounter` in roster order. Characters belong to one of two
//! symmetric `Side`s.
//!
//! ## Usage
//!
//! ```
//! use deck_battler::core::{CharacterId, Side};
//!
//! let hero = CharacterId::new(0);
//! assert_eq!(hero.raw(), 0);
//!
//! assert_eq!(Side::Acting.opponent(), Side::Reacting);
//! assert_eq!(Side::Reacting.opponent(), Side::Acting);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a character in an encounter.
///
/// IDs are never reused within an encounter, so a removed character's ID
/// can never resolve to a different combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// Create a character ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CharacterId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character({})", self.0)
    }
}

/// One of the two turn-alternating factions of an encounter.
///
/// The acting side is usually the player-controlled one and the reacting
/// side is driven by the AI, but nothing in the core depends on that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The side whose members are chosen by an external controller.
    Acting,
    /// The side whose members are driven by the AI decision engine.
    Reacting,
}

impl Side {
    /// The side opposing this one.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Acting => Side::Reacting,
            Side::Reacting => Side::Acting,
        }
    }

    /// Both sides, acting side first.
    pub fn both() -> impl Iterator<Item = Side> {
        [Side::Acting, Side::Reacting].into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Acting => write!(f, "acting side"),
            Side::Reacting => write!(f, "reacting side"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_id() {
        let id = CharacterId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(CharacterId::from(7), id);
        assert_eq!(format!("{}", id), "Character(7)");
    }

    #[test]
    fn test_opponent_is_involution() {
        for side in Side::both() {
            assert_ne!(side.opponent(), side);
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn test_side_serialization() {
        let json = serde_json::to_string(&Side::Reacting).unwrap();
        let side: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(side, Side::Reacting);
    }
}
