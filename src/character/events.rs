//! Change records raised by character mutations.
//!
//! Characters append these to an outbox instead of invoking subscribers.
//! The encounter drains the outbox and the turn machine forwards the records
//! to registered observers, so a destroyed listener can never be called.

use serde::{Deserialize, Serialize};

use super::attributes::AttributeKind;
use crate::core::CharacterId;
use crate::statuses::StatusKind;

/// A single observable change to one character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterEvent {
    HealthChanged {
        id: CharacterId,
        previous: i32,
        current: i32,
    },
    /// Health reached zero. Raised exactly once per character.
    Defeated { id: CharacterId },
    ActionPointsChanged {
        id: CharacterId,
        previous: u32,
        current: u32,
    },
    MaxActionPointsChanged {
        id: CharacterId,
        previous: u32,
        current: u32,
    },
    EnergyChanged {
        id: CharacterId,
        previous: u32,
        current: u32,
    },
    BlockChanged {
        id: CharacterId,
        previous: i32,
        current: i32,
    },
    AttributeChanged {
        id: CharacterId,
        attribute: AttributeKind,
        previous: i32,
        current: i32,
    },
    StatusApplied {
        id: CharacterId,
        kind: StatusKind,
        remaining: u32,
    },
    StatusRemoved { id: CharacterId, kind: StatusKind },
}

impl CharacterEvent {
    /// The character this event concerns.
    #[must_use]
    pub fn character(&self) -> CharacterId {
        match self {
            CharacterEvent::HealthChanged { id, .. }
            | CharacterEvent::Defeated { id }
            | CharacterEvent::ActionPointsChanged { id, .. }
            | CharacterEvent::MaxActionPointsChanged { id, .. }
            | CharacterEvent::EnergyChanged { id, .. }
            | CharacterEvent::BlockChanged { id, .. }
            | CharacterEvent::AttributeChanged { id, .. }
            | CharacterEvent::StatusApplied { id, .. }
            | CharacterEvent::StatusRemoved { id, .. } => *id,
        }
    }
}
