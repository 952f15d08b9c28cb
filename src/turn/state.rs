//! Turn states and transition records.

use serde::{Deserialize, Serialize};

use crate::core::{CharacterId, Side};
use crate::statuses::TickOutcome;

/// Which side currently acts. Global to the encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    ActingSide,
    ReactingSide,
}

impl TurnState {
    /// The side whose turn this is.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            TurnState::ActingSide => Side::Acting,
            TurnState::ReactingSide => Side::Reacting,
        }
    }

    #[must_use]
    pub const fn of(side: Side) -> Self {
        match side {
            Side::Acting => TurnState::ActingSide,
            Side::Reacting => TurnState::ReactingSide,
        }
    }

    /// The state that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            TurnState::ActingSide => TurnState::ReactingSide,
            TurnState::ReactingSide => TurnState::ActingSide,
        }
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnState::ActingSide => write!(f, "acting side's turn"),
            TurnState::ReactingSide => write!(f, "reacting side's turn"),
        }
    }
}

/// What happened when control passed from one side to the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnTransition {
    pub from: TurnState,
    pub to: TurnState,
    /// Turn number after the transition.
    pub turn_number: u32,
    /// End-of-turn tick of every live member of the side that finished.
    pub ticked: Vec<(CharacterId, TickOutcome)>,
    /// Characters removed after ticking (poison deaths).
    pub defeated: Vec<CharacterId>,
}
