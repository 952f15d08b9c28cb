//! Play history records.
//!
//! Every resolved card leaves a `PlayRecord` in the encounter. The most
//! recent record feeds `LastActionWasOfCardKind` conditions; the full log
//! is kept for replay and debugging.

use serde::{Deserialize, Serialize};

use super::entity::{CharacterId, Side};
use crate::cards::CardId;

/// One resolved card play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// The card that was played.
    pub card: CardId,

    /// Declared type of the card, compared by kind conditions.
    pub card_type: String,

    /// The character that played it.
    pub actor: CharacterId,

    /// Side of the actor at the time of play.
    pub side: Side,

    /// Turn number when the card was played (starts at 1).
    pub turn: u32,

    /// Sequence number within the encounter (for ordering).
    pub sequence: u32,
}

impl PlayRecord {
    /// Create a new play record.
    #[must_use]
    pub fn new(
        card: CardId,
        card_type: impl Into<String>,
        actor: CharacterId,
        side: Side,
        turn: u32,
        sequence: u32,
    ) -> Self {
        Self {
            card,
            card_type: card_type.into(),
            actor,
            side,
            turn,
            sequence,
        }
    }

    /// Whether the card's declared type matches `kind`, ignoring ASCII case.
    #[must_use]
    pub fn is_of_kind(&self, kind: &str) -> bool {
        self.card_type.eq_ignore_ascii_case(kind)
    }
}
