//! Collaborator contracts.
//!
//! These traits define the interface between the combat core and the
//! systems around it (hand/deck, power tracking, UI, presentation).
//! Collaborators observe and serve requests; none of them can reach into
//! character state.

use crate::cards::CardId;
use crate::character::CharacterEvent;
use crate::core::{CharacterId, Side};
use crate::resolution::ResolutionReport;
use crate::turn::TurnState;

/// Owner of hands, draw piles and discard piles.
pub trait DeckCollaborator {
    /// Draw up to `count` cards for `owner`. Returns the cards drawn.
    fn draw_cards(&mut self, owner: CharacterId, count: u32) -> Vec<CardId>;

    /// Move a played card to its owner's discard pile.
    fn discard(&mut self, owner: CharacterId, card: CardId);

    /// Remove a played card from its owner's deck for the rest of the encounter.
    fn exhaust(&mut self, owner: CharacterId, card: CardId);

    /// Refill the hands of a side that is about to act.
    fn refresh_hand(&mut self, _side: Side) {}
}

/// Tracker for lasting `PersistentPower` effects.
pub trait PowerTracker {
    fn record_power(&mut self, target: CharacterId, source: CardId, magnitude: i32);
}

/// Read-only listener for resource and turn changes (health bars, AP pips,
/// status icons).
pub trait ResourceObserver {
    fn on_character_event(&mut self, event: &CharacterEvent);

    fn on_turn_changed(&mut self, _state: TurnState, _turn_number: u32) {}
}

/// Receiver of resolution reports for animation and sound.
///
/// Called after the state change is complete; the core never waits on it.
pub trait PresentationSink {
    fn present(&mut self, report: &ResolutionReport);
}

/// Collaborator that ignores everything and draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Detached;

impl DeckCollaborator for Detached {
    fn draw_cards(&mut self, _owner: CharacterId, _count: u32) -> Vec<CardId> {
        Vec::new()
    }

    fn discard(&mut self, _owner: CharacterId, _card: CardId) {}

    fn exhaust(&mut self, _owner: CharacterId, _card: CardId) {}
}

impl PowerTracker for Detached {
    fn record_power(&mut self, _target: CharacterId, _source: CardId, _magnitude: i32) {}
}

impl PresentationSink for Detached {
    fn present(&mut self, _report: &ResolutionReport) {}
}
