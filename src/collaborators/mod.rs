//! External collaborators of the combat core.
//!
//! The core owns combat state; everything else (hands and decks, power
//! bookkeeping, resource UI, VFX) is reached through the traits here and
//! bundled in a `Collaborators` value passed in at construction. There are
//! no ambient managers.

mod traits;

pub use traits::{DeckCollaborator, Detached, PowerTracker, PresentationSink, ResourceObserver};

use crate::character::CharacterEvent;
use crate::turn::TurnState;

/// Every collaborator the pipeline and turn machine talk to.
///
/// ## Example
///
/// ```
/// use deck_battler::collaborators::Collaborators;
///
/// let collaborators = Collaborators::detached();
/// assert_eq!(collaborators.observer_count(), 0);
/// ```
pub struct Collaborators {
    pub deck: Box<dyn DeckCollaborator>,
    pub powers: Box<dyn PowerTracker>,
    pub presentation: Box<dyn PresentationSink>,
    observers: Vec<Box<dyn ResourceObserver>>,
}

impl Collaborators {
    /// Collaborators that accept every request and do nothing.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            deck: Box::new(Detached),
            powers: Box::new(Detached),
            presentation: Box::new(Detached),
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_deck(mut self, deck: impl DeckCollaborator + 'static) -> Self {
        self.deck = Box::new(deck);
        self
    }

    #[must_use]
    pub fn with_powers(mut self, powers: impl PowerTracker + 'static) -> Self {
        self.powers = Box::new(powers);
        self
    }

    #[must_use]
    pub fn with_presentation(mut self, sink: impl PresentationSink + 'static) -> Self {
        self.presentation = Box::new(sink);
        self
    }

    /// Register a resource observer (builder pattern).
    #[must_use]
    pub fn with_observer(mut self, observer: impl ResourceObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn ResourceObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Forward change records to every observer, in order.
    pub fn notify(&mut self, events: &[CharacterEvent]) {
        for event in events {
            for observer in &mut self.observers {
                observer.on_character_event(event);
            }
        }
    }

    pub fn notify_turn(&mut self, state: TurnState, turn_number: u32) {
        for observer in &mut self.observers {
            observer.on_turn_changed(state, turn_number);
        }
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::detached()
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::CharacterId;

    #[derive(Clone, Default)]
    struct Log(Rc<RefCell<Vec<String>>>);

    impl ResourceObserver for Log {
        fn on_character_event(&mut self, event: &CharacterEvent) {
            self.0.borrow_mut().push(format!("event:{}", event.character()));
        }

        fn on_turn_changed(&mut self, state: TurnState, turn_number: u32) {
            self.0.borrow_mut().push(format!("turn:{:?}:{}", state, turn_number));
        }
    }

    #[test]
    fn test_notify_reaches_every_observer() {
        let first = Log::default();
        let second = Log::default();
        let mut collaborators = Collaborators::detached()
            .with_observer(first.clone())
            .with_observer(second.clone());

        let id = CharacterId::new(3);
        collaborators.notify(&[CharacterEvent::Defeated { id }]);
        collaborators.notify_turn(TurnState::ActingSide, 2);

        for log in [first, second] {
            assert_eq!(
                *log.0.borrow(),
                vec!["event:Character(3)".to_string(), "turn:ActingSide:2".to_string()]
            );
        }
    }

    #[test]
    fn test_detached_draws_nothing() {
        let mut collaborators = Collaborators::detached();
        assert!(collaborators.deck.draw_cards(CharacterId::new(0), 3).is_empty());
    }
}
