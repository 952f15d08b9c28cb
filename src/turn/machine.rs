//! Turn state machine.
//!
//! Two states, strict alternation. Transitions are symmetric:
//! - the side that finishes ticks its statuses once
//! - the side that starts refreshes its action points and hands once
//!
//! The acting side is driven from outside (`select`, `play_card`,
//! `end_acting_turn`); the reacting side is driven by the AI
//! (`run_reacting_turn`), which hands control back when it is done.
//! Detecting the end of the encounter is left to the caller
//! (`Encounter::is_side_defeated`).

use super::state::{TurnState, TurnTransition};
use crate::ai::{AiDecisionEngine, CharacterTurn};
use crate::cards::Card;
use crate::collaborators::Collaborators;
use crate::core::{CharacterId, CombatConfig, CombatError, Encounter, Result, Side};
use crate::resolution::{CardResolver, ResolutionReport};

/// Everything the AI did on its turn, and the hand-back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactingTurn {
    pub turns: Vec<CharacterTurn>,
    pub transition: TurnTransition,
}

/// Owns the pipeline, the AI and the collaborators for one encounter.
///
/// ## Example
///
/// ```
/// use deck_battler::ai::AiDecisionEngine;
/// use deck_battler::character::Character;
/// use deck_battler::collaborators::Collaborators;
/// use deck_battler::core::{CombatConfig, Encounter, Side};
/// use deck_battler::resolution::CardResolver;
/// use deck_battler::turn::{TurnState, TurnStateMachine};
///
/// let config = CombatConfig::default().with_first_turn(TurnState::ActingSide);
/// let mut machine = TurnStateMachine::new(
///     &config,
///     CardResolver::from_config(&config),
///     AiDecisionEngine::from_config(&config),
///     Collaborators::detached(),
/// );
///
/// let mut encounter = Encounter::new();
/// encounter.add_character(Side::Acting, Character::new("Hero", 30, 3));
/// encounter.add_character(Side::Reacting, Character::new("Slime", 10, 1));
///
/// machine.begin(&mut encounter);
/// assert_eq!(machine.state(), TurnState::ActingSide);
///
/// machine.end_acting_turn(&mut encounter).unwrap();
/// assert_eq!(machine.state(), TurnState::ReactingSide);
///
/// machine.run_reacting_turn(&mut encounter).unwrap();
/// assert_eq!(machine.state(), TurnState::ActingSide);
/// assert_eq!(machine.turn_number(), 3);
/// ```
#[derive(Debug)]
pub struct TurnStateMachine {
    resolver: CardResolver,
    ai: AiDecisionEngine,
    collaborators: Collaborators,
    first_turn: TurnState,
    state: TurnState,
    turn_number: u32,
    selected: Option<CharacterId>,
}

impl TurnStateMachine {
    #[must_use]
    pub fn new(
        config: &CombatConfig,
        resolver: CardResolver,
        ai: AiDecisionEngine,
        collaborators: Collaborators,
    ) -> Self {
        Self {
            resolver,
            ai,
            collaborators,
            first_turn: config.first_turn,
            state: config.first_turn,
            turn_number: 0,
            selected: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Current turn (1 after `begin`, +1 per transition).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn selected(&self) -> Option<CharacterId> {
        self.selected
    }

    #[must_use]
    pub fn resolver(&self) -> &CardResolver {
        &self.resolver
    }

    #[must_use]
    pub fn ai(&self) -> &AiDecisionEngine {
        &self.ai
    }

    pub fn ai_mut(&mut self) -> &mut AiDecisionEngine {
        &mut self.ai
    }

    pub fn collaborators_mut(&mut self) -> &mut Collaborators {
        &mut self.collaborators
    }

    // === Lifecycle ===

    /// Start the encounter on the configured first side.
    pub fn begin(&mut self, encounter: &mut Encounter) {
        self.state = self.first_turn;
        self.turn_number = 1;
        self.selected = None;
        self.enter(encounter);
        tracing::info!("encounter begins: {}", self.state);
    }

    /// Mark an acting-side character as the one the player is controlling.
    pub fn select(&mut self, encounter: &Encounter, id: CharacterId) -> Result<()> {
        self.expect_state(TurnState::ActingSide)?;
        let character = encounter.require(id)?;
        if character.side() != Side::Acting {
            return Err(CombatError::NotOnSide {
                id,
                side: Side::Acting,
            });
        }
        if !character.is_alive() {
            return Err(CombatError::DefeatedActor(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Play a card for an acting-side character.
    pub fn play_card(
        &mut self,
        encounter: &mut Encounter,
        card: &Card,
        clicked: CharacterId,
        actor: CharacterId,
    ) -> Result<ResolutionReport> {
        self.expect_state(TurnState::ActingSide)?;
        if encounter.require(actor)?.side() != Side::Acting {
            return Err(CombatError::NotOnSide {
                id: actor,
                side: Side::Acting,
            });
        }

        let report = self.resolver.resolve(
            encounter,
            card,
            clicked,
            actor,
            self.turn_number,
            &mut self.collaborators,
        )?;

        if self.selected.is_some_and(|id| report.defeated.contains(&id)) {
            self.selected = None;
        }
        self.collaborators.presentation.present(&report);
        self.dispatch_events(encounter);
        Ok(report)
    }

    /// The acting side voluntarily ends its turn.
    pub fn end_acting_turn(&mut self, encounter: &mut Encounter) -> Result<TurnTransition> {
        self.expect_state(TurnState::ActingSide)?;
        self.selected = None;
        Ok(self.advance(encounter))
    }

    /// Let the AI act for every reacting-side character, then hand control back.
    pub fn run_reacting_turn(&mut self, encounter: &mut Encounter) -> Result<ReactingTurn> {
        self.expect_state(TurnState::ReactingSide)?;

        let turns = self.ai.take_turn(
            encounter,
            Side::Reacting,
            &self.resolver,
            &mut self.collaborators,
            self.turn_number,
        );
        for report in turns.iter().flat_map(|t| t.plays.iter()) {
            self.collaborators.presentation.present(report);
        }
        self.dispatch_events(encounter);

        let transition = self.advance(encounter);
        Ok(ReactingTurn { turns, transition })
    }

    // === Internals ===

    fn expect_state(&self, expected: TurnState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(CombatError::WrongTurn {
                expected,
                actual: self.state,
            })
        }
    }

    fn advance(&mut self, encounter: &mut Encounter) -> TurnTransition {
        let from = self.state;
        let leaving = from.side();

        let mut ticked = Vec::new();
        for id in encounter.live_ids(leaving) {
            if let Some(character) = encounter.character_mut(id) {
                ticked.push((id, self.resolver.status_catalog().tick(character)));
            }
        }
        let defeated = encounter.remove_defeated();

        self.state = from.next();
        self.turn_number += 1;
        self.enter(encounter);

        tracing::info!(
            "turn {}: {} → {} ({} ticked, {} defeated)",
            self.turn_number,
            from,
            self.state,
            ticked.len(),
            defeated.len()
        );

        TurnTransition {
            from,
            to: self.state,
            turn_number: self.turn_number,
            ticked,
            defeated,
        }
    }

    fn enter(&mut self, encounter: &mut Encounter) {
        let side = self.state.side();
        encounter.refresh_action_points(side);
        self.collaborators.deck.refresh_hand(side);
        self.collaborators.notify_turn(self.state, self.turn_number);
        self.dispatch_events(encounter);
    }

    fn dispatch_events(&mut self, encounter: &mut Encounter) {
        let events = encounter.drain_events();
        if !events.is_empty() {
            self.collaborators.notify(&events);
        }
    }
}
