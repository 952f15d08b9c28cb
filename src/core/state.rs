//! Encounter state: the live roster and play history.
//!
//! ## Encounter
//!
//! An `Encounter` owns every character in combat, partitioned into the
//! acting and reacting side. It also keeps:
//! - the most recently played card (for kind conditions)
//! - the full play log (persistent `im::Vector`, cheap to snapshot)
//! - change records drained from characters that have since been removed
//!
//! Roster order is insertion order and never changes, so "earliest roster
//! order" tie-breaks are stable across turns.

use im::Vector;
use smallvec::SmallVec;

use super::action::PlayRecord;
use super::entity::{CharacterId, Side};
use super::error::{CombatError, Result};
use crate::character::{Character, CharacterEvent};

/// Character IDs in roster order, inline for typical party sizes.
pub type RosterIds = SmallVec<[CharacterId; 4]>;

/// The combat session's roster and history.
///
/// ## Example
///
/// ```
/// use deck_battler::character::Character;
/// use deck_battler::core::{Encounter, Side};
///
/// let mut encounter = Encounter::new();
/// let hero = encounter.add_character(Side::Acting, Character::new("Hero", 40, 3));
/// let slime = encounter.add_character(Side::Reacting, Character::new("Slime", 12, 2));
///
/// assert_eq!(encounter.live_ids(Side::Acting).as_slice(), &[hero]);
/// assert_eq!(encounter.character(slime).unwrap().side(), Side::Reacting);
/// assert!(!encounter.is_side_defeated(Side::Reacting));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Encounter {
    roster: Vec<Character>,
    next_id: u32,
    last_played: Option<PlayRecord>,
    play_log: Vector<PlayRecord>,
    pending_events: Vec<CharacterEvent>,
}

impl Encounter {
    /// Create an empty encounter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Roster ===

    /// Add a character to a side. Returns its newly allocated ID.
    pub fn add_character(&mut self, side: Side, mut character: Character) -> CharacterId {
        let id = CharacterId::new(self.next_id);
        self.next_id += 1;
        character.enroll(id, side);
        self.roster.push(character);
        id
    }

    /// Look up a character still on the roster (including ones pending removal).
    #[must_use]
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.roster.iter().find(|c| c.id() == id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.roster.iter_mut().find(|c| c.id() == id)
    }

    /// Like [`character`](Self::character), but an absent ID is an error.
    pub fn require(&self, id: CharacterId) -> Result<&Character> {
        self.character(id).ok_or(CombatError::UnknownCharacter(id))
    }

    pub fn require_mut(&mut self, id: CharacterId) -> Result<&mut Character> {
        self.character_mut(id).ok_or(CombatError::UnknownCharacter(id))
    }

    /// Every character on the roster, in roster order.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.roster.iter()
    }

    /// Every member of a side, including defeated ones pending removal.
    pub fn members(&self, side: Side) -> impl Iterator<Item = &Character> {
        self.roster.iter().filter(move |c| c.side() == side)
    }

    /// Live members of a side, in roster order.
    pub fn live_members(&self, side: Side) -> impl Iterator<Item = &Character> {
        self.members(side).filter(|c| c.is_alive())
    }

    /// IDs of the live members of a side, in roster order.
    #[must_use]
    pub fn live_ids(&self, side: Side) -> RosterIds {
        self.live_members(side).map(Character::id).collect()
    }

    /// Every live character in the encounter, in roster order.
    pub fn live_all(&self) -> impl Iterator<Item = &Character> {
        self.roster.iter().filter(|c| c.is_alive())
    }

    /// Whether a side has no live members left.
    #[must_use]
    pub fn is_side_defeated(&self, side: Side) -> bool {
        self.live_members(side).next().is_none()
    }

    /// Number of characters on the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Remove every defeated character from the roster.
    ///
    /// Their pending change records are kept so observers still see the
    /// death. Returns the removed IDs in roster order.
    pub fn remove_defeated(&mut self) -> Vec<CharacterId> {
        let mut removed = Vec::new();
        let pending = &mut self.pending_events;
        self.roster.retain_mut(|c| {
            if c.is_alive() {
                return true;
            }
            pending.extend(c.drain_events());
            removed.push(c.id());
            false
        });
        removed
    }

    /// Reset current action points to maximum for every live member of a side.
    pub fn refresh_action_points(&mut self, side: Side) {
        for c in self.roster.iter_mut().filter(|c| c.side() == side && c.is_alive()) {
            c.refresh_action_points();
        }
    }

    // === History ===

    /// Record a resolved card as the most recently played.
    pub fn record_play(&mut self, record: PlayRecord) {
        self.play_log.push_back(record.clone());
        self.last_played = Some(record);
    }

    #[must_use]
    pub fn last_played(&self) -> Option<&PlayRecord> {
        self.last_played.as_ref()
    }

    /// Every play of the encounter, oldest first.
    #[must_use]
    pub fn play_log(&self) -> &Vector<PlayRecord> {
        &self.play_log
    }

    /// Sequence number the next play record should carry.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.play_log.len() as u32
    }

    // === Events ===

    /// Take every pending change record, removed characters' first, then the
    /// roster's in roster order.
    pub fn drain_events(&mut self) -> Vec<CharacterEvent> {
        let mut events = std::mem::take(&mut self.pending_events);
        for c in &mut self.roster {
            events.extend(c.drain_events());
        }
        events
    }
}
