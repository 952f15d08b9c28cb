//! AI decision engine.
//!
//! For each live member of the side it drives, the engine loops:
//! choose a card → choose a target → resolve → remember the play, until
//! the character runs out of action points, has nothing worth playing, or
//! hits the per-turn play cap.
//!
//! ## Action priority
//!
//! 1. Health below the low threshold: first affordable Heal, else Defense
//! 2. Health above the high threshold and no opponent debuffed: first Debuff
//! 3. First affordable card that synergizes with the last N plays
//! 4. A random affordable Attack
//! 5. A random affordable card
//!
//! All randomness comes from the single `CombatRng` the engine owns.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::category::{categorize, ActionCategory};
use super::config::AiConfig;
use super::memory::{PlayMemory, RecentPlay};
use super::targeting::select_target;
use crate::cards::Card;
use crate::collaborators::Collaborators;
use crate::core::{CharacterId, CombatConfig, CombatError, CombatRng, Encounter, Side};
use crate::resolution::{CardResolver, ResolutionReport};

/// A card in a character's pool, categorized once at registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolEntry {
    pub card: Card,
    pub category: ActionCategory,
}

/// Which priority step produced a choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChoiceReason {
    /// Low health: heal or defend.
    LowHealth,
    /// High health, opponents clean: debuff first.
    PressAdvantage,
    /// Related to a recent play.
    Synergy,
    /// Random affordable attack.
    DefaultAttack,
    /// Random affordable card.
    Fallback,
}

/// A selected card from the actor's pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionChoice {
    /// Index into the actor's pool.
    pub index: usize,
    pub category: ActionCategory,
    pub reason: ChoiceReason,
}

/// Why a character stopped acting. None of these are errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AiStop {
    /// No affordable card in the pool.
    NoEligibleAction,
    /// The chosen card had no character to aim at.
    NoEligibleTarget,
    OutOfActionPoints,
    /// The per-turn play cap was reached.
    ActionLimit,
    /// The character was defeated during its own turn.
    Defeated,
    /// The pipeline rejected the play.
    Rejected(CombatError),
}

/// Everything one character did during an AI turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterTurn {
    pub character: CharacterId,
    pub plays: Vec<ResolutionReport>,
    pub stop: AiStop,
}

/// Heuristic controller for one side of an encounter.
#[derive(Clone, Debug)]
pub struct AiDecisionEngine {
    config: AiConfig,
    rng: CombatRng,
    pools: FxHashMap<CharacterId, Vec<PoolEntry>>,
    memory: PlayMemory,
}

impl AiDecisionEngine {
    #[must_use]
    pub fn new(config: AiConfig, rng: CombatRng) -> Self {
        let memory = PlayMemory::new(config.synergy_window);
        Self {
            config,
            rng,
            pools: FxHashMap::default(),
            memory,
        }
    }

    /// Engine seeded from the encounter configuration.
    #[must_use]
    pub fn from_config(config: &CombatConfig) -> Self {
        Self::new(config.ai.clone(), CombatRng::new(config.seed).for_context("ai"))
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    #[must_use]
    pub fn rng(&self) -> &CombatRng {
        &self.rng
    }

    /// Categorize a card with this engine's rules.
    #[must_use]
    pub fn category_of(&self, card: &Card) -> ActionCategory {
        categorize(card, &self.config.category_rules)
    }

    /// Hand a character its card pool. Cards are categorized here, once.
    ///
    /// Replaces any pool previously registered for the character.
    pub fn register_pool(&mut self, character: CharacterId, cards: impl IntoIterator<Item = Card>) {
        let entries: Vec<PoolEntry> = cards
            .into_iter()
            .map(|card| {
                let category = self.category_of(&card);
                PoolEntry { card, category }
            })
            .collect();
        tracing::debug!("{} registered {} cards", character, entries.len());
        self.pools.insert(character, entries);
    }

    #[must_use]
    pub fn pool(&self, character: CharacterId) -> &[PoolEntry] {
        self.pools.get(&character).map_or(&[], Vec::as_slice)
    }

    /// The side's last plays, oldest first, capped at the synergy window.
    #[must_use]
    pub fn recent_plays(&self) -> &PlayMemory {
        &self.memory
    }

    /// Pick the next card for `actor`, or `None` if nothing is affordable.
    pub fn choose_action(&mut self, encounter: &Encounter, actor: CharacterId) -> Option<ActionChoice> {
        let character = encounter.character(actor).filter(|c| c.is_alive())?;
        let pool = self.pools.get(&actor)?;

        let budget = character.action_points();
        let affordable: SmallVec<[usize; 8]> = pool
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.card.cost <= budget)
            .map(|(index, _)| index)
            .collect();
        if affordable.is_empty() {
            tracing::debug!("{} has no affordable card ({} AP)", actor, budget);
            return None;
        }

        let first_of = |category: ActionCategory| {
            affordable
                .iter()
                .copied()
                .find(|&index| pool[index].category == category)
        };
        let choice = |index: usize, reason: ChoiceReason| ActionChoice {
            index,
            category: pool[index].category,
            reason,
        };

        if character.health_below_percent(self.config.low_health_percent) {
            let pick = first_of(ActionCategory::Heal).or_else(|| first_of(ActionCategory::Defense));
            if let Some(index) = pick {
                tracing::debug!("{} low health → {}", actor, pool[index].card.name);
                return Some(choice(index, ChoiceReason::LowHealth));
            }
        } else if character.health_above_percent(self.config.high_health_percent) {
            let opponents_clean = encounter
                .live_members(character.side().opponent())
                .all(|c| !c.has_debuff());
            if opponents_clean {
                if let Some(index) = first_of(ActionCategory::Debuff) {
                    tracing::debug!("{} healthy, opponents clean → {}", actor, pool[index].card.name);
                    return Some(choice(index, ChoiceReason::PressAdvantage));
                }
            }
        }

        let synergy = affordable.iter().copied().find(|&index| {
            let entry = &pool[index];
            self.memory.iter_recent().any(|recent| {
                self.config.categories_synergize(entry.category, recent.category)
                    || entry.card.keywords.iter().any(|k| {
                        recent
                            .keywords
                            .iter()
                            .any(|r| self.config.keywords_synergize(k, r))
                    })
            })
        });
        if let Some(index) = synergy {
            tracing::debug!("{} synergy → {}", actor, pool[index].card.name);
            return Some(choice(index, ChoiceReason::Synergy));
        }

        let attacks: SmallVec<[usize; 8]> = affordable
            .iter()
            .copied()
            .filter(|&index| pool[index].category == ActionCategory::Attack)
            .collect();
        if let Some(&index) = self.rng.choose(&attacks) {
            tracing::debug!("{} default attack → {}", actor, pool[index].card.name);
            return Some(choice(index, ChoiceReason::DefaultAttack));
        }

        let index = *self.rng.choose(&affordable)?;
        tracing::debug!("{} fallback → {}", actor, pool[index].card.name);
        Some(choice(index, ChoiceReason::Fallback))
    }

    /// Pick the clicked character for the pool card at `index`.
    #[must_use]
    pub fn choose_target(&self, encounter: &Encounter, actor: CharacterId, index: usize) -> Option<CharacterId> {
        let character = encounter.character(actor)?;
        let entry = self.pools.get(&actor)?.get(index)?;
        select_target(encounter, character, &entry.card, entry.category)
    }

    /// Act with every live member of `side`, in roster order.
    pub fn take_turn(
        &mut self,
        encounter: &mut Encounter,
        side: Side,
        resolver: &CardResolver,
        collaborators: &mut Collaborators,
        turn: u32,
    ) -> Vec<CharacterTurn> {
        encounter
            .live_ids(side)
            .into_iter()
            .map(|id| self.act(encounter, id, resolver, collaborators, turn))
            .collect()
    }

    fn act(
        &mut self,
        encounter: &mut Encounter,
        id: CharacterId,
        resolver: &CardResolver,
        collaborators: &mut Collaborators,
        turn: u32,
    ) -> CharacterTurn {
        let mut plays = Vec::new();

        let stop = loop {
            let Some(character) = encounter.character(id).filter(|c| c.is_alive()) else {
                break AiStop::Defeated;
            };
            if plays.len() >= self.config.max_plays_per_character as usize {
                break AiStop::ActionLimit;
            }
            if character.action_points() == 0 {
                break AiStop::OutOfActionPoints;
            }

            let Some(choice) = self.choose_action(encounter, id) else {
                break AiStop::NoEligibleAction;
            };
            let Some(target) = self.choose_target(encounter, id, choice.index) else {
                tracing::debug!("{} has no target for pool card #{}", id, choice.index);
                break AiStop::NoEligibleTarget;
            };
            let Some(entry) = self.pools.get(&id).and_then(|pool| pool.get(choice.index)) else {
                break AiStop::NoEligibleAction;
            };

            match resolver.resolve(encounter, &entry.card, target, id, turn, collaborators) {
                Ok(report) => {
                    self.memory.push(RecentPlay {
                        card: entry.card.id,
                        actor: id,
                        category: entry.category,
                        keywords: entry.card.keywords.iter().map(|k| k.to_ascii_lowercase()).collect(),
                    });
                    plays.push(report);
                }
                Err(err) => {
                    tracing::warn!("{} could not play {}: {}", id, entry.card.name, err);
                    break AiStop::Rejected(err);
                }
            }
        };

        tracing::debug!("{} stops after {} plays: {:?}", id, plays.len(), stop);
        CharacterTurn {
            character: id,
            plays,
            stop,
        }
    }
}
