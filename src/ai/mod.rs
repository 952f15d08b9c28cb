//! Heuristic decision engine for the AI-driven side.
//!
//! ## Components
//!
//! - `categorize`: content-driven card classification (type, keywords,
//!   description words, then card structure)
//! - `AiDecisionEngine`: per-character action/target choice and the turn loop
//! - `PlayMemory`: the side's last N plays, for synergy
//! - `AiConfig`: thresholds, rules and synergy pairs, all data
//!
//! ## Usage
//!
//! ```
//! use deck_battler::ai::{AiConfig, AiDecisionEngine};
//! use deck_battler::cards::{Card, CardId, EffectSpec};
//! use deck_battler::character::Character;
//! use deck_battler::core::{CombatRng, Encounter, Side};
//! use deck_battler::effects::TargetSpec;
//!
//! let mut encounter = Encounter::new();
//! encounter.add_character(Side::Acting, Character::new("Hero", 30, 3));
//! let wolf = encounter.add_character(Side::Reacting, Character::new("Wolf", 15, 2));
//!
//! let mut ai = AiDecisionEngine::new(AiConfig::default(), CombatRng::new(42));
//! ai.register_pool(wolf, vec![
//!     Card::new(CardId::new(1), "Bite", "Attack", 1)
//!         .with_effect(EffectSpec::damage(4, TargetSpec::SingleEnemy)),
//! ]);
//!
//! let choice = ai.choose_action(&encounter, wolf).unwrap();
//! assert_eq!(ai.pool(wolf)[choice.index].card.name, "Bite");
//! ```

mod category;
mod config;
mod engine;
mod memory;
mod targeting;

pub use category::{categorize, ActionCategory};
pub use config::{AiConfig, CategoryRule};
pub use engine::{ActionChoice, AiDecisionEngine, AiStop, CharacterTurn, ChoiceReason, PoolEntry};
pub use memory::{PlayMemory, RecentPlay};
pub use targeting::select_target;
