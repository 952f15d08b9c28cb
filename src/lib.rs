//! # deck-battler
//!
//! Combat resolution core for a turn-based, deck-driven battler.
//!
//! ## Design Principles
//!
//! 1. **Content-Driven**: Cards, statuses and AI heuristics are data. New
//!    effect and status kinds plug into catalogs without touching the pipeline.
//!
//! 2. **All-or-Nothing Plays**: A card is validated (target, resources) before
//!    anything is spent. Once the cost is paid, resolution always completes.
//!
//! 3. **Deterministic**: One seeded random source, owned by the AI. Tie-breaks
//!    everywhere else fall back to roster order.
//!
//! ## Architecture
//!
//! - **Encounter**: the roster of both sides plus the play history. Passed
//!   explicitly to every operation; there is no global registry.
//!
//! - **Collaborators**: deck, power tracking, presentation and observers are
//!   trait objects injected at setup. Combat never reaches for singletons.
//!
//! ## Modules
//!
//! - `core`: IDs, sides, encounter state, errors, RNG, configuration
//! - `character`: per-combatant resources, attributes and active statuses
//! - `statuses`: status kinds and their apply/tick/remove behavior
//! - `cards`: card definitions, effect/status specs, registry
//! - `effects`: effect kinds, handlers, damage modifiers, target resolution
//! - `conditions`: predicates gating individual effect specs
//! - `resolution`: the card play pipeline and its report
//! - `collaborators`: traits for everything outside combat
//! - `ai`: heuristic decision engine for the AI-controlled side
//! - `turn`: the two-state turn machine

pub mod ai;
pub mod cards;
pub mod character;
pub mod collaborators;
pub mod conditions;
pub mod core;
pub mod effects;
pub mod resolution;
pub mod statuses;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    CharacterId, Side,
    CombatConfig, DamageTuning,
    CombatError, ErrorSeverity, Result,
    CombatRng, CombatRngState,
    Encounter, PlayRecord,
};

pub use crate::character::{ActiveStatus, AttributeKind, Attributes, Character, CharacterEvent, Combatant};

pub use crate::statuses::{Polarity, StatusCatalog, StatusDefinition, StatusKind};

pub use crate::cards::{Card, CardId, CardRegistry, EffectSpec, StatusSpec};

pub use crate::effects::{EffectCatalog, EffectKind, ResourceKind, TargetResolver, TargetSpec};

pub use crate::conditions::Condition;

pub use crate::resolution::{CardResolver, ResolutionReport};

pub use crate::collaborators::{
    Collaborators, DeckCollaborator, PowerTracker, PresentationSink, ResourceObserver,
};

pub use crate::ai::{ActionCategory, AiConfig, AiDecisionEngine};

pub use crate::turn::{TurnState, TurnStateMachine};
