//! Character model: per-combatant resource state.
//!
//! ## Key Types
//!
//! - `Character`: health, action points, energy, block, attributes, statuses
//! - `Attributes` / `AttributeKind`: strength, dexterity, intelligence, luck
//! - `ActiveStatus`: a status bound to a remaining duration on one character
//! - `CharacterEvent`: change records drained by the encounter
//! - `Combatant`: the capability trait effect handlers operate on

mod attributes;
mod combatant;
mod events;
mod model;
mod status;

pub use attributes::{AttributeKind, Attributes};
pub use combatant::{Combatant, DamageOutcome};
pub use events::CharacterEvent;
pub use model::{Character, ExpiredStatuses, HealthChange};
pub use status::{ActiveStatus, StatusRefresh};
