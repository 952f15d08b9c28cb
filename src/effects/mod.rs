//! Effect system: kinds, catalog, targeting and damage modifiers.
//!
//! - `EffectKind`: what an `EffectSpec` does
//! - `EffectCatalog`: stateless handler per kind, applied to one `Combatant`
//! - `TargetSpec` / `TargetResolver`: which live characters a spec reaches
//! - `modified_damage`: strength, Weak and Vulnerable adjustments
//!
//! Deck-facing effects (DrawCards, Exhaust) and PersistentPower do not
//! touch combat state. The catalog turns them into `ExternalRequest`s for
//! the resolution pipeline to hand to its collaborators.

mod catalog;
mod damage;
mod effect;
mod targeting;

pub use catalog::{EffectCatalog, EffectHandler};
pub use damage::modified_damage;
pub use effect::{EffectKind, EffectOutcome, ExternalRequest, ResourceKind};
pub use targeting::{TargetResolver, TargetSpec};
