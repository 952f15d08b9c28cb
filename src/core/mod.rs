//! Core combat types: identities, roster state, play history, RNG,
//! configuration and errors.
//!
//! Everything above this module (catalogs, pipeline, turn machine, AI) is
//! built from these pieces and configured through `CombatConfig` rather than
//! ambient statics.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod state;

pub use action::PlayRecord;
pub use config::{CombatConfig, DamageTuning};
pub use entity::{CharacterId, Side};
pub use error::{CombatError, ErrorSeverity, Result};
pub use rng::{CombatRng, CombatRngState};
pub use state::{Encounter, RosterIds};
