//! Card content: definitions, effect/status specs, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Card`: Immutable cost + ordered effect and status specs
//! - `EffectSpec` / `StatusSpec`: Declarative units resolved by the pipeline
//! - `CardRegistry`: Card definition lookup
//!
//! Cards are plain serde data so content can be authored outside the crate.
//! Unknown effect, status and condition names still deserialize and are
//! skipped at resolution time instead of failing the whole content load.

pub mod definition;
pub mod registry;
pub mod spec;

pub use definition::{Card, CardId};
pub use registry::CardRegistry;
pub use spec::{EffectSpec, StatusSpec};
