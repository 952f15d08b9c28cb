//! Status effect catalog.
//!
//! Statuses are timed conditions on a character:
//! - `StatusKind`: the seven kinds content can apply, plus `Unknown`
//! - `Polarity`: buff/debuff classification fixed per kind
//! - `StatusCatalog`: apply/remove/tick functions keyed by kind
//!
//! ## Stacking
//!
//! Statuses never stack instances. Re-applying a kind keeps the larger
//! remaining duration and the larger intensity. Block is the exception for
//! its *value*: each application adds its intensity to the block pool.

mod catalog;
mod kind;

pub use catalog::{ApplyFn, RemoveFn, StatusCatalog, StatusDefinition, TickFn, TickOutcome};
pub use kind::{Polarity, StatusKind};
