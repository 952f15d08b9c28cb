//! Condition evaluation for gated effects.
//!
//! A `Condition` is evaluated per resolved target with the effect's threshold
//! and the encounter's most recent play. Health thresholds are ratios
//! expressed as integer percents (`health * 100 < threshold * max`).

mod condition;

pub use condition::{Condition, ConditionContext};
