//! Damage modifiers applied at dealing time.
//!
//! ```text
//! dealt = (base + source strength)
//!       × weak%       if the source is Weak
//!       × vulnerable% if the target is Vulnerable
//! ```
//!
//! Integer math, each multiplication floored, never below zero.

use crate::character::{AttributeKind, Character};
use crate::core::DamageTuning;
use crate::statuses::StatusKind;

/// Damage `source` deals to `target` for a base magnitude.
#[must_use]
pub fn modified_damage(base: i32, source: &Character, target: &Character, tuning: &DamageTuning) -> i32 {
    let mut amount = i64::from(base) + i64::from(source.attribute(AttributeKind::Strength));
    if amount <= 0 {
        return 0;
    }
    if source.has_status(StatusKind::Weak) {
        amount = amount * i64::from(tuning.weak_percent) / 100;
    }
    if target.has_status(StatusKind::Vulnerable) {
        amount = amount * i64::from(tuning.vulnerable_percent) / 100;
    }
    amount.clamp(0, i64::from(i32::MAX)) as i32
}
