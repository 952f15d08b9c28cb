//! Runtime status instances.

use serde::{Deserialize, Serialize};

use crate::statuses::StatusKind;

/// A status currently affecting one character.
///
/// At most one instance per kind exists on a character. Re-application
/// keeps the larger remaining duration and the larger intensity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStatus {
    /// Which status this is.
    pub kind: StatusKind,
    /// End-of-turn ticks left before expiry. Always at least 1 while active.
    pub remaining: u32,
    /// Strength of the status (poison per tick, attribute delta, block granted).
    pub intensity: i32,
    /// Additive side effect currently in force, reversed on removal.
    pub applied: i32,
}

impl ActiveStatus {
    pub(crate) fn new(kind: StatusKind, remaining: u32, intensity: i32) -> Self {
        Self {
            kind,
            remaining: remaining.max(1),
            intensity,
            applied: 0,
        }
    }
}

/// Result of `Character::add_or_refresh_status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusRefresh {
    pub kind: StatusKind,
    /// Remaining duration before this call, `None` when newly created.
    pub previous_remaining: Option<u32>,
    /// Remaining duration after this call.
    pub remaining: u32,
    /// Intensity before this call (0 when newly created).
    pub previous_intensity: i32,
    /// Intensity after this call.
    pub intensity: i32,
}

impl StatusRefresh {
    /// Whether this call created the instance.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.previous_remaining.is_none()
    }
}
