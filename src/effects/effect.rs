//! Effect kinds and per-target outcomes.

use serde::{Deserialize, Serialize};

/// Kinds of effect a card can declare.
///
/// Unrecognized names deserialize to `Unknown`, which no catalog handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Reduce health, block absorbing first.
    Damage,
    /// Restore health up to the maximum.
    Heal,
    /// Add action points or energy.
    GrantResource,
    /// Ask the deck collaborator for cards.
    DrawCards,
    /// Exhaust the played card instead of discarding it.
    Exhaust,
    /// Lasting effect tracked by the power collaborator.
    PersistentPower,
    #[serde(other)]
    Unknown,
}

impl EffectKind {
    /// Every kind the standard catalog registers.
    pub const KNOWN: [EffectKind; 6] = [
        EffectKind::Damage,
        EffectKind::Heal,
        EffectKind::GrantResource,
        EffectKind::DrawCards,
        EffectKind::Exhaust,
        EffectKind::PersistentPower,
    ];
}

/// Resource pool targeted by `GrantResource`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    #[default]
    ActionPoints,
    Energy,
}

/// Work the effect catalog cannot do itself.
///
/// The catalog has no view of decks or power tracking; it hands these to
/// the resolution pipeline, which forwards them to the collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExternalRequest {
    DrawCards { count: u32 },
    ExhaustPlayedCard,
    PersistentPower { magnitude: i32 },
}

/// What one effect did to one target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectOutcome {
    /// Amount actually applied after clamping (health lost, health gained,
    /// resource granted, or the requested count for external effects).
    pub applied: i32,
    /// Damage soaked by block.
    pub absorbed: i32,
    /// The effect caused the target's death transition.
    pub defeated: bool,
    pub request: Option<ExternalRequest>,
}

impl EffectOutcome {
    #[must_use]
    pub fn applied(amount: i32) -> Self {
        Self {
            applied: amount,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn request(amount: i32, request: ExternalRequest) -> Self {
        Self {
            applied: amount,
            request: Some(request),
            ..Self::default()
        }
    }
}
