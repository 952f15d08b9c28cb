//! Declarative effect and status specifications.
//!
//! Specs are content: they say *what* should happen and to whom. The
//! resolution pipeline turns them into state changes.

use serde::{Deserialize, Serialize};

use crate::conditions::Condition;
use crate::effects::{EffectKind, ResourceKind, TargetSpec};
use crate::statuses::StatusKind;

/// One effect on a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSpec {
    pub kind: EffectKind,
    pub magnitude: i32,
    pub target: TargetSpec,

    /// Gate evaluated per resolved target. `None` always passes.
    #[serde(default)]
    pub condition: Condition,

    /// Numeric argument of the condition (a percent for health thresholds).
    #[serde(default)]
    pub condition_threshold: i32,

    /// Pool granted by `GrantResource`. Ignored by other kinds.
    #[serde(default)]
    pub resource: ResourceKind,
}

impl EffectSpec {
    #[must_use]
    pub fn new(kind: EffectKind, magnitude: i32, target: TargetSpec) -> Self {
        Self {
            kind,
            magnitude,
            target,
            condition: Condition::None,
            condition_threshold: 0,
            resource: ResourceKind::default(),
        }
    }

    #[must_use]
    pub fn damage(amount: i32, target: TargetSpec) -> Self {
        Self::new(EffectKind::Damage, amount, target)
    }

    #[must_use]
    pub fn heal(amount: i32, target: TargetSpec) -> Self {
        Self::new(EffectKind::Heal, amount, target)
    }

    #[must_use]
    pub fn draw(count: i32) -> Self {
        Self::new(EffectKind::DrawCards, count, TargetSpec::SelfTarget)
    }

    #[must_use]
    pub fn grant(resource: ResourceKind, amount: i32, target: TargetSpec) -> Self {
        Self::new(EffectKind::GrantResource, amount, target).with_resource(resource)
    }

    /// Gate this effect on a condition (builder pattern).
    #[must_use]
    pub fn with_condition(mut self, condition: Condition, threshold: i32) -> Self {
        self.condition = condition;
        self.condition_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_resource(mut self, resource: ResourceKind) -> Self {
        self.resource = resource;
        self
    }
}

/// One status on a card.
///
/// A zero `duration` or `intensity` means "use the catalog default".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSpec {
    pub kind: StatusKind,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub intensity: i32,
    pub target: TargetSpec,
}

impl StatusSpec {
    #[must_use]
    pub fn new(kind: StatusKind, duration: u32, intensity: i32, target: TargetSpec) -> Self {
        Self {
            kind,
            duration,
            intensity,
            target,
        }
    }
}
