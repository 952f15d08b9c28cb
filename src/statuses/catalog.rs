//! Status catalog: apply/remove/tick logic per status kind.
//!
//! Behavior lives in stateless functions keyed by `StatusKind`; the only
//! per-instance state is the `ActiveStatus` on the character. Apply and
//! remove are inverses for every additive side effect, so repeated
//! apply → remove cycles leave attributes where they started.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::kind::{Polarity, StatusKind};
use crate::character::{
    ActiveStatus, AttributeKind, Character, Combatant, StatusRefresh,
};
use crate::core::{CombatError, Result};

/// Immediate side effect of an application.
///
/// Receives the intensity requested by the `StatusSpec` and the refresh result.
pub type ApplyFn = fn(&mut Character, i32, &StatusRefresh);

/// Reversal of an instance's additive side effect.
pub type RemoveFn = fn(&mut Character, &ActiveStatus);

/// Per-tick effect, run before durations are decremented. Returns health lost.
pub type TickFn = fn(&mut Character, &ActiveStatus) -> i32;

/// How one status kind behaves.
#[derive(Clone, Copy, Debug)]
pub struct StatusDefinition {
    pub kind: StatusKind,
    pub polarity: Polarity,
    /// Used when a spec's duration is 0.
    pub default_duration: u32,
    /// Used when a spec's intensity is 0.
    pub default_intensity: i32,
    pub on_apply: ApplyFn,
    pub on_remove: RemoveFn,
    pub on_tick: Option<TickFn>,
}

impl StatusDefinition {
    /// A status with no immediate, reversal or per-tick effect.
    #[must_use]
    pub fn marker(kind: StatusKind, default_duration: u32) -> Self {
        Self {
            kind,
            polarity: kind.polarity(),
            default_duration,
            default_intensity: 1,
            on_apply: |_, _, _| {},
            on_remove: |_, _| {},
            on_tick: None,
        }
    }

    #[must_use]
    pub fn with_default_intensity(mut self, intensity: i32) -> Self {
        self.default_intensity = intensity;
        self
    }

    #[must_use]
    pub fn on_apply(mut self, f: ApplyFn) -> Self {
        self.on_apply = f;
        self
    }

    #[must_use]
    pub fn on_remove(mut self, f: RemoveFn) -> Self {
        self.on_remove = f;
        self
    }

    #[must_use]
    pub fn on_tick(mut self, f: TickFn) -> Self {
        self.on_tick = Some(f);
        self
    }
}

/// Outcome of one end-of-turn tick on one character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Health lost to per-tick effects such as Poison.
    pub health_lost: i32,
    /// Kinds that expired on this tick, in application order.
    pub expired: SmallVec<[StatusKind; 4]>,
}

/// Registry from status kind to its behavior.
///
/// ```
/// use deck_battler::character::Character;
/// use deck_battler::statuses::{StatusCatalog, StatusKind};
///
/// let catalog = StatusCatalog::standard();
/// let mut knight = Character::new("Knight", 30, 3);
///
/// catalog.apply(&mut knight, StatusKind::Block, 2, 6).unwrap();
/// assert_eq!(knight.block(), 6);
///
/// catalog.remove(&mut knight, StatusKind::Block).unwrap();
/// assert_eq!(knight.block(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StatusCatalog {
    definitions: FxHashMap<StatusKind, StatusDefinition>,
}

impl StatusCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every known status kind registered.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.register(
            StatusDefinition::marker(StatusKind::Block, 2)
                .with_default_intensity(5)
                .on_apply(|target, requested, _| target.gain_block(requested))
                .on_remove(|target, _| target.clear_block()),
        );
        catalog.register(
            StatusDefinition::marker(StatusKind::Poison, 3)
                .with_default_intensity(2)
                .on_tick(|target, status| target.lose_health(status.intensity)),
        );
        catalog.register(StatusDefinition::marker(StatusKind::Weak, 2));
        catalog.register(StatusDefinition::marker(StatusKind::Vulnerable, 2));
        catalog.register(
            StatusDefinition::marker(StatusKind::Strengthened, 2)
                .with_default_intensity(2)
                .on_apply(|target, _, refresh| {
                    sync_attribute(target, refresh.kind, AttributeKind::Strength, 1)
                })
                .on_remove(|target, status| {
                    target.modify_attribute(AttributeKind::Strength, -status.applied);
                }),
        );
        catalog.register(
            StatusDefinition::marker(StatusKind::Destabilized, 2)
                .with_default_intensity(2)
                .on_apply(|target, _, refresh| {
                    sync_attribute(target, refresh.kind, AttributeKind::Dexterity, -1)
                })
                .on_remove(|target, status| {
                    target.modify_attribute(AttributeKind::Dexterity, status.applied);
                }),
        );
        catalog.register(
            StatusDefinition::marker(StatusKind::Exhausted, 1)
                .on_apply(|target, _, refresh| {
                    let Some(status) = target.status(refresh.kind).copied() else {
                        return;
                    };
                    let wanted = status.intensity.max(0) - status.applied;
                    if wanted > 0 {
                        let lowered = -target.modify_max_action_points(-wanted);
                        if let Some(status) = target.status_mut(refresh.kind) {
                            status.applied += lowered;
                        }
                    }
                })
                .on_remove(|target, status| {
                    target.modify_max_action_points(status.applied);
                }),
        );

        catalog
    }

    /// Register or replace a definition.
    pub fn register(&mut self, definition: StatusDefinition) {
        self.definitions.insert(definition.kind, definition);
    }

    #[must_use]
    pub fn get(&self, kind: StatusKind) -> Option<&StatusDefinition> {
        self.definitions.get(&kind)
    }

    #[must_use]
    pub fn contains(&self, kind: StatusKind) -> bool {
        self.definitions.contains_key(&kind)
    }

    /// Apply a status: create or refresh the instance, then run its
    /// immediate side effect. Zero duration/intensity use the defaults.
    pub fn apply(
        &self,
        target: &mut Character,
        kind: StatusKind,
        duration: u32,
        intensity: i32,
    ) -> Result<StatusRefresh> {
        let definition = self
            .get(kind)
            .ok_or(CombatError::UnsupportedStatusKind(kind))?;

        let duration = if duration == 0 {
            definition.default_duration
        } else {
            duration
        };
        let intensity = if intensity == 0 {
            definition.default_intensity
        } else {
            intensity
        };

        let refresh = target.add_or_refresh_status(kind, duration, intensity);
        (definition.on_apply)(target, intensity, &refresh);
        Ok(refresh)
    }

    /// Remove a status and reverse its side effect.
    ///
    /// Returns the removed instance, or `None` when it was not active.
    pub fn remove(&self, target: &mut Character, kind: StatusKind) -> Result<Option<ActiveStatus>> {
        let definition = self
            .get(kind)
            .ok_or(CombatError::UnsupportedStatusKind(kind))?;

        let removed = target.remove_status(kind);
        if let Some(status) = &removed {
            (definition.on_remove)(target, status);
        }
        Ok(removed)
    }

    /// End-of-turn tick for one character: per-tick effects, then duration
    /// decrement, then reversal of every expired instance.
    pub fn tick(&self, target: &mut Character) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        let active: SmallVec<[ActiveStatus; 4]> = target.statuses().iter().copied().collect();
        for status in &active {
            if let Some(tick) = self.get(status.kind).and_then(|d| d.on_tick) {
                outcome.health_lost += tick(target, status);
            }
        }

        for status in target.tick_statuses() {
            if let Some(definition) = self.get(status.kind) {
                (definition.on_remove)(target, &status);
            }
            outcome.expired.push(status.kind);
        }

        outcome
    }
}

/// Bring an attribute delta in line with the instance's current intensity.
///
/// `sign` is +1 for attributes the status raises and -1 for those it lowers.
fn sync_attribute(target: &mut Character, kind: StatusKind, attribute: AttributeKind, sign: i32) {
    let Some(status) = target.status(kind).copied() else {
        return;
    };
    let wanted = status.intensity.max(0) - status.applied;
    if wanted != 0 {
        target.modify_attribute(attribute, sign * wanted);
        if let Some(status) = target.status_mut(kind) {
            status.applied += wanted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> Character {
        Character::new("Knight", 30, 3)
    }

    #[test]
    fn test_standard_registers_every_known_kind() {
        let catalog = StatusCatalog::standard();
        for kind in StatusKind::KNOWN {
            assert!(catalog.contains(kind), "{:?} missing", kind);
        }
        assert!(!catalog.contains(StatusKind::Unknown));
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let catalog = StatusCatalog::standard();
        let mut k = knight();
        let err = catalog.apply(&mut k, StatusKind::Unknown, 1, 1).unwrap_err();
        assert_eq!(err, CombatError::UnsupportedStatusKind(StatusKind::Unknown));
        assert!(k.statuses().is_empty());
    }

    #[test]
    fn test_defaults_fill_zero_fields() {
        let catalog = StatusCatalog::standard();
        let mut k = knight();
        catalog.apply(&mut k, StatusKind::Poison, 0, 0).unwrap();

        let poison = k.status(StatusKind::Poison).unwrap();
        assert_eq!(poison.remaining, 3);
        assert_eq!(poison.intensity, 2);
    }

    #[test]
    fn test_block_stacks_value_but_not_instances() {
        let catalog = StatusCatalog::standard();
        let mut k = knight();
        catalog.apply(&mut k, StatusKind::Block, 2, 5).unwrap();
        catalog.apply(&mut k, StatusKind::Block, 1, 3).unwrap();

        assert_eq!(k.block(), 8);
        assert_eq!(k.statuses().len(), 1);
        assert_eq!(k.status(StatusKind::Block).unwrap().remaining, 2);
    }

    #[test]
    fn test_strengthened_apply_remove_is_idempotent() {
        let catalog = StatusCatalog::standard();
        let mut k = knight();

        for _ in 0..3 {
            catalog.apply(&mut k, StatusKind::Strengthened, 2, 3).unwrap();
            assert_eq!(k.attribute(AttributeKind::Strength), 3);
            catalog.remove(&mut k, StatusKind::Strengthened).unwrap();
            assert_eq!(k.attribute(AttributeKind::Strength), 0);
        }
    }

    #[test]
    fn test_strengthened_refresh_raises_to_max_intensity() {
        let catalog = StatusCatalog::standard();
        let mut k = knight();

        catalog.apply(&mut k, StatusKind::Strengthened, 2, 2).unwrap();
        catalog.apply(&mut k, StatusKind::Strengthened, 2, 5).unwrap();
        assert_eq!(k.attribute(AttributeKind::Strength), 5);

        catalog.apply(&mut k, StatusKind::Strengthened, 2, 1).unwrap();
        assert_eq!(k.attribute(AttributeKind::Strength), 5);

        catalog.remove(&mut k, StatusKind::Strengthened).unwrap();
        assert_eq!(k.attribute(AttributeKind::Strength), 0);
    }

    #[test]
    fn test_destabilized_lowers_dexterity_until_expiry() {
        let catalog = StatusCatalog::standard();
        let mut k = knight();

        catalog.apply(&mut k, StatusKind::Destabilized, 1, 2).unwrap();
        assert_eq!(k.attribute(AttributeKind::Dexterity), -2);

        let outcome = catalog.tick(&mut k);
        assert_eq!(outcome.expired.as_slice(), &[StatusKind::Destabilized]);
        assert_eq!(k.attribute(AttributeKind::Dexterity), 0);
    }

    #[test]
    fn test_exhausted_restores_only_what_it_took() {
        let catalog = StatusCatalog::standard();
        let mut k = Character::new("Tired", 10, 1);

        catalog.apply(&mut k, StatusKind::Exhausted, 1, 3).unwrap();
        assert_eq!(k.max_action_points(), 0);

        catalog.remove(&mut k, StatusKind::Exhausted).unwrap();
        assert_eq!(k.max_action_points(), 1);
    }

    #[test]
    fn test_poison_ticks_damage_through_block() {
        let catalog = StatusCatalog::standard();
        let mut k = knight();
        catalog.apply(&mut k, StatusKind::Block, 3, 10).unwrap();
        catalog.apply(&mut k, StatusKind::Poison, 2, 4).unwrap();

        let outcome = catalog.tick(&mut k);
        assert_eq!(outcome.health_lost, 4);
        assert_eq!(k.health(), 26);
        assert_eq!(k.block(), 10);
        assert!(outcome.expired.is_empty());

        let outcome = catalog.tick(&mut k);
        assert_eq!(outcome.health_lost, 4);
        assert_eq!(outcome.expired.as_slice(), &[StatusKind::Poison]);
    }

    #[test]
    fn test_block_expiry_clears_block() {
        let catalog = StatusCatalog::standard();
        let mut k = knight();
        catalog.apply(&mut k, StatusKind::Block, 1, 7).unwrap();

        catalog.tick(&mut k);
        assert_eq!(k.block(), 0);
        assert!(!k.has_status(StatusKind::Block));
    }

    #[test]
    fn test_remove_inactive_returns_none() {
        let catalog = StatusCatalog::standard();
        let mut k = knight();
        assert_eq!(catalog.remove(&mut k, StatusKind::Weak).unwrap(), None);
    }
}
