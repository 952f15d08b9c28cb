//! Effect catalog: resolution logic per effect kind.
//!
//! Handlers are stateless functions over a single `Combatant`. They never
//! see the roster, the deck, or other characters; anything beyond the target
//! comes back as an `ExternalRequest`.

use rustc_hash::FxHashMap;

use super::effect::{EffectKind, EffectOutcome, ExternalRequest, ResourceKind};
use crate::cards::EffectSpec;
use crate::character::Combatant;
use crate::core::{CombatError, Result};

/// Resolution logic for one effect kind.
///
/// Receives the target, the `EffectSpec`, and the final magnitude (after damage
/// modifiers for `Damage`, the declared magnitude otherwise).
pub type EffectHandler = fn(&mut dyn Combatant, &EffectSpec, i32) -> EffectOutcome;

/// Registry from effect kind to handler.
#[derive(Clone, Debug, Default)]
pub struct EffectCatalog {
    handlers: FxHashMap<EffectKind, EffectHandler>,
}

impl EffectCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every known effect kind registered.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(EffectKind::Damage, damage);
        catalog.register(EffectKind::Heal, heal);
        catalog.register(EffectKind::GrantResource, grant_resource);
        catalog.register(EffectKind::DrawCards, |_, _, magnitude| {
            let count = u32::try_from(magnitude).unwrap_or(0);
            EffectOutcome::request(magnitude.max(0), ExternalRequest::DrawCards { count })
        });
        catalog.register(EffectKind::Exhaust, |_, _, _| {
            EffectOutcome::request(0, ExternalRequest::ExhaustPlayedCard)
        });
        catalog.register(EffectKind::PersistentPower, |_, _, magnitude| {
            EffectOutcome::request(magnitude, ExternalRequest::PersistentPower { magnitude })
        });
        catalog
    }

    /// Register or replace a handler.
    pub fn register(&mut self, kind: EffectKind, handler: EffectHandler) {
        self.handlers.insert(kind, handler);
    }

    #[must_use]
    pub fn contains(&self, kind: EffectKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Apply one effect to one target.
    pub fn apply(&self, target: &mut dyn Combatant, spec: &EffectSpec, magnitude: i32) -> Result<EffectOutcome> {
        let handler = self
            .handlers
            .get(&spec.kind)
            .ok_or(CombatError::UnsupportedEffectKind(spec.kind))?;
        Ok(handler(target, spec, magnitude))
    }
}

fn damage(target: &mut dyn Combatant, _: &EffectSpec, magnitude: i32) -> EffectOutcome {
    let outcome = target.take_damage(magnitude);
    EffectOutcome {
        applied: outcome.health_lost,
        absorbed: outcome.absorbed,
        defeated: outcome.defeated,
        request: None,
    }
}

fn heal(target: &mut dyn Combatant, _: &EffectSpec, magnitude: i32) -> EffectOutcome {
    EffectOutcome::applied(target.restore_health(magnitude))
}

fn grant_resource(target: &mut dyn Combatant, spec: &EffectSpec, magnitude: i32) -> EffectOutcome {
    let amount = u32::try_from(magnitude).unwrap_or(0);
    let granted = match spec.resource {
        ResourceKind::ActionPoints => target.grant_action_points(amount),
        ResourceKind::Energy => target.grant_energy(amount),
    };
    EffectOutcome::applied(i32::try_from(granted).unwrap_or(i32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;
    use crate::effects::TargetSpec;
    use crate::statuses::StatusKind;

    #[test]
    fn test_damage_without_block() {
        let catalog = EffectCatalog::standard();
        let mut target = Character::new("Target", 20, 3);
        let spec = EffectSpec::damage(8, TargetSpec::SingleEnemy);

        let outcome = catalog.apply(&mut target, &spec, 8).unwrap();
        assert_eq!(outcome.applied, 8);
        assert_eq!(outcome.absorbed, 0);
        assert_eq!(target.health(), 12);
        assert!(target.statuses().is_empty());
    }

    #[test]
    fn test_damage_through_block() {
        let catalog = EffectCatalog::standard();
        let mut target = Character::new("Target", 20, 3);
        target.add_or_refresh_status(StatusKind::Block, 2, 5);
        target.gain_block(5);

        let spec = EffectSpec::damage(8, TargetSpec::SingleEnemy);
        let outcome = catalog.apply(&mut target, &spec, 8).unwrap();

        assert_eq!(outcome.absorbed, 5);
        assert_eq!(outcome.applied, 3);
        assert_eq!(target.health(), 17);
        assert_eq!(target.block(), 0);
    }

    #[test]
    fn test_heal_clamps() {
        let catalog = EffectCatalog::standard();
        let mut target = Character::new("Target", 20, 3).with_health(15);
        let spec = EffectSpec::heal(10, TargetSpec::SelfTarget);

        assert_eq!(catalog.apply(&mut target, &spec, 10).unwrap().applied, 5);
        assert_eq!(target.health(), 20);
    }

    #[test]
    fn test_grant_resource_pools() {
        let catalog = EffectCatalog::standard();
        let mut target = Character::new("Target", 20, 3);
        target.spend_action_points(2);

        let ap = EffectSpec::grant(ResourceKind::ActionPoints, 5, TargetSpec::SelfTarget);
        assert_eq!(catalog.apply(&mut target, &ap, 5).unwrap().applied, 2);

        let energy = EffectSpec::grant(ResourceKind::Energy, 4, TargetSpec::SelfTarget);
        assert_eq!(catalog.apply(&mut target, &energy, 4).unwrap().applied, 4);
        assert_eq!(target.energy(), 4);
    }

    #[test]
    fn test_external_effects_become_requests() {
        let catalog = EffectCatalog::standard();
        let mut target = Character::new("Target", 20, 3);

        let draw = catalog.apply(&mut target, &EffectSpec::draw(2), 2).unwrap();
        assert_eq!(draw.request, Some(ExternalRequest::DrawCards { count: 2 }));

        let exhaust = EffectSpec::new(EffectKind::Exhaust, 0, TargetSpec::SelfTarget);
        let outcome = catalog.apply(&mut target, &exhaust, 0).unwrap();
        assert_eq!(outcome.request, Some(ExternalRequest::ExhaustPlayedCard));

        assert_eq!(target.health(), 20);
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let catalog = EffectCatalog::standard();
        let mut target = Character::new("Target", 20, 3);
        let spec = EffectSpec::new(EffectKind::Unknown, 3, TargetSpec::SelfTarget);

        let err = catalog.apply(&mut target, &spec, 3).unwrap_err();
        assert_eq!(err, CombatError::UnsupportedEffectKind(EffectKind::Unknown));
    }

    #[test]
    fn test_standard_registers_every_known_kind() {
        let catalog = EffectCatalog::standard();
        for kind in EffectKind::KNOWN {
            assert!(catalog.contains(kind));
        }
    }
}
