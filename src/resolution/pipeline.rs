//! Card resolution pipeline.
//!
//! `CardResolver::resolve` turns one card play into state changes:
//! 1. Check the actor exists and is alive
//! 2. Pre-validate every single-target spec against the clicked character
//! 3. Check the cost against the actor's action points
//! 4. Deduct the cost
//! 5. Effects in declaration order: targets → condition per target → catalog
//! 6. Statuses in declaration order: targets → catalog
//! 7. Record the play, hand the card to the deck collaborator, remove the dead
//!
//! Steps 1-3 reject the whole card with no state change. From step 4 on the
//! resolution always runs to completion: a spec whose kind has no registered
//! logic is logged, recorded in the report, and skipped.

use super::report::{
    AppliedEffect, AppliedStatus, ReportEntry, ResolutionReport, SkipReason, SpecSection,
};
use crate::cards::{Card, EffectSpec, StatusSpec};
use crate::collaborators::Collaborators;
use crate::conditions::ConditionContext;
use crate::core::{
    CharacterId, CombatConfig, CombatError, DamageTuning, Encounter, PlayRecord, Result,
};
use crate::effects::{
    modified_damage, EffectCatalog, EffectKind, ExternalRequest, TargetResolver,
};
use crate::statuses::StatusCatalog;

/// Resolves played cards against an encounter.
///
/// Owns the effect and status catalogs; holds no per-play state, so one
/// resolver serves both sides for the whole encounter.
///
/// ## Example
///
/// ```
/// use deck_battler::cards::{Card, CardId, EffectSpec};
/// use deck_battler::character::Character;
/// use deck_battler::collaborators::Collaborators;
/// use deck_battler::core::{Encounter, Side};
/// use deck_battler::effects::TargetSpec;
/// use deck_battler::resolution::CardResolver;
///
/// let mut encounter = Encounter::new();
/// let hero = encounter.add_character(Side::Acting, Character::new("Hero", 30, 3));
/// let imp = encounter.add_character(Side::Reacting, Character::new("Imp", 20, 2));
///
/// let strike = Card::new(CardId::new(1), "Strike", "Attack", 1)
///     .with_effect(EffectSpec::damage(8, TargetSpec::SingleEnemy));
///
/// let resolver = CardResolver::default();
/// let mut collaborators = Collaborators::detached();
/// let report = resolver
///     .resolve(&mut encounter, &strike, imp, hero, 1, &mut collaborators)
///     .unwrap();
///
/// assert_eq!(report.damage_to(imp), 8);
/// assert_eq!(encounter.character(imp).unwrap().health(), 12);
/// assert_eq!(encounter.character(hero).unwrap().action_points(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct CardResolver {
    effects: EffectCatalog,
    statuses: StatusCatalog,
    damage: DamageTuning,
}

impl Default for CardResolver {
    fn default() -> Self {
        Self::new(DamageTuning::default())
    }
}

impl CardResolver {
    /// Resolver with the standard catalogs.
    #[must_use]
    pub fn new(damage: DamageTuning) -> Self {
        Self {
            effects: EffectCatalog::standard(),
            statuses: StatusCatalog::standard(),
            damage,
        }
    }

    #[must_use]
    pub fn from_config(config: &CombatConfig) -> Self {
        Self::new(config.damage)
    }

    /// Replace the effect catalog (builder pattern).
    #[must_use]
    pub fn with_effect_catalog(mut self, catalog: EffectCatalog) -> Self {
        self.effects = catalog;
        self
    }

    /// Replace the status catalog (builder pattern).
    #[must_use]
    pub fn with_status_catalog(mut self, catalog: StatusCatalog) -> Self {
        self.statuses = catalog;
        self
    }

    #[must_use]
    pub fn effect_catalog(&self) -> &EffectCatalog {
        &self.effects
    }

    #[must_use]
    pub fn status_catalog(&self) -> &StatusCatalog {
        &self.statuses
    }

    #[must_use]
    pub fn damage_tuning(&self) -> &DamageTuning {
        &self.damage
    }

    /// Check a play without changing anything.
    ///
    /// Returns the same error `resolve` would reject the card with.
    pub fn check(&self, encounter: &Encounter, card: &Card, clicked: CharacterId, actor: CharacterId) -> Result<()> {
        let acting = encounter.require(actor)?;
        if !acting.is_alive() {
            return Err(CombatError::DefeatedActor(actor));
        }

        let targeting = TargetResolver::new(actor, clicked);
        for spec in card.targets().filter(|t| t.is_single()) {
            targeting.validate(encounter, spec)?;
        }

        let available = acting.action_points();
        if card.cost > available {
            return Err(CombatError::InsufficientResources {
                required: card.cost,
                available,
            });
        }
        Ok(())
    }

    /// Resolve `card` played by `actor` with `clicked` as the chosen target.
    ///
    /// On error nothing has changed. On success the report lists every
    /// effect and status that landed, in application order.
    pub fn resolve(
        &self,
        encounter: &mut Encounter,
        card: &Card,
        clicked: CharacterId,
        actor: CharacterId,
        turn: u32,
        collaborators: &mut Collaborators,
    ) -> Result<ResolutionReport> {
        self.check(encounter, card, clicked, actor)?;

        let acting = encounter.require_mut(actor)?;
        let side = acting.side();
        if !acting.spend_action_points(card.cost) {
            return Err(CombatError::InsufficientResources {
                required: card.cost,
                available: acting.action_points(),
            });
        }

        let targeting = TargetResolver::new(actor, clicked);
        let mut report = ResolutionReport::new(card.id, actor, card.cost);

        for (index, spec) in card.effects.iter().enumerate() {
            self.apply_effect(encounter, &targeting, card, index, spec, collaborators, &mut report);
        }
        for (index, spec) in card.statuses.iter().enumerate() {
            self.apply_status(encounter, &targeting, card, index, spec, &mut report);
        }

        let sequence = encounter.next_sequence();
        encounter.record_play(PlayRecord::new(
            card.id,
            card.card_type.clone(),
            actor,
            side,
            turn,
            sequence,
        ));

        if report.exhausted {
            collaborators.deck.exhaust(actor, card.id);
        } else {
            collaborators.deck.discard(actor, card.id);
        }

        report.defeated = encounter.remove_defeated();

        tracing::debug!(
            "{} resolved {} ({}): {} applied, {} skipped, {} defeated",
            actor,
            card.id,
            card.name,
            report.entries.len(),
            report.skipped.len(),
            report.defeated.len()
        );

        Ok(report)
    }

    #[allow(clippy::too_many_arguments)]
    fn apply_effect(
        &self,
        encounter: &mut Encounter,
        targeting: &TargetResolver,
        card: &Card,
        index: usize,
        spec: &EffectSpec,
        collaborators: &mut Collaborators,
        report: &mut ResolutionReport,
    ) {
        if !self.effects.contains(spec.kind) {
            tracing::warn!(
                "{} ({}) effect #{}: no logic for {:?}, skipping",
                card.id,
                card.name,
                index,
                spec.kind
            );
            report.skip(
                SpecSection::Effect,
                index,
                SkipReason::Unsupported(CombatError::UnsupportedEffectKind(spec.kind)),
            );
            return;
        }

        let targets = targeting.resolve(encounter, spec.target);
        if targets.is_empty() {
            report.skip(SpecSection::Effect, index, SkipReason::NoTargets);
            return;
        }

        for target_id in targets {
            // Evaluate the gate and damage modifiers before any mutable borrow.
            let magnitude = {
                let Some(target) = encounter.character(target_id).filter(|c| c.is_alive()) else {
                    continue;
                };
                let ctx = ConditionContext::new(target, spec.condition_threshold, encounter.last_played());
                if !spec.condition.evaluate(&ctx) {
                    report.skip(
                        SpecSection::Effect,
                        index,
                        SkipReason::ConditionNotMet { target: target_id },
                    );
                    continue;
                }
                match (spec.kind, encounter.character(targeting.actor())) {
                    (EffectKind::Damage, Some(source)) => {
                        modified_damage(spec.magnitude, source, target, &self.damage)
                    }
                    _ => spec.magnitude,
                }
            };

            let Some(target) = encounter.character_mut(target_id) else {
                continue;
            };
            let outcome = match self.effects.apply(target, spec, magnitude) {
                Ok(outcome) => outcome,
                Err(err) => {
                    tracing::warn!("{} effect #{}: {}", card.id, index, err);
                    report.skip(SpecSection::Effect, index, SkipReason::Unsupported(err));
                    return;
                }
            };

            let mut drawn = Vec::new();
            match outcome.request {
                Some(ExternalRequest::DrawCards { count }) => {
                    drawn = collaborators.deck.draw_cards(target_id, count);
                }
                Some(ExternalRequest::ExhaustPlayedCard) => report.exhausted = true,
                Some(ExternalRequest::PersistentPower { magnitude }) => {
                    collaborators.powers.record_power(target_id, card.id, magnitude);
                }
                None => {}
            }

            report.entries.push(ReportEntry::Effect(AppliedEffect {
                kind: spec.kind,
                target: target_id,
                magnitude,
                applied: outcome.applied,
                absorbed: outcome.absorbed,
                drawn,
            }));
        }
    }

    fn apply_status(
        &self,
        encounter: &mut Encounter,
        targeting: &TargetResolver,
        card: &Card,
        index: usize,
        spec: &StatusSpec,
        report: &mut ResolutionReport,
    ) {
        if !self.statuses.contains(spec.kind) {
            tracing::warn!(
                "{} ({}) status #{}: no logic for {:?}, skipping",
                card.id,
                card.name,
                index,
                spec.kind
            );
            report.skip(
                SpecSection::Status,
                index,
                SkipReason::Unsupported(CombatError::UnsupportedStatusKind(spec.kind)),
            );
            return;
        }

        let targets = targeting.resolve(encounter, spec.target);
        if targets.is_empty() {
            report.skip(SpecSection::Status, index, SkipReason::NoTargets);
            return;
        }

        for target_id in targets {
            let Some(target) = encounter.character_mut(target_id) else {
                continue;
            };
            match self
                .statuses
                .apply(target, spec.kind, spec.duration, spec.intensity)
            {
                Ok(refresh) => report.entries.push(ReportEntry::Status(AppliedStatus {
                    kind: spec.kind,
                    target: target_id,
                    remaining: refresh.remaining,
                    intensity: refresh.intensity,
                    refreshed: !refresh.is_new(),
                })),
                Err(err) => {
                    tracing::warn!("{} status #{}: {}", card.id, index, err);
                    report.skip(SpecSection::Status, index, SkipReason::Unsupported(err));
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::character::Character;
    use crate::core::Side;
    use crate::effects::TargetSpec;
    use crate::statuses::StatusKind;

    fn setup() -> (Encounter, CharacterId, CharacterId) {
        let mut e = Encounter::new();
        let hero = e.add_character(Side::Acting, Character::new("Hero", 30, 3));
        let imp = e.add_character(Side::Reacting, Character::new("Imp", 20, 2));
        (e, hero, imp)
    }

    fn resolve(e: &mut Encounter, card: &Card, clicked: CharacterId, actor: CharacterId) -> Result<ResolutionReport> {
        CardResolver::default().resolve(e, card, clicked, actor, 1, &mut Collaborators::detached())
    }

    #[test]
    fn test_invalid_target_rejected_before_cost() {
        let (mut e, hero, imp) = setup();
        let mend = Card::new(CardId::new(1), "Mend", "Skill", 1)
            .with_effect(EffectSpec::heal(5, TargetSpec::SingleAlly));

        let err = resolve(&mut e, &mend, imp, hero).unwrap_err();
        assert_eq!(
            err,
            CombatError::InvalidTarget {
                target: imp,
                expected: Side::Acting
            }
        );
        assert_eq!(e.character(hero).unwrap().action_points(), 3);
        assert!(e.last_played().is_none());
    }

    #[test]
    fn test_defeated_actor_cannot_play() {
        let (mut e, hero, imp) = setup();
        e.character_mut(hero).unwrap().modify_health(-100);
        let strike = Card::new(CardId::new(1), "Strike", "Attack", 0)
            .with_effect(EffectSpec::damage(1, TargetSpec::SingleEnemy));

        assert_eq!(resolve(&mut e, &strike, imp, hero).unwrap_err(), CombatError::DefeatedActor(hero));
    }

    #[test]
    fn test_effects_then_statuses_in_order() {
        let (mut e, hero, imp) = setup();
        let card = Card::new(CardId::new(2), "Bash", "Attack", 2)
            .with_status(StatusSpec::new(StatusKind::Vulnerable, 2, 1, TargetSpec::SingleEnemy))
            .with_effect(EffectSpec::damage(8, TargetSpec::SingleEnemy));

        let report = resolve(&mut e, &card, imp, hero).unwrap();
        assert!(matches!(report.entries[0], ReportEntry::Effect(_)));
        assert!(matches!(report.entries[1], ReportEntry::Status(_)));
        // Vulnerable lands after the damage, so the hit is unmodified.
        assert_eq!(e.character(imp).unwrap().health(), 12);
    }

    #[test]
    fn test_unsupported_spec_skipped_rest_applies() {
        let (mut e, hero, imp) = setup();
        let card = Card::new(CardId::new(3), "Glitch", "Attack", 1)
            .with_effect(EffectSpec::new(EffectKind::Unknown, 5, TargetSpec::SingleEnemy))
            .with_effect(EffectSpec::damage(4, TargetSpec::SingleEnemy))
            .with_status(StatusSpec::new(StatusKind::Unknown, 1, 1, TargetSpec::SingleEnemy));

        let report = resolve(&mut e, &card, imp, hero).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].section, SpecSection::Effect);
        assert_eq!(report.skipped[0].index, 0);
        assert_eq!(report.skipped[1].section, SpecSection::Status);
        assert_eq!(e.character(imp).unwrap().health(), 16);
    }

    #[test]
    fn test_removed_after_defeat() {
        let (mut e, hero, imp) = setup();
        let card = Card::new(CardId::new(4), "Execute", "Attack", 1)
            .with_effect(EffectSpec::damage(50, TargetSpec::SingleEnemy))
            .with_status(StatusSpec::new(StatusKind::Poison, 2, 2, TargetSpec::AllEnemies));

        let report = resolve(&mut e, &card, imp, hero).unwrap();
        assert_eq!(report.defeated, vec![imp]);
        assert!(e.character(imp).is_none());
        // The poison found no live enemy.
        assert_eq!(report.skipped[0].reason, SkipReason::NoTargets);
    }

    #[test]
    fn test_check_has_no_side_effects() {
        let (e, hero, imp) = setup();
        let card = Card::new(CardId::new(5), "Big", "Attack", 5);
        let resolver = CardResolver::default();

        assert_eq!(
            resolver.check(&e, &card, imp, hero),
            Err(CombatError::InsufficientResources {
                required: 5,
                available: 3
            })
        );
    }
}
