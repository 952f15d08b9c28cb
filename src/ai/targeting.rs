//! Target selection for AI plays.
//!
//! Enemy priority:
//! 1. Attack cards: a Vulnerable opponent, else any debuffed opponent
//! 2. Debuff cards: an opponent without a debuff (spread, don't stack)
//! 3. then lowest block, then lowest health ratio, then earliest roster order
//!
//! Cards aimed at a single ally go to the ally with the lowest health ratio.

use std::cmp::Ordering;

use super::category::ActionCategory;
use crate::cards::Card;
use crate::character::Character;
use crate::core::{CharacterId, Encounter};
use crate::statuses::StatusKind;

/// Compare health ratios without floating point.
fn ratio_cmp(a: &Character, b: &Character) -> Ordering {
    let left = i64::from(a.health()) * i64::from(b.max_health());
    let right = i64::from(b.health()) * i64::from(a.max_health());
    left.cmp(&right)
}

/// Lowest block, then lowest health ratio. `min_by` keeps the earliest on ties.
fn softest<'a>(candidates: impl Iterator<Item = &'a Character>) -> Option<&'a Character> {
    candidates.min_by(|a, b| a.block().cmp(&b.block()).then_with(|| ratio_cmp(a, b)))
}

/// Choose the clicked character for `card` played by `actor`.
///
/// Returns `None` when no live character fits.
#[must_use]
pub fn select_target(
    encounter: &Encounter,
    actor: &Character,
    card: &Card,
    category: ActionCategory,
) -> Option<CharacterId> {
    if card.targets_ally() {
        return encounter
            .live_members(actor.side())
            .min_by(|a, b| ratio_cmp(a, b))
            .map(Character::id);
    }

    let enemies: Vec<&Character> = encounter.live_members(actor.side().opponent()).collect();
    if enemies.is_empty() {
        // Self and group cards still resolve with no opponent to click.
        return (!card.requires_target()).then(|| actor.id());
    }

    let preferred: Vec<&Character> = match category {
        ActionCategory::Attack => {
            let vulnerable: Vec<_> = enemies
                .iter()
                .copied()
                .filter(|c| c.has_status(StatusKind::Vulnerable))
                .collect();
            if vulnerable.is_empty() {
                enemies.iter().copied().filter(|c| c.has_debuff()).collect()
            } else {
                vulnerable
            }
        }
        ActionCategory::Debuff => enemies.iter().copied().filter(|c| !c.has_debuff()).collect(),
        _ => Vec::new(),
    };

    let pool = if preferred.is_empty() { enemies } else { preferred };
    softest(pool.into_iter()).map(Character::id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, EffectSpec, StatusSpec};
    use crate::core::Side;
    use crate::effects::TargetSpec;

    fn attack() -> Card {
        Card::new(CardId::new(1), "Strike", "Attack", 1).with_effect(EffectSpec::damage(5, TargetSpec::SingleEnemy))
    }

    fn setup() -> (Encounter, CharacterId, [CharacterId; 3]) {
        let mut e = Encounter::new();
        let a = e.add_character(Side::Acting, Character::new("A", 30, 3));
        let b = e.add_character(Side::Acting, Character::new("B", 30, 3));
        let c = e.add_character(Side::Acting, Character::new("C", 30, 3));
        let me = e.add_character(Side::Reacting, Character::new("Me", 20, 3));
        (e, me, [a, b, c])
    }

    #[test]
    fn test_ties_go_to_roster_order() {
        let (e, me, [a, _, _]) = setup();
        let actor = e.character(me).unwrap();
        assert_eq!(select_target(&e, actor, &attack(), ActionCategory::Attack), Some(a));
    }

    #[test]
    fn test_attack_prefers_vulnerable_then_debuffed() {
        let (mut e, me, [_, b, c]) = setup();
        e.character_mut(b).unwrap().add_or_refresh_status(StatusKind::Weak, 2, 1);
        let actor = e.character(me).unwrap().clone();
        assert_eq!(select_target(&e, &actor, &attack(), ActionCategory::Attack), Some(b));

        e.character_mut(c).unwrap().add_or_refresh_status(StatusKind::Vulnerable, 2, 1);
        assert_eq!(select_target(&e, &actor, &attack(), ActionCategory::Attack), Some(c));
    }

    #[test]
    fn test_debuff_spreads() {
        let (mut e, me, [a, b, _]) = setup();
        e.character_mut(a).unwrap().add_or_refresh_status(StatusKind::Poison, 2, 1);
        let actor = e.character(me).unwrap().clone();
        let sap = Card::new(CardId::new(2), "Sap", "Debuff", 1)
            .with_status(StatusSpec::new(StatusKind::Weak, 2, 1, TargetSpec::SingleEnemy));

        assert_eq!(select_target(&e, &actor, &sap, ActionCategory::Debuff), Some(b));
    }

    #[test]
    fn test_block_then_ratio() {
        let (mut e, me, [a, b, c]) = setup();
        e.character_mut(a).unwrap().gain_block(5);
        e.character_mut(b).unwrap().modify_health(-10);
        e.character_mut(c).unwrap().modify_health(-20);
        let actor = e.character(me).unwrap().clone();

        assert_eq!(select_target(&e, &actor, &attack(), ActionCategory::Attack), Some(c));

        e.character_mut(c).unwrap().gain_block(1);
        assert_eq!(select_target(&e, &actor, &attack(), ActionCategory::Attack), Some(b));
    }

    #[test]
    fn test_ally_cards_pick_weakest_ally() {
        let mut e = Encounter::new();
        e.add_character(Side::Acting, Character::new("Foe", 30, 3));
        let me = e.add_character(Side::Reacting, Character::new("Me", 20, 3).with_health(15));
        let friend = e.add_character(Side::Reacting, Character::new("Friend", 40, 3).with_health(10));
        let mend = Card::new(CardId::new(3), "Mend", "Heal", 1).with_effect(EffectSpec::heal(5, TargetSpec::SingleAlly));

        let actor = e.character(me).unwrap().clone();
        assert_eq!(select_target(&e, &actor, &mend, ActionCategory::Heal), Some(friend));
    }

    #[test]
    fn test_no_enemies() {
        let mut e = Encounter::new();
        let me = e.add_character(Side::Reacting, Character::new("Me", 20, 3));
        let actor = e.character(me).unwrap().clone();

        assert_eq!(select_target(&e, &actor, &attack(), ActionCategory::Attack), None);

        let guard = Card::new(CardId::new(4), "Guard", "Defense", 1)
            .with_status(StatusSpec::new(StatusKind::Block, 1, 5, TargetSpec::SelfTarget));
        assert_eq!(select_target(&e, &actor, &guard, ActionCategory::Defense), Some(me));
    }
}
