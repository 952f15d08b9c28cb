//! Effect conditions.

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::core::PlayRecord;
use crate::statuses::StatusKind;

/// Gate on an `EffectSpec`.
///
/// Conditions are pure predicates. Unrecognized conditions deserialize to
/// `Unknown` and fail closed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Always passes.
    #[default]
    None,
    /// The most recently played card's declared type matches (ASCII case-insensitive).
    LastActionWasOfCardKind(String),
    /// The target carries a status of this kind.
    TargetHasStatus(StatusKind),
    /// The target's health is below `threshold` percent of its maximum.
    TargetHealthBelow,
    /// The target carries any buff.
    TargetHasBuff,
    /// The target carries any debuff.
    TargetHasDebuff,
    #[serde(other)]
    Unknown,
}

/// Inputs a condition is evaluated against.
#[derive(Clone, Copy, Debug)]
pub struct ConditionContext<'a> {
    /// Candidate target of the gated effect.
    pub target: &'a Character,
    /// The effect's `condition_threshold`.
    pub threshold: i32,
    /// The card played before the one being resolved, if any.
    pub last_played: Option<&'a PlayRecord>,
}

impl<'a> ConditionContext<'a> {
    #[must_use]
    pub fn new(target: &'a Character, threshold: i32, last_played: Option<&'a PlayRecord>) -> Self {
        Self {
            target,
            threshold,
            last_played,
        }
    }
}

impl Condition {
    /// Evaluate against a candidate target.
    ///
    /// ```
    /// use deck_battler::character::Character;
    /// use deck_battler::conditions::{Condition, ConditionContext};
    ///
    /// let wounded = Character::new("Wounded", 20, 3).with_health(5);
    /// let ctx = ConditionContext::new(&wounded, 50, None);
    ///
    /// assert!(Condition::TargetHealthBelow.evaluate(&ctx));
    /// assert!(!Condition::TargetHasDebuff.evaluate(&ctx));
    /// assert!(!Condition::Unknown.evaluate(&ctx));
    /// ```
    #[must_use]
    pub fn evaluate(&self, ctx: &ConditionContext<'_>) -> bool {
        match self {
            Condition::None => true,
            Condition::LastActionWasOfCardKind(kind) => {
                ctx.last_played.is_some_and(|record| record.is_of_kind(kind))
            }
            Condition::TargetHasStatus(kind) => ctx.target.has_status(*kind),
            Condition::TargetHealthBelow => {
                let percent = u32::try_from(ctx.threshold).unwrap_or(0);
                ctx.target.health_below_percent(percent)
            }
            Condition::TargetHasBuff => ctx.target.has_buff(),
            Condition::TargetHasDebuff => ctx.target.has_debuff(),
            Condition::Unknown => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::{CharacterId, Side};

    fn record(card_type: &str) -> PlayRecord {
        PlayRecord::new(CardId::new(1), card_type, CharacterId::new(0), Side::Acting, 1, 0)
    }

    #[test]
    fn test_none_always_passes() {
        let c = Character::new("C", 10, 1);
        assert!(Condition::None.evaluate(&ConditionContext::new(&c, 0, None)));
    }

    #[test]
    fn test_last_action_kind() {
        let c = Character::new("C", 10, 1);
        let attack = record("Attack");
        let cond = Condition::LastActionWasOfCardKind("attack".into());

        assert!(!cond.evaluate(&ConditionContext::new(&c, 0, None)));
        assert!(cond.evaluate(&ConditionContext::new(&c, 0, Some(&attack))));

        let skill = record("Skill");
        assert!(!cond.evaluate(&ConditionContext::new(&c, 0, Some(&skill))));
    }

    #[test]
    fn test_health_below_uses_ratio() {
        let c = Character::new("C", 40, 1).with_health(10);
        let cond = Condition::TargetHealthBelow;

        assert!(cond.evaluate(&ConditionContext::new(&c, 30, None)));
        assert!(!cond.evaluate(&ConditionContext::new(&c, 25, None)));
        assert!(!cond.evaluate(&ConditionContext::new(&c, -5, None)));
    }

    #[test]
    fn test_status_queries() {
        let mut c = Character::new("C", 10, 1);
        let ctx_has = |c: &Character, cond: &Condition| cond.evaluate(&ConditionContext::new(c, 0, None));

        assert!(!ctx_has(&c, &Condition::TargetHasStatus(StatusKind::Poison)));
        c.add_or_refresh_status(StatusKind::Poison, 2, 1);
        assert!(ctx_has(&c, &Condition::TargetHasStatus(StatusKind::Poison)));
        assert!(ctx_has(&c, &Condition::TargetHasDebuff));
        assert!(!ctx_has(&c, &Condition::TargetHasBuff));
    }

    #[test]
    fn test_unknown_fails_closed() {
        let c = Character::new("C", 10, 1);
        let cond: Condition = serde_json::from_str(r#""TargetIsBoss""#).unwrap();
        assert_eq!(cond, Condition::Unknown);
        assert!(!cond.evaluate(&ConditionContext::new(&c, 0, None)));
    }
}
