//! Effect targeting.
//!
//! - `TargetSpec`: which characters a spec addresses, relative to the actor
//! - `TargetResolver`: expands a spec into concrete live characters
//!
//! Resolution always reads the roster fresh. Defeated characters pending
//! removal are never returned, and every result is de-duplicated.

use serde::{Deserialize, Serialize};

use crate::core::{CharacterId, CombatError, Encounter, Result, RosterIds, Side};

/// Target specification for an effect or status, relative to the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetSpec {
    /// The acting character.
    #[serde(rename = "Self")]
    SelfTarget,
    /// The clicked character, which must be on the opposing side.
    SingleEnemy,
    /// The clicked character, which must be on the actor's side.
    SingleAlly,
    /// Every live member of the opposing side.
    AllEnemies,
    /// Every live member of the actor's side, actor included.
    AllAllies,
    /// Every live character in the encounter.
    AllUnits,
}

impl TargetSpec {
    /// Whether this spec addresses the clicked character.
    #[must_use]
    pub const fn is_single(self) -> bool {
        matches!(self, TargetSpec::SingleEnemy | TargetSpec::SingleAlly)
    }

    /// Side the clicked character must belong to, for single specs.
    #[must_use]
    pub const fn expected_side(self, actor_side: Side) -> Option<Side> {
        match self {
            TargetSpec::SingleEnemy => Some(actor_side.opponent()),
            TargetSpec::SingleAlly => Some(actor_side),
            _ => None,
        }
    }
}

/// Expands a `TargetSpec` for one actor and one clicked character.
///
/// ## Example
///
/// ```
/// use deck_battler::character::Character;
/// use deck_battler::core::{Encounter, Side};
/// use deck_battler::effects::{TargetResolver, TargetSpec};
///
/// let mut encounter = Encounter::new();
/// let hero = encounter.add_character(Side::Acting, Character::new("Hero", 30, 3));
/// let imp = encounter.add_character(Side::Reacting, Character::new("Imp", 8, 2));
/// let bat = encounter.add_character(Side::Reacting, Character::new("Bat", 6, 2));
///
/// let resolver = TargetResolver::new(hero, imp);
/// assert_eq!(resolver.resolve(&encounter, TargetSpec::AllEnemies).as_slice(), &[imp, bat]);
/// assert!(resolver.validate(&encounter, TargetSpec::SingleAlly).is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TargetResolver {
    actor: CharacterId,
    clicked: CharacterId,
}

impl TargetResolver {
    #[must_use]
    pub fn new(actor: CharacterId, clicked: CharacterId) -> Self {
        Self { actor, clicked }
    }

    #[must_use]
    pub fn actor(&self) -> CharacterId {
        self.actor
    }

    #[must_use]
    pub fn clicked(&self) -> CharacterId {
        self.clicked
    }

    /// Check the clicked character against a single spec's expected side.
    ///
    /// Non-single specs always validate. A mismatch is a caller error and is
    /// never corrected silently.
    pub fn validate(&self, encounter: &Encounter, spec: TargetSpec) -> Result<()> {
        let actor = encounter.require(self.actor)?;
        let Some(expected) = spec.expected_side(actor.side()) else {
            return Ok(());
        };

        let clicked = encounter.require(self.clicked)?;
        if clicked.side() != expected || !clicked.is_alive() {
            return Err(CombatError::InvalidTarget {
                target: self.clicked,
                expected,
            });
        }
        Ok(())
    }

    /// Live, de-duplicated targets of `spec`, in roster order.
    ///
    /// A single spec whose clicked character is no longer valid (for example
    /// defeated by an earlier effect of the same card) resolves to nothing.
    #[must_use]
    pub fn resolve(&self, encounter: &Encounter, spec: TargetSpec) -> RosterIds {
        let Some(actor) = encounter.character(self.actor) else {
            return RosterIds::new();
        };
        let side = actor.side();

        let candidates: RosterIds = match spec {
            TargetSpec::SelfTarget => encounter
                .character(self.actor)
                .filter(|c| c.is_alive())
                .map(|c| c.id())
                .into_iter()
                .collect(),
            TargetSpec::SingleEnemy | TargetSpec::SingleAlly => {
                let expected = spec.expected_side(side);
                encounter
                    .character(self.clicked)
                    .filter(|c| c.is_alive() && Some(c.side()) == expected)
                    .map(|c| c.id())
                    .into_iter()
                    .collect()
            }
            TargetSpec::AllEnemies => encounter.live_ids(side.opponent()),
            TargetSpec::AllAllies => encounter.live_ids(side),
            TargetSpec::AllUnits => encounter.live_all().map(|c| c.id()).collect(),
        };

        let mut targets = RosterIds::new();
        for id in candidates {
            if !targets.contains(&id) {
                targets.push(id);
            }
        }
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;

    struct Fixture {
        encounter: Encounter,
        hero: CharacterId,
        ally: CharacterId,
        imp: CharacterId,
        bat: CharacterId,
    }

    fn fixture() -> Fixture {
        let mut encounter = Encounter::new();
        let hero = encounter.add_character(Side::Acting, Character::new("Hero", 30, 3));
        let imp = encounter.add_character(Side::Reacting, Character::new("Imp", 8, 2));
        let ally = encounter.add_character(Side::Acting, Character::new("Ally", 20, 3));
        let bat = encounter.add_character(Side::Reacting, Character::new("Bat", 6, 2));
        Fixture {
            encounter,
            hero,
            ally,
            imp,
            bat,
        }
    }

    #[test]
    fn test_self_target() {
        let f = fixture();
        let r = TargetResolver::new(f.hero, f.imp);
        assert_eq!(r.resolve(&f.encounter, TargetSpec::SelfTarget).as_slice(), &[f.hero]);
    }

    #[test]
    fn test_single_specs_validate_side() {
        let f = fixture();
        let r = TargetResolver::new(f.hero, f.imp);
        assert!(r.validate(&f.encounter, TargetSpec::SingleEnemy).is_ok());
        assert_eq!(
            r.validate(&f.encounter, TargetSpec::SingleAlly),
            Err(CombatError::InvalidTarget {
                target: f.imp,
                expected: Side::Acting,
            })
        );

        let r = TargetResolver::new(f.hero, f.ally);
        assert!(r.validate(&f.encounter, TargetSpec::SingleAlly).is_ok());
        assert_eq!(r.resolve(&f.encounter, TargetSpec::SingleAlly).as_slice(), &[f.ally]);
        assert!(r.resolve(&f.encounter, TargetSpec::SingleEnemy).is_empty());
    }

    #[test]
    fn test_group_specs_in_roster_order() {
        let f = fixture();
        let r = TargetResolver::new(f.hero, f.imp);
        assert_eq!(r.resolve(&f.encounter, TargetSpec::AllEnemies).as_slice(), &[f.imp, f.bat]);
        assert_eq!(r.resolve(&f.encounter, TargetSpec::AllAllies).as_slice(), &[f.hero, f.ally]);
        assert_eq!(
            r.resolve(&f.encounter, TargetSpec::AllUnits).as_slice(),
            &[f.hero, f.imp, f.ally, f.bat]
        );
    }

    #[test]
    fn test_reacting_actor_sees_mirrored_sides() {
        let f = fixture();
        let r = TargetResolver::new(f.bat, f.hero);
        assert!(r.validate(&f.encounter, TargetSpec::SingleEnemy).is_ok());
        assert_eq!(r.resolve(&f.encounter, TargetSpec::AllAllies).as_slice(), &[f.imp, f.bat]);
    }

    #[test]
    fn test_dead_characters_excluded() {
        let mut f = fixture();
        f.encounter.character_mut(f.imp).unwrap().modify_health(-100);

        let r = TargetResolver::new(f.hero, f.imp);
        assert!(r.validate(&f.encounter, TargetSpec::SingleEnemy).is_err());
        assert!(r.resolve(&f.encounter, TargetSpec::SingleEnemy).is_empty());
        assert_eq!(r.resolve(&f.encounter, TargetSpec::AllEnemies).as_slice(), &[f.bat]);
        assert_eq!(r.resolve(&f.encounter, TargetSpec::AllUnits).len(), 3);
    }

    #[test]
    fn test_unknown_clicked_character() {
        let f = fixture();
        let ghost = CharacterId::new(99);
        let r = TargetResolver::new(f.hero, ghost);
        assert_eq!(
            r.validate(&f.encounter, TargetSpec::SingleEnemy),
            Err(CombatError::UnknownCharacter(ghost))
        );
        assert!(r.validate(&f.encounter, TargetSpec::AllEnemies).is_ok());
    }
}
