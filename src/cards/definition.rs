//! Card definitions - immutable card content.
//!
//! A `Card` carries a cost, an ordered list of `EffectSpec`s and an ordered
//! list of `StatusSpec`s, plus the text the AI categorizes it by (declared
//! type, description, keywords). Nothing on a card changes during combat.

use serde::{Deserialize, Serialize};

use super::spec::{EffectSpec, StatusSpec};
use crate::effects::{EffectKind, TargetSpec};

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deck_battler::cards::{Card, CardId, EffectSpec, StatusSpec};
/// use deck_battler::effects::TargetSpec;
/// use deck_battler::statuses::StatusKind;
///
/// let bash = Card::new(CardId::new(1), "Bash", "Attack", 2)
///     .with_description("Deal 8 damage. Apply 2 Vulnerable.")
///     .with_effect(EffectSpec::damage(8, TargetSpec::SingleEnemy))
///     .with_status(StatusSpec::new(StatusKind::Vulnerable, 2, 1, TargetSpec::SingleEnemy));
///
/// assert_eq!(bash.cost, 2);
/// assert!(bash.requires_target());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Declared type text ("Attack", "Skill", ...). Compared by kind conditions.
    pub card_type: String,

    #[serde(default)]
    pub description: String,

    /// Thematic tags ("poison", "fire", ...).
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Action point cost.
    pub cost: u32,

    /// Effects, resolved in declaration order.
    #[serde(default)]
    pub effects: Vec<EffectSpec>,

    /// Statuses, applied in declaration order after every effect.
    #[serde(default)]
    pub statuses: Vec<StatusSpec>,
}

impl Card {
    /// Create a card with no effects.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: impl Into<String>, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            card_type: card_type.into(),
            description: String::new(),
            keywords: Vec::new(),
            cost,
            effects: Vec::new(),
            statuses: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: EffectSpec) -> Self {
        self.effects.push(effect);
        self
    }

    /// Append a status (builder pattern).
    #[must_use]
    pub fn with_status(mut self, status: StatusSpec) -> Self {
        self.statuses.push(status);
        self
    }

    /// Every target specification on the card, effects first.
    pub fn targets(&self) -> impl Iterator<Item = TargetSpec> + '_ {
        self.effects
            .iter()
            .map(|e| e.target)
            .chain(self.statuses.iter().map(|s| s.target))
    }

    /// Whether any spec targets a single clicked character.
    #[must_use]
    pub fn requires_target(&self) -> bool {
        self.targets().any(TargetSpec::is_single)
    }

    /// Whether any spec targets a single ally.
    #[must_use]
    pub fn targets_ally(&self) -> bool {
        self.targets().any(|t| t == TargetSpec::SingleAlly)
    }

    #[must_use]
    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statuses::StatusKind;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_builder_keeps_declaration_order() {
        let card = Card::new(CardId::new(1), "Combo", "Attack", 1)
            .with_effect(EffectSpec::damage(3, TargetSpec::SingleEnemy))
            .with_effect(EffectSpec::heal(2, TargetSpec::SelfTarget))
            .with_status(StatusSpec::new(StatusKind::Weak, 1, 1, TargetSpec::AllEnemies));

        assert_eq!(card.effects[0].kind, EffectKind::Damage);
        assert_eq!(card.effects[1].kind, EffectKind::Heal);
        assert_eq!(card.statuses.len(), 1);
        assert!(card.has_effect(EffectKind::Heal));
        assert!(!card.has_effect(EffectKind::DrawCards));
    }

    #[test]
    fn test_target_queries() {
        let aoe = Card::new(CardId::new(2), "Cleave", "Attack", 1)
            .with_effect(EffectSpec::damage(4, TargetSpec::AllEnemies));
        assert!(!aoe.requires_target());

        let mend = Card::new(CardId::new(3), "Mend", "Skill", 1)
            .with_effect(EffectSpec::heal(6, TargetSpec::SingleAlly));
        assert!(mend.requires_target());
        assert!(mend.targets_ally());
    }

    #[test]
    fn test_card_from_json() {
        let json = r#"{
            "id": 7,
            "name": "Toxic Dart",
            "card_type": "Attack",
            "keywords": ["poison"],
            "cost": 1,
            "effects": [
                { "kind": "Damage", "magnitude": 3, "target": "SingleEnemy" }
            ],
            "statuses": [
                { "kind": "Poison", "duration": 3, "intensity": 2, "target": "SingleEnemy" }
            ]
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.id, CardId::new(7));
        assert_eq!(card.keywords, vec!["poison".to_string()]);
        assert_eq!(card.effects[0].magnitude, 3);
        assert_eq!(card.statuses[0].kind, StatusKind::Poison);
        assert!(card.description.is_empty());
    }
}
