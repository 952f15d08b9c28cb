//! Card categorization.
//!
//! Categories come from content, never from card names:
//! 1. the declared card type, against category names and rule words
//! 2. the card's keywords, against rule words
//! 3. the words of the description, against rule words
//! 4. the card's structure (what its first effect or status does)

use serde::{Deserialize, Serialize};

use super::config::CategoryRule;
use crate::cards::Card;
use crate::effects::{EffectKind, TargetSpec};
use crate::statuses::{Polarity, StatusKind};

/// Coarse role of a card, as the AI sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionCategory {
    Attack,
    Defense,
    Debuff,
    Heal,
    Buff,
}

impl ActionCategory {
    pub const ALL: [ActionCategory; 5] = [
        ActionCategory::Attack,
        ActionCategory::Defense,
        ActionCategory::Debuff,
        ActionCategory::Heal,
        ActionCategory::Buff,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionCategory::Attack => "attack",
            ActionCategory::Defense => "defense",
            ActionCategory::Debuff => "debuff",
            ActionCategory::Heal => "heal",
            ActionCategory::Buff => "buff",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

/// Categorize a card with the given rules.
#[must_use]
pub fn categorize(card: &Card, rules: &[CategoryRule]) -> ActionCategory {
    if let Some(category) = ActionCategory::from_name(card.card_type.trim()) {
        return category;
    }
    match_words(rules, words(&card.card_type))
        .or_else(|| match_words(rules, card.keywords.iter().map(String::as_str)))
        .or_else(|| match_words(rules, words(&card.description)))
        .unwrap_or_else(|| structural(card))
}

/// First rule (in rule order) with a word among `words`.
fn match_words<'a>(rules: &[CategoryRule], words: impl Iterator<Item = &'a str>) -> Option<ActionCategory> {
    let words: Vec<&str> = words.filter(|w| !w.is_empty()).collect();
    rules
        .iter()
        .find(|rule| words.iter().any(|w| rule.matches(w)))
        .map(|rule| rule.category)
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
}

fn structural(card: &Card) -> ActionCategory {
    if let Some(effect) = card.effects.first() {
        match effect.kind {
            EffectKind::Damage => return ActionCategory::Attack,
            EffectKind::Heal => return ActionCategory::Heal,
            _ => {}
        }
    }
    if let Some(status) = card.statuses.first() {
        if status.kind == StatusKind::Block {
            return ActionCategory::Defense;
        }
        let at_enemies = matches!(status.target, TargetSpec::SingleEnemy | TargetSpec::AllEnemies);
        return match status.kind.polarity() {
            Polarity::Debuff if at_enemies => ActionCategory::Debuff,
            Polarity::Buff => ActionCategory::Buff,
            _ if at_enemies => ActionCategory::Debuff,
            _ => ActionCategory::Buff,
        };
    }
    if card.has_effect(EffectKind::Damage) {
        ActionCategory::Attack
    } else {
        ActionCategory::Buff
    }
}
