//! Decision engine configuration.

use serde::{Deserialize, Serialize};

use super::category::ActionCategory;

/// Words that mark a card as belonging to a category.
///
/// Matched against the card's declared type, its keywords, and the words of
/// its description, ASCII case-insensitive and whole-word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: ActionCategory,
    pub words: Vec<String>,
}

impl CategoryRule {
    #[must_use]
    pub fn new(category: ActionCategory, words: &[&str]) -> Self {
        Self {
            category,
            words: words.iter().map(|w| w.to_ascii_lowercase()).collect(),
        }
    }

    /// Whether `word` is one of this rule's words.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }
}

/// AI decision engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Below this health percent the engine looks for Heal, then Defense.
    pub low_health_percent: u32,

    /// Above this health percent, with no debuffed opponent, the engine
    /// opens with a Debuff.
    pub high_health_percent: u32,

    /// How many of the side's most recent plays synergy looks back over.
    pub synergy_window: usize,

    /// Upper bound on plays per character per turn (guards zero-cost loops).
    pub max_plays_per_character: u32,

    /// Classification rules, checked in order. First match wins.
    pub category_rules: Vec<CategoryRule>,

    /// Symmetric category pairs that synergize.
    pub category_synergies: Vec<(ActionCategory, ActionCategory)>,

    /// Symmetric keyword pairs that synergize.
    pub keyword_synergies: Vec<(String, String)>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            low_health_percent: 30,
            high_health_percent: 70,
            synergy_window: 3,
            max_plays_per_character: 12,
            category_rules: vec![
                CategoryRule::new(
                    ActionCategory::Heal,
                    &["heal", "heals", "restore", "restores", "mend", "recover", "regenerate"],
                ),
                CategoryRule::new(
                    ActionCategory::Defense,
                    &["defense", "defend", "block", "shield", "guard", "armor", "parry"],
                ),
                CategoryRule::new(
                    ActionCategory::Debuff,
                    &[
                        "debuff", "weak", "weaken", "vulnerable", "poison", "curse", "hex",
                        "destabilize", "exhausted",
                    ],
                ),
                CategoryRule::new(
                    ActionCategory::Buff,
                    &["buff", "power", "strength", "strengthen", "empower", "focus"],
                ),
                CategoryRule::new(
                    ActionCategory::Attack,
                    &["attack", "strike", "damage", "slash", "hit", "bash", "stab"],
                ),
            ],
            category_synergies: vec![
                (ActionCategory::Debuff, ActionCategory::Attack),
                (ActionCategory::Buff, ActionCategory::Attack),
                (ActionCategory::Defense, ActionCategory::Buff),
            ],
            keyword_synergies: vec![
                ("poison".into(), "poison".into()),
                ("fire".into(), "burn".into()),
                ("frost".into(), "ice".into()),
                ("shadow".into(), "curse".into()),
            ],
        }
    }
}

impl AiConfig {
    /// Set the health thresholds (percent).
    #[must_use]
    pub fn with_thresholds(mut self, low: u32, high: u32) -> Self {
        self.low_health_percent = low;
        self.high_health_percent = high;
        self
    }

    #[must_use]
    pub fn with_synergy_window(mut self, window: usize) -> Self {
        self.synergy_window = window;
        self
    }

    #[must_use]
    pub fn with_max_plays(mut self, plays: u32) -> Self {
        self.max_plays_per_character = plays;
        self
    }

    /// Whether two categories form a synergy pair (in either order).
    #[must_use]
    pub fn categories_synergize(&self, a: ActionCategory, b: ActionCategory) -> bool {
        self.category_synergies
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    /// Whether two keywords form a synergy pair (in either order, ASCII case-insensitive).
    #[must_use]
    pub fn keywords_synergize(&self, a: &str, b: &str) -> bool {
        self.keyword_synergies.iter().any(|(x, y)| {
            (x.eq_ignore_ascii_case(a) && y.eq_ignore_ascii_case(b))
                || (x.eq_ignore_ascii_case(b) && y.eq_ignore_ascii_case(a))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = AiConfig::default();
        assert_eq!(config.low_health_percent, 30);
        assert_eq!(config.high_health_percent, 70);
        assert_eq!(config.synergy_window, 3);
    }

    #[test]
    fn test_synergy_is_symmetric() {
        let config = AiConfig::default();
        assert!(config.categories_synergize(ActionCategory::Debuff, ActionCategory::Attack));
        assert!(config.categories_synergize(ActionCategory::Attack, ActionCategory::Debuff));
        assert!(!config.categories_synergize(ActionCategory::Heal, ActionCategory::Attack));

        assert!(config.keywords_synergize("Burn", "fire"));
        assert!(config.keywords_synergize("poison", "POISON"));
        assert!(!config.keywords_synergize("fire", "ice"));
    }

    #[test]
    fn test_builder() {
        let config = AiConfig::default().with_thresholds(20, 90).with_max_plays(4);
        assert_eq!(config.low_health_percent, 20);
        assert_eq!(config.high_health_percent, 90);
        assert_eq!(config.max_plays_per_character, 4);
    }

    #[test]
    fn test_partial_json() {
        let config: AiConfig = serde_json::from_str(r#"{ "low_health_percent": 50 }"#).unwrap();
        assert_eq!(config.low_health_percent, 50);
        assert_eq!(config.category_rules.len(), 5);
    }
}
