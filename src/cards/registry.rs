//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition of an encounter's
//! content set and provides lookup by `CardId`.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use deck_battler::cards::{Card, CardId, CardRegistry, EffectSpec};
/// use deck_battler::effects::TargetSpec;
///
/// let mut registry = CardRegistry::new();
/// registry.register(
///     Card::new(CardId::new(1), "Strike", "Attack", 1)
///         .with_effect(EffectSpec::damage(6, TargetSpec::SingleEnemy)),
/// );
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    next_id: u32,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Returns the definition previously stored under the same ID, if any.
    pub fn register(&mut self, card: Card) -> Option<Card> {
        self.next_id = self.next_id.max(card.id.raw().saturating_add(1));
        self.cards.insert(card.id, card)
    }

    /// Register a card built around an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_with(&mut self, build: impl FnOnce(CardId) -> Card) -> CardId {
        let id = CardId::new(self.next_id);
        let mut card = build(id);
        card.id = id;
        self.register(card);
        id
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Clone the definitions for `ids`, in the given order, skipping unknown IDs.
    ///
    /// Used to hand a character's card pool to the AI.
    #[must_use]
    pub fn pool(&self, ids: &[CardId]) -> Vec<Card> {
        ids.iter().filter_map(|id| self.get(*id)).cloned().collect()
    }

    /// Find cards by declared type, ignoring ASCII case.
    pub fn find_by_type<'a>(&'a self, card_type: &'a str) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards
            .values()
            .filter(move |c| c.card_type.eq_ignore_ascii_case(card_type))
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

impl FromIterator<Card> for CardRegistry {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut registry = Self::new();
        for card in iter {
            registry.register(card);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        assert!(registry.register(Card::new(CardId::new(1), "Test Card", "Skill", 1)).is_none());

        assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Test Card");
        assert!(registry.get(CardId::new(99)).is_none());
    }

    #[test]
    fn test_register_with_auto_id() {
        let mut registry = CardRegistry::new();
        registry.register(Card::new(CardId::new(4), "Fixed", "Skill", 0));

        let a = registry.register_with(|id| Card::new(id, "A", "Attack", 1));
        let b = registry.register_with(|id| Card::new(id, "B", "Attack", 1));

        assert_eq!(a, CardId::new(5));
        assert_eq!(b, CardId::new(6));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_id_replaces() {
        let mut registry = CardRegistry::new();
        registry.register(Card::new(CardId::new(1), "Old", "Skill", 1));
        let previous = registry.register(Card::new(CardId::new(1), "New", "Skill", 1));

        assert_eq!(previous.unwrap().name, "Old");
        assert_eq!(registry.get(CardId::new(1)).unwrap().name, "New");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_by_type() {
        let registry: CardRegistry = vec![
            Card::new(CardId::new(1), "Strike", "Attack", 1),
            Card::new(CardId::new(2), "Defend", "Skill", 1),
            Card::new(CardId::new(3), "Bash", "attack", 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(registry.find_by_type("Attack").count(), 2);
        assert_eq!(registry.find_by_type("skill").count(), 1);
        assert_eq!(registry.find(|c| c.cost >= 2).count(), 1);
    }

    #[test]
    fn test_pool_keeps_order() {
        let registry: CardRegistry = (0..4)
            .map(|i| Card::new(CardId::new(i), format!("C{}", i), "Attack", 1))
            .collect();

        let pool = registry.pool(&[CardId::new(3), CardId::new(9), CardId::new(0)]);
        let names: Vec<_> = pool.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C3", "C0"]);
    }
}
