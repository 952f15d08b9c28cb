//! Primary character attributes.
//!
//! Four named attributes feed combat math and status effects:
//! - `Strength`: added to outgoing damage
//! - `Dexterity`: lowered by Destabilized
//! - `Intelligence`, `Luck`: carried for content, not read by the core

use serde::{Deserialize, Serialize};

/// One of the primary attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Strength,
    Dexterity,
    Intelligence,
    Luck,
}

impl AttributeKind {
    /// All attribute kinds in declaration order.
    pub const ALL: [AttributeKind; 4] = [
        AttributeKind::Strength,
        AttributeKind::Dexterity,
        AttributeKind::Intelligence,
        AttributeKind::Luck,
    ];
}

/// A character's attribute values.
///
/// ```
/// use deck_battler::character::{AttributeKind, Attributes};
///
/// let attrs = Attributes::default().with(AttributeKind::Strength, 3);
/// assert_eq!(attrs.get(AttributeKind::Strength), 3);
/// assert_eq!(attrs.get(AttributeKind::Luck), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub dexterity: i32,
    #[serde(default)]
    pub intelligence: i32,
    #[serde(default)]
    pub luck: i32,
}

impl Attributes {
    /// Create attributes from explicit values.
    #[must_use]
    pub const fn new(strength: i32, dexterity: i32, intelligence: i32, luck: i32) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
            luck,
        }
    }

    /// Set one attribute (builder pattern).
    #[must_use]
    pub fn with(mut self, kind: AttributeKind, value: i32) -> Self {
        *self.slot_mut(kind) = value;
        self
    }

    /// Read one attribute.
    #[must_use]
    pub fn get(&self, kind: AttributeKind) -> i32 {
        match kind {
            AttributeKind::Strength => self.strength,
            AttributeKind::Dexterity => self.dexterity,
            AttributeKind::Intelligence => self.intelligence,
            AttributeKind::Luck => self.luck,
        }
    }

    /// Add `delta` to one attribute and return the new value.
    pub fn modify(&mut self, kind: AttributeKind, delta: i32) -> i32 {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(delta);
        *slot
    }

    fn slot_mut(&mut self, kind: AttributeKind) -> &mut i32 {
        match kind {
            AttributeKind::Strength => &mut self.strength,
            AttributeKind::Dexterity => &mut self.dexterity,
            AttributeKind::Intelligence => &mut self.intelligence,
            AttributeKind::Luck => &mut self.luck,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_modify() {
        let mut attrs = Attributes::new(1, 2, 3, 4);
        assert_eq!(attrs.get(AttributeKind::Dexterity), 2);

        assert_eq!(attrs.modify(AttributeKind::Dexterity, -5), -3);
        assert_eq!(attrs.get(AttributeKind::Dexterity), -3);
        assert_eq!(attrs.get(AttributeKind::Strength), 1);
    }

    #[test]
    fn test_modify_roundtrip() {
        let mut attrs = Attributes::default();
        for kind in AttributeKind::ALL {
            attrs.modify(kind, 4);
            attrs.modify(kind, -4);
        }
        assert_eq!(attrs, Attributes::default());
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let attrs: Attributes = serde_json::from_str(r#"{ "strength": 2 }"#).unwrap();
        assert_eq!(attrs, Attributes::default().with(AttributeKind::Strength, 2));
    }
}
