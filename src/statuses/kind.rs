//! Status kinds and their buff/debuff classification.

use serde::{Deserialize, Serialize};

/// Whether a status helps or hinders its bearer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Buff,
    Debuff,
    /// Unclassified content. Matches neither buff nor debuff queries.
    Neutral,
}

/// Kinds of status a card can apply.
///
/// Names that do not match a known kind deserialize to `Unknown`, which no
/// catalog registers, so broken content is skipped instead of rejected at
/// load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    /// Temporary defense that absorbs damage.
    Block,
    /// Loses health at the end of each of its bearer's turns.
    Poison,
    /// Deals reduced damage.
    Weak,
    /// Takes increased damage.
    Vulnerable,
    /// Strength raised while active.
    Strengthened,
    /// Dexterity lowered while active.
    Destabilized,
    /// Maximum action points lowered while active.
    Exhausted,
    #[serde(other)]
    Unknown,
}

impl StatusKind {
    /// Every kind the standard catalog registers.
    pub const KNOWN: [StatusKind; 7] = [
        StatusKind::Block,
        StatusKind::Poison,
        StatusKind::Weak,
        StatusKind::Vulnerable,
        StatusKind::Strengthened,
        StatusKind::Destabilized,
        StatusKind::Exhausted,
    ];

    /// Buff/debuff classification, fixed per kind.
    #[must_use]
    pub const fn polarity(self) -> Polarity {
        match self {
            StatusKind::Block | StatusKind::Strengthened => Polarity::Buff,
            StatusKind::Poison
            | StatusKind::Weak
            | StatusKind::Vulnerable
            | StatusKind::Destabilized
            | StatusKind::Exhausted => Polarity::Debuff,
            StatusKind::Unknown => Polarity::Neutral,
        }
    }

    #[must_use]
    pub const fn is_buff(self) -> bool {
        matches!(self.polarity(), Polarity::Buff)
    }

    #[must_use]
    pub const fn is_debuff(self) -> bool {
        matches!(self.polarity(), Polarity::Debuff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity() {
        assert!(StatusKind::Block.is_buff());
        assert!(StatusKind::Strengthened.is_buff());
        assert!(StatusKind::Poison.is_debuff());
        assert!(StatusKind::Exhausted.is_debuff());
        assert_eq!(StatusKind::Unknown.polarity(), Polarity::Neutral);
    }

    #[test]
    fn test_known_kinds_are_classified() {
        for kind in StatusKind::KNOWN {
            assert_ne!(kind.polarity(), Polarity::Neutral, "{:?}", kind);
        }
    }

    #[test]
    fn test_unknown_name_deserializes() {
        let kind: StatusKind = serde_json::from_str(r#""Frozen""#).unwrap();
        assert_eq!(kind, StatusKind::Unknown);

        let kind: StatusKind = serde_json::from_str(r#""Weak""#).unwrap();
        assert_eq!(kind, StatusKind::Weak);
    }
}
