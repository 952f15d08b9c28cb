//! Error taxonomy for the combat core.
//!
//! Nothing here is fatal. The worst outcome of any failure is that one card
//! or one spec does nothing; character state is never left half-updated.
//!
//! AI "pass" outcomes (no eligible card, no eligible target) are not errors
//! and live in [`crate::ai::AiStop`].

use thiserror::Error;

use super::entity::{CharacterId, Side};
use crate::effects::EffectKind;
use crate::statuses::StatusKind;
use crate::turn::TurnState;

pub type Result<T> = std::result::Result<T, CombatError>;

/// How a caller is expected to react to an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// The caller may re-prompt, pick another card, or skip.
    Recoverable,
    /// The request itself was malformed and must not be retried unchanged.
    Validation,
    /// A card or status definition is broken. Surface a diagnostic.
    Content,
}

impl ErrorSeverity {
    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Content => "content",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("card costs {required} action points but only {available} are available")]
    InsufficientResources { required: u32, available: u32 },

    #[error("{target} is not a valid target: expected a member of the {expected}")]
    InvalidTarget { target: CharacterId, expected: Side },

    #[error("no resolution logic registered for effect kind {0:?}")]
    UnsupportedEffectKind(EffectKind),

    #[error("no resolution logic registered for status kind {0:?}")]
    UnsupportedStatusKind(StatusKind),

    #[error("{0} is not part of this encounter")]
    UnknownCharacter(CharacterId),

    #[error("{0} has been defeated and cannot act")]
    DefeatedActor(CharacterId),

    #[error("{id} does not belong to the {side}")]
    NotOnSide { id: CharacterId, side: Side },

    #[error("operation requires {expected:?} but the turn is {actual:?}")]
    WrongTurn { expected: TurnState, actual: TurnState },
}

impl CombatError {
    /// Classify this error for handling and logging.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientResources { .. } | Self::WrongTurn { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::UnsupportedEffectKind(_) | Self::UnsupportedStatusKind(_) => {
                ErrorSeverity::Content
            }
            Self::InvalidTarget { .. }
            | Self::UnknownCharacter(_)
            | Self::DefeatedActor(_)
            | Self::NotOnSide { .. } => ErrorSeverity::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_classification() {
        let err = CombatError::InsufficientResources {
            required: 2,
            available: 1,
        };
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);

        let err = CombatError::InvalidTarget {
            target: CharacterId::new(3),
            expected: Side::Reacting,
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);

        let err = CombatError::UnsupportedStatusKind(StatusKind::Poison);
        assert_eq!(err.severity(), ErrorSeverity::Content);
        assert_eq!(err.severity().as_str(), "content");
    }

    #[test]
    fn test_display() {
        let err = CombatError::InsufficientResources {
            required: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "card costs 2 action points but only 1 are available"
        );
    }
}
