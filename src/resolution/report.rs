//! Resolution reports.
//!
//! A `ResolutionReport` is the ordered record of everything one card play
//! did. It is built while state changes are applied and handed to the
//! presentation collaborator afterwards, so animation can be sequenced
//! against it without holding up the combat state.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{CharacterId, CombatError};
use crate::effects::EffectKind;
use crate::statuses::StatusKind;

/// One effect applied to one target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedEffect {
    pub kind: EffectKind,
    pub target: CharacterId,
    /// Magnitude after damage modifiers.
    pub magnitude: i32,
    /// Amount that actually landed (after block and clamping).
    pub applied: i32,
    /// Damage soaked by block.
    pub absorbed: i32,
    /// Cards the deck collaborator returned for a DrawCards effect.
    pub drawn: Vec<CardId>,
}

/// One status applied or refreshed on one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedStatus {
    pub kind: StatusKind,
    pub target: CharacterId,
    /// Remaining duration after application.
    pub remaining: u32,
    /// Intensity after application.
    pub intensity: i32,
    /// An instance of this kind already existed and was refreshed.
    pub refreshed: bool,
}

/// An applied effect or status, in application order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportEntry {
    Effect(AppliedEffect),
    Status(AppliedStatus),
}

impl ReportEntry {
    /// The character this entry landed on.
    #[must_use]
    pub fn target(&self) -> CharacterId {
        match self {
            ReportEntry::Effect(e) => e.target,
            ReportEntry::Status(s) => s.target,
        }
    }
}

/// Which list of the card a skipped spec came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecSection {
    Effect,
    Status,
}

/// Why a spec did nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The effect's condition failed for this target.
    ConditionNotMet { target: CharacterId },
    /// The target selector resolved to no live character.
    NoTargets,
    /// Content defect: no logic registered for the spec's kind.
    Unsupported(CombatError),
}

/// Diagnostic for a spec that was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedSpec {
    pub section: SpecSection,
    /// Position of the spec within its section.
    pub index: usize,
    pub reason: SkipReason,
}

/// Everything one card resolution did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionReport {
    pub card: CardId,
    pub actor: CharacterId,
    pub cost_paid: u32,
    pub entries: Vec<ReportEntry>,
    pub skipped: Vec<SkippedSpec>,
    /// The card went to the exhaust pile instead of the discard pile.
    pub exhausted: bool,
    /// Characters removed from the roster after this resolution.
    pub defeated: Vec<CharacterId>,
}

impl ResolutionReport {
    pub(crate) fn new(card: CardId, actor: CharacterId, cost_paid: u32) -> Self {
        Self {
            card,
            actor,
            cost_paid,
            entries: Vec::new(),
            skipped: Vec::new(),
            exhausted: false,
            defeated: Vec::new(),
        }
    }

    pub(crate) fn skip(&mut self, section: SpecSection, index: usize, reason: SkipReason) {
        self.skipped.push(SkippedSpec {
            section,
            index,
            reason,
        });
    }

    /// Applied effects, in order.
    pub fn effects(&self) -> impl Iterator<Item = &AppliedEffect> {
        self.entries.iter().filter_map(|e| match e {
            ReportEntry::Effect(effect) => Some(effect),
            ReportEntry::Status(_) => None,
        })
    }

    /// Applied statuses, in order.
    pub fn statuses(&self) -> impl Iterator<Item = &AppliedStatus> {
        self.entries.iter().filter_map(|e| match e {
            ReportEntry::Status(status) => Some(status),
            ReportEntry::Effect(_) => None,
        })
    }

    /// Health lost by `target` across every Damage entry.
    #[must_use]
    pub fn damage_to(&self, target: CharacterId) -> i32 {
        self.effects()
            .filter(|e| e.kind == EffectKind::Damage && e.target == target)
            .map(|e| e.applied)
            .sum()
    }

    /// Whether nothing was applied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(kind: EffectKind, target: u32, applied: i32) -> ReportEntry {
        ReportEntry::Effect(AppliedEffect {
            kind,
            target: CharacterId::new(target),
            magnitude: applied,
            applied,
            absorbed: 0,
            drawn: Vec::new(),
        })
    }

    #[test]
    fn test_entry_views() {
        let mut report = ResolutionReport::new(CardId::new(1), CharacterId::new(0), 1);
        assert!(report.is_empty());

        report.entries.push(effect(EffectKind::Damage, 1, 4));
        report.entries.push(ReportEntry::Status(AppliedStatus {
            kind: StatusKind::Weak,
            target: CharacterId::new(1),
            remaining: 2,
            intensity: 1,
            refreshed: false,
        }));
        report.entries.push(effect(EffectKind::Damage, 1, 3));
        report.entries.push(effect(EffectKind::Heal, 0, 2));

        assert_eq!(report.effects().count(), 3);
        assert_eq!(report.statuses().count(), 1);
        assert_eq!(report.damage_to(CharacterId::new(1)), 7);
        assert_eq!(report.damage_to(CharacterId::new(0)), 0);
        assert_eq!(report.entries[1].target(), CharacterId::new(1));
    }
}
