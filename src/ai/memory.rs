//! Rolling memory of the side's recent plays.

use im::Vector;

use super::category::ActionCategory;
use crate::cards::CardId;
use crate::core::CharacterId;

/// What synergy needs to know about a past play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentPlay {
    pub card: CardId,
    pub actor: CharacterId,
    pub category: ActionCategory,
    /// Lowercased keywords of the card.
    pub keywords: Vec<String>,
}

/// Last-N plays, oldest first. Shared across every character of the side.
#[derive(Clone, Debug, Default)]
pub struct PlayMemory {
    window: usize,
    plays: Vector<RecentPlay>,
}

impl PlayMemory {
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self {
            window,
            plays: Vector::new(),
        }
    }

    /// Remember a play, forgetting the oldest beyond the window.
    pub fn push(&mut self, play: RecentPlay) {
        if self.window == 0 {
            return;
        }
        self.plays.push_back(play);
        while self.plays.len() > self.window {
            self.plays.pop_front();
        }
    }

    /// Most recent first.
    pub fn iter_recent(&self) -> impl Iterator<Item = &RecentPlay> {
        self.plays.iter().rev()
    }

    #[must_use]
    pub fn plays(&self) -> &Vector<RecentPlay> {
        &self.plays
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn clear(&mut self) {
        self.plays.clear();
    }
}
