//! Per-combatant resource state.
//!
//! A `Character` owns its health, action points, attributes, block and
//! active statuses. Every mutation is local to the character: nothing here
//! reaches into another combatant.
//!
//! ## Invariants
//!
//! - `0 <= health <= max_health`
//! - `0 <= action_points <= max_action_points`
//! - at most one `ActiveStatus` per `StatusKind`
//! - the death transition (`Defeated` event) fires at most once
//!
//! ## Example
//!
//! ```
//! use deck_battler::character::{Attributes, Character};
//!
//! let mut goblin = Character::new("Goblin", 20, 3).with_attributes(Attributes::default());
//!
//! let change = goblin.modify_health(-25);
//! assert_eq!(change.current, 0);
//! assert!(change.defeated);
//!
//! assert!(!goblin.spend_action_points(4));
//! assert!(goblin.spend_action_points(2));
//! assert_eq!(goblin.action_points(), 1);
//! ```

use smallvec::SmallVec;

use super::attributes::{AttributeKind, Attributes};
use super::combatant::{Combatant, DamageOutcome};
use super::events::CharacterEvent;
use super::status::{ActiveStatus, StatusRefresh};
use crate::core::{CharacterId, Side};
use crate::statuses::{Polarity, StatusKind};

/// Result of `Character::modify_health`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthChange {
    pub previous: i32,
    pub current: i32,
    /// This call performed the death transition.
    pub defeated: bool,
}

impl HealthChange {
    /// Signed change actually applied after clamping.
    #[must_use]
    pub fn delta(&self) -> i32 {
        self.current - self.previous
    }
}

/// Expired status instances returned by `tick_statuses`.
pub type ExpiredStatuses = SmallVec<[ActiveStatus; 4]>;

/// A combatant in an encounter.
#[derive(Clone, Debug)]
pub struct Character {
    id: CharacterId,
    side: Side,
    name: String,
    health: i32,
    max_health: i32,
    action_points: u32,
    max_action_points: u32,
    energy: u32,
    block: i32,
    attributes: Attributes,
    statuses: SmallVec<[ActiveStatus; 4]>,
    defeated: bool,
    events: Vec<CharacterEvent>,
}

impl Character {
    /// Initialize a character at full health and full action points.
    ///
    /// `max_health` is raised to at least 1. The ID and side are assigned
    /// when the character joins an encounter.
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: i32, max_action_points: u32) -> Self {
        let max_health = max_health.max(1);
        Self {
            id: CharacterId::new(0),
            side: Side::Acting,
            name: name.into(),
            health: max_health,
            max_health,
            action_points: max_action_points,
            max_action_points,
            energy: 0,
            block: 0,
            attributes: Attributes::default(),
            statuses: SmallVec::new(),
            defeated: false,
            events: Vec::new(),
        }
    }

    /// Set starting attributes (builder pattern).
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Start below full health (builder pattern). Clamped to `[1, max]`.
    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health.clamp(1, self.max_health);
        self
    }

    pub(crate) fn enroll(&mut self, id: CharacterId, side: Side) {
        self.id = id;
        self.side = side;
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    #[must_use]
    pub fn action_points(&self) -> u32 {
        self.action_points
    }

    #[must_use]
    pub fn max_action_points(&self) -> u32 {
        self.max_action_points
    }

    #[must_use]
    pub fn energy(&self) -> u32 {
        self.energy
    }

    #[must_use]
    pub fn block(&self) -> i32 {
        self.block
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn attribute(&self, kind: AttributeKind) -> i32 {
        self.attributes.get(kind)
    }

    /// Health 0, pending removal from the roster.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.defeated && self.health > 0
    }

    /// Whether `current * 100 < percent * max`.
    #[must_use]
    pub fn health_below_percent(&self, percent: u32) -> bool {
        i64::from(self.health) * 100 < i64::from(percent) * i64::from(self.max_health)
    }

    /// Whether `current * 100 > percent * max`.
    #[must_use]
    pub fn health_above_percent(&self, percent: u32) -> bool {
        i64::from(self.health) * 100 > i64::from(percent) * i64::from(self.max_health)
    }

    // === Health ===

    /// Add `delta` to health, clamped to `[0, max_health]`.
    ///
    /// Reaching 0 performs the death transition once. A defeated character
    /// ignores further changes.
    pub fn modify_health(&mut self, delta: i32) -> HealthChange {
        let previous = self.health;
        if self.defeated {
            return HealthChange {
                previous,
                current: previous,
                defeated: false,
            };
        }

        let current = previous.saturating_add(delta).clamp(0, self.max_health);
        self.health = current;
        if current != previous {
            self.events.push(CharacterEvent::HealthChanged {
                id: self.id,
                previous,
                current,
            });
        }

        let defeated = current == 0;
        if defeated {
            self.defeated = true;
            self.events.push(CharacterEvent::Defeated { id: self.id });
        }

        HealthChange {
            previous,
            current,
            defeated,
        }
    }

    // === Action points ===

    /// Spend action points. Fails without side effects if `amount` exceeds
    /// the current pool.
    pub fn spend_action_points(&mut self, amount: u32) -> bool {
        if amount > self.action_points {
            return false;
        }
        self.set_action_points(self.action_points - amount);
        true
    }

    /// Reset current action points to the maximum.
    pub fn refresh_action_points(&mut self) {
        self.set_action_points(self.max_action_points);
    }

    /// Raise or lower the maximum, clamping current to the new bound.
    /// Returns the change actually applied (the maximum never drops below 0).
    pub fn modify_max_action_points(&mut self, delta: i32) -> i32 {
        let previous = self.max_action_points;
        let current = (i64::from(previous) + i64::from(delta)).clamp(0, i64::from(u32::MAX)) as u32;
        if current == previous {
            return 0;
        }

        self.max_action_points = current;
        self.events.push(CharacterEvent::MaxActionPointsChanged {
            id: self.id,
            previous,
            current,
        });
        if self.action_points > current {
            self.set_action_points(current);
        }
        (i64::from(current) - i64::from(previous)) as i32
    }

    fn set_action_points(&mut self, value: u32) {
        let previous = self.action_points;
        let current = value.min(self.max_action_points);
        if current != previous {
            self.action_points = current;
            self.events.push(CharacterEvent::ActionPointsChanged {
                id: self.id,
                previous,
                current,
            });
        }
    }

    // === Block ===

    /// Add temporary defense.
    pub fn gain_block(&mut self, amount: i32) {
        self.set_block(self.block.saturating_add(amount.max(0)));
    }

    /// Drop all temporary defense.
    pub fn clear_block(&mut self) {
        self.set_block(0);
    }

    fn set_block(&mut self, value: i32) {
        let previous = self.block;
        if value != previous {
            self.block = value;
            self.events.push(CharacterEvent::BlockChanged {
                id: self.id,
                previous,
                current: value,
            });
        }
    }

    // === Attributes ===

    /// Add `delta` to an attribute. Returns the new value.
    pub fn modify_attribute(&mut self, kind: AttributeKind, delta: i32) -> i32 {
        let previous = self.attributes.get(kind);
        let current = self.attributes.modify(kind, delta);
        if current != previous {
            self.events.push(CharacterEvent::AttributeChanged {
                id: self.id,
                attribute: kind,
                previous,
                current,
            });
        }
        current
    }

    // === Statuses ===

    /// Active statuses in application order.
    #[must_use]
    pub fn statuses(&self) -> &[ActiveStatus] {
        &self.statuses
    }

    #[must_use]
    pub fn status(&self, kind: StatusKind) -> Option<&ActiveStatus> {
        self.statuses.iter().find(|s| s.kind == kind)
    }

    pub(crate) fn status_mut(&mut self, kind: StatusKind) -> Option<&mut ActiveStatus> {
        self.statuses.iter_mut().find(|s| s.kind == kind)
    }

    #[must_use]
    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.status(kind).is_some()
    }

    /// Any active status classified as a buff.
    #[must_use]
    pub fn has_buff(&self) -> bool {
        self.statuses.iter().any(|s| s.kind.polarity() == Polarity::Buff)
    }

    /// Any active status classified as a debuff.
    #[must_use]
    pub fn has_debuff(&self) -> bool {
        self.statuses.iter().any(|s| s.kind.polarity() == Polarity::Debuff)
    }

    /// Create a status instance or refresh the existing one.
    ///
    /// Re-application never stacks instances: the remaining duration becomes
    /// the maximum of the existing and new duration, and likewise for
    /// intensity. A zero duration is treated as one tick.
    pub fn add_or_refresh_status(
        &mut self,
        kind: StatusKind,
        duration: u32,
        intensity: i32,
    ) -> StatusRefresh {
        let duration = duration.max(1);
        let id = self.id;

        let refresh = match self.status_mut(kind) {
            Some(existing) => {
                let previous_remaining = existing.remaining;
                let previous_intensity = existing.intensity;
                existing.remaining = previous_remaining.max(duration);
                existing.intensity = previous_intensity.max(intensity);
                StatusRefresh {
                    kind,
                    previous_remaining: Some(previous_remaining),
                    remaining: existing.remaining,
                    previous_intensity,
                    intensity: existing.intensity,
                }
            }
            None => {
                self.statuses.push(ActiveStatus::new(kind, duration, intensity));
                StatusRefresh {
                    kind,
                    previous_remaining: None,
                    remaining: duration,
                    previous_intensity: 0,
                    intensity,
                }
            }
        };

        self.events.push(CharacterEvent::StatusApplied {
            id,
            kind,
            remaining: refresh.remaining,
        });
        refresh
    }

    /// Remove a status instance, returning it if it was active.
    ///
    /// Only the instance is removed; reversing its side effect is the
    /// status catalog's job.
    pub fn remove_status(&mut self, kind: StatusKind) -> Option<ActiveStatus> {
        let index = self.statuses.iter().position(|s| s.kind == kind)?;
        let removed = self.statuses.remove(index);
        self.events.push(CharacterEvent::StatusRemoved { id: self.id, kind });
        Some(removed)
    }

    /// Decrement every remaining duration by one and remove the instances
    /// that reach zero. Returns the removed instances in application order.
    pub fn tick_statuses(&mut self) -> ExpiredStatuses {
        let mut expired = ExpiredStatuses::new();
        for status in self.statuses.iter_mut() {
            status.remaining = status.remaining.saturating_sub(1);
        }

        let id = self.id;
        let events = &mut self.events;
        self.statuses.retain(|status| {
            if status.remaining == 0 {
                expired.push(*status);
                events.push(CharacterEvent::StatusRemoved {
                    id,
                    kind: status.kind,
                });
                false
            } else {
                true
            }
        });
        expired
    }

    /// Take the pending change records.
    pub fn drain_events(&mut self) -> Vec<CharacterEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Combatant for Character {
    fn combatant_id(&self) -> CharacterId {
        self.id
    }

    fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        let amount = amount.max(0);
        let absorbed = amount.min(self.block.max(0));
        if absorbed > 0 {
            self.set_block(self.block - absorbed);
            // Fully consumed block ends the Block status.
            if self.block == 0 {
                self.remove_status(StatusKind::Block);
            }
        }

        let change = self.modify_health(-(amount - absorbed));
        DamageOutcome {
            absorbed,
            health_lost: -change.delta(),
            defeated: change.defeated,
        }
    }

    fn lose_health(&mut self, amount: i32) -> i32 {
        -self.modify_health(-amount.max(0)).delta()
    }

    fn restore_health(&mut self, amount: i32) -> i32 {
        self.modify_health(amount.max(0)).delta()
    }

    fn grant_action_points(&mut self, amount: u32) -> u32 {
        let previous = self.action_points;
        self.set_action_points(previous.saturating_add(amount));
        self.action_points - previous
    }

    fn grant_energy(&mut self, amount: u32) -> u32 {
        let previous = self.energy;
        let current = previous.saturating_add(amount);
        if current != previous {
            self.energy = current;
            self.events.push(CharacterEvent::EnergyChanged {
                id: self.id,
                previous,
                current,
            });
        }
        current - previous
    }
}
