//! Capability trait for anything effects can be applied to.

use crate::core::CharacterId;

/// Outcome of an incoming hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Damage soaked by block.
    pub absorbed: i32,
    /// Health actually lost after clamping.
    pub health_lost: i32,
    /// This hit caused the death transition.
    pub defeated: bool,
}

/// Operations the effect catalog performs on a target.
///
/// Implemented by [`crate::character::Character`]. Handlers receive
/// `&mut dyn Combatant` so they can never reach other characters.
pub trait Combatant {
    /// Identity of the target, for reports.
    fn combatant_id(&self) -> CharacterId;

    /// Apply damage through block: block absorbs up to its value, the
    /// excess reduces health.
    fn take_damage(&mut self, amount: i32) -> DamageOutcome;

    /// Lose health directly, ignoring block. Returns health lost.
    fn lose_health(&mut self, amount: i32) -> i32;

    /// Restore health up to the maximum. Returns health gained.
    fn restore_health(&mut self, amount: i32) -> i32;

    /// Grant action points up to the maximum. Returns points gained.
    fn grant_action_points(&mut self, amount: u32) -> u32;

    /// Grant energy. Returns energy gained.
    fn grant_energy(&mut self, amount: u32) -> u32;
}
