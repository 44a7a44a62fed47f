//! Threat memory: remembering who hit us, and for how long.

use game_core::{Unit, UnitId, WorldState};

/// Returns the unit's most recent attacker if the memory is still warm.
///
/// A threat counts only while all three hold:
/// - the unit has an attacker on record,
/// - the attacker is still alive,
/// - the hit happened within `forget_window` seconds of `world.now`.
///
/// A hit exactly `forget_window` seconds old still counts; anything older is
/// forgotten.
pub fn recent_threat(world: &WorldState, unit: &Unit, forget_window: f32) -> Option<UnitId> {
    let record = unit.last_attacker?;
    if !world.is_unit_alive(record.attacker) {
        return None;
    }
    if world.now - record.time > forget_window {
        return None;
    }
    Some(record.attacker)
}
