//! The per-tick evaluation context handed to every tree node.

use game_core::{HexCoord, Unit, UnitId, WorldState};

use crate::reservation::ReservationLedger;
use crate::state::DecisionState;

/// Everything a decision node may touch while evaluating one unit.
///
/// The world snapshot is read-only; the blackboard is this unit's alone; the
/// reservation ledger is the single piece of cross-unit shared state.
pub struct DecisionContext<'a> {
    /// The unit being decided for.
    pub unit: UnitId,
    pub world: &'a WorldState,
    pub state: &'a mut DecisionState,
    pub reservations: &'a ReservationLedger,
}

impl<'a> DecisionContext<'a> {
    pub fn new(
        unit: UnitId,
        world: &'a WorldState,
        state: &'a mut DecisionState,
        reservations: &'a ReservationLedger,
    ) -> Self {
        Self {
            unit,
            world,
            state,
            reservations,
        }
    }

    /// The unit under evaluation, or `None` once it has died mid-tick.
    ///
    /// Borrows from the world snapshot, not from the context, so callers can
    /// keep the unit while writing to the blackboard.
    pub fn self_unit(&self) -> Option<&'a Unit> {
        self.world.unit(self.unit).filter(|u| u.is_alive())
    }

    /// Anchor tile of the unit under evaluation.
    pub fn my_position(&self) -> Option<HexCoord> {
        self.self_unit().map(Unit::position)
    }
}
