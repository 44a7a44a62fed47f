//! Priority objective resolution.
//!
//! Runs fresh every tick; the resolver owns no state of its own, so a banner
//! planted or removed mid-mission takes effect on the very next evaluation.

use game_core::{BuildingId, HexCoord, Unit, UnitId, WorldState};

use crate::state::DecisionState;

/// What the resolver picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTarget {
    Unit(UnitId),
    Building(BuildingId),
}

/// One tick's resolver verdict.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub target: Option<ResolvedTarget>,
    pub position: Option<HexCoord>,
    /// True when the objective is one of ours to hold.
    pub is_defensive: bool,
}

impl Resolution {
    const NONE: Self = Self {
        target: None,
        position: None,
        is_defensive: false,
    };
}

/// Resolves the unit's objective for this tick, highest priority first:
///
/// 1. The spawn-time initial objective, while its building is alive and the
///    objective has not been completed.
/// 2. The planted banner: a hostile unit standing on the banner tile beats a
///    building on it.
/// 3. Nothing.
pub fn resolve_objective(world: &WorldState, unit: &Unit, state: &DecisionState) -> Resolution {
    if state.has_initial_objective && !state.is_objective_completed {
        if let Some(id) = state.initial_target_building {
            if let Some(building) = world.building(id).filter(|b| b.is_alive()) {
                return Resolution {
                    target: Some(ResolvedTarget::Building(id)),
                    position: Some(building.tile),
                    is_defensive: building.team == unit.team,
                };
            }
        }
    }

    if let Some(banner) = world.banner {
        if let Some(occupant) = world.unit_at(banner) {
            if unit.team.is_hostile_to(occupant.team) {
                return Resolution {
                    target: Some(ResolvedTarget::Unit(occupant.id)),
                    position: Some(occupant.position()),
                    is_defensive: false,
                };
            }
        }
        if let Some(building) = world.building_at(banner) {
            return Resolution {
                target: Some(ResolvedTarget::Building(building.id)),
                position: Some(building.tile),
                is_defensive: building.team == unit.team,
            };
        }
    }

    Resolution::NONE
}
