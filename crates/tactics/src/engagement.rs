//! Engagement planning: turning a resolved target into a concrete action.

use game_core::{BuildingId, HexCoord, Unit, UnitId, WorldState};

use crate::state::ActionType;

/// The thing to engage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngagementTarget {
    Unit(UnitId),
    Building(BuildingId),
}

/// One tick's engagement order.
///
/// `unit_target` and `building_target` are never both set; whichever side the
/// plan tracks, the other is `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngagementPlan {
    pub action: ActionType,
    pub destination: Option<HexCoord>,
    pub unit_target: Option<UnitId>,
    pub building_target: Option<BuildingId>,
}

/// Plans how `actor` should engage `target` this tick.
///
/// Range checks honor multi-tile footprints: a target is in range when ANY of
/// its occupied tiles is within range of ANY of the actor's tiles. Returns
/// `None` when the target is dead or unknown, so callers can clear their
/// orders and fall through.
pub fn plan_engagement(
    world: &WorldState,
    actor: &Unit,
    target: EngagementTarget,
) -> Option<EngagementPlan> {
    match target {
        EngagementTarget::Unit(id) => {
            let victim = world.unit(id).filter(|u| u.is_alive())?;
            let action = if actor.unit_in_attack_range(victim) {
                ActionType::AttackUnit
            } else {
                ActionType::MoveToUnit
            };
            Some(EngagementPlan {
                action,
                destination: Some(victim.position()),
                unit_target: Some(id),
                building_target: None,
            })
        }
        EngagementTarget::Building(id) => {
            let building = world.building(id).filter(|b| b.is_alive())?;
            let action = if building.team == actor.team {
                // Ours and standing: the fight here is over.
                ActionType::CheerAndDespawn
            } else if building.capturable_by(actor.team) && actor.can_capture {
                if actor.building_in_capture_range(building) {
                    ActionType::CaptureBuilding
                } else {
                    ActionType::MoveToBuilding
                }
            } else if actor.team.is_hostile_to(building.team) {
                if actor.building_in_attack_range(building) {
                    ActionType::AttackBuilding
                } else {
                    ActionType::MoveToBuilding
                }
            } else {
                // Neutral and uncapturable: nothing sensible to do with it.
                ActionType::None
            };
            Some(EngagementPlan {
                action,
                destination: Some(building.tile),
                unit_target: None,
                building_target: Some(id),
            })
        }
    }
}
