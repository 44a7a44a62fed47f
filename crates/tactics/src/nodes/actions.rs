//! Action nodes: write the tick's orders into the blackboard.

use behavior_tree::{Behavior, Status};
use tracing::{debug, warn};

use crate::context::DecisionContext;
use crate::engagement::{EngagementPlan, EngagementTarget, plan_engagement};
use crate::objective::{ResolvedTarget, resolve_objective};
use crate::post::{self, ReturnDecision};
use crate::reservation::ReservationError;
use crate::state::ActionType;

fn apply_plan(ctx: &mut DecisionContext<'_>, plan: EngagementPlan) {
    ctx.state.selected_action = plan.action;
    ctx.state.final_destination = plan.destination;
    match (plan.unit_target, plan.building_target) {
        (Some(unit), _) => ctx.state.set_unit_interaction(unit),
        (None, Some(building)) => ctx.state.set_building_interaction(building),
        (None, None) => {
            ctx.state.interaction_target_unit = None;
            ctx.state.interaction_target_building = None;
        }
    }
}

// ============================================================================
// Objective pipeline
// ============================================================================

/// Re-resolves the priority objective from scratch.
///
/// Writes `current_priority_target` / `current_target_position` /
/// `has_priority_target` / `is_in_defensive_mode`; a unit-shaped objective
/// (someone standing on the banner) lands in `interaction_target_unit`
/// instead. Fails when nothing resolves, leaving the resolver outputs clear.
pub struct ResolveObjective;

impl Behavior<DecisionContext<'_>> for ResolveObjective {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let Some(me) = ctx.self_unit() else {
            return Status::Failure;
        };
        let resolution = resolve_objective(ctx.world, me, ctx.state);

        ctx.state.clear_resolved_objective();
        ctx.state.set_defensive_mode(resolution.is_defensive);
        match resolution.target {
            Some(ResolvedTarget::Building(id)) => {
                ctx.state.current_priority_target = Some(id);
                ctx.state.current_target_position = resolution.position;
                ctx.state.has_priority_target = true;
                Status::Success
            }
            Some(ResolvedTarget::Unit(id)) => {
                ctx.state.set_unit_interaction(id);
                ctx.state.current_target_position = resolution.position;
                ctx.state.has_priority_target = true;
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Turns the resolved objective into this tick's orders.
///
/// Prefers the resolved building; falls back to the resolved unit. A plan of
/// `CheerAndDespawn` against the initial objective also marks the objective
/// completed, so later ticks retarget through the banner.
pub struct PlanObjectiveEngagement;

impl Behavior<DecisionContext<'_>> for PlanObjectiveEngagement {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let Some(me) = ctx.self_unit() else {
            return Status::Failure;
        };
        let target = match (
            ctx.state.current_priority_target,
            ctx.state.interaction_target_unit,
        ) {
            (Some(building), _) => EngagementTarget::Building(building),
            (None, Some(unit)) => EngagementTarget::Unit(unit),
            (None, None) => {
                ctx.state.clear_engagement_outputs();
                return Status::Failure;
            }
        };
        let Some(plan) = plan_engagement(ctx.world, me, target) else {
            ctx.state.clear_engagement_outputs();
            return Status::Failure;
        };
        if plan.action == ActionType::CheerAndDespawn
            && plan.building_target == ctx.state.initial_target_building
        {
            ctx.state.is_objective_completed = true;
        }
        apply_plan(ctx, plan);
        Status::Success
    }
}

// ============================================================================
// Threat response
// ============================================================================

/// Engages the locked-in interaction unit.
///
/// A dead (or vanished) target counts as resolved: outputs are cleared and
/// the node still succeeds, so the unit stands down instead of chasing a
/// ghost. Engaging drops the defending posture until the unit returns to its
/// slot.
pub struct EngageInteractionUnit;

impl Behavior<DecisionContext<'_>> for EngageInteractionUnit {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let Some(me) = ctx.self_unit() else {
            return Status::Failure;
        };
        let Some(target) = ctx.state.interaction_target_unit else {
            return Status::Failure;
        };
        match plan_engagement(ctx.world, me, EngagementTarget::Unit(target)) {
            Some(plan) => {
                apply_plan(ctx, plan);
                ctx.state.is_defending = false;
                Status::Success
            }
            None => {
                debug!(unit = ?ctx.unit, ?target, "interaction target gone, standing down");
                ctx.state.clear_engagement_outputs();
                Status::Success
            }
        }
    }
}

/// Last-resort aggression: engage the nearest hostile unit, else the nearest
/// hostile building. Fails on an empty battlefield.
pub struct EngageNearestThreat;

impl Behavior<DecisionContext<'_>> for EngageNearestThreat {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let Some(me) = ctx.self_unit() else {
            return Status::Failure;
        };
        let target = ctx
            .world
            .nearest_enemy_unit(me)
            .map(|u| EngagementTarget::Unit(u.id))
            .or_else(|| {
                ctx.world
                    .nearest_hostile_building(me)
                    .map(|b| EngagementTarget::Building(b.id))
            });
        let Some(target) = target else {
            return Status::Failure;
        };
        match plan_engagement(ctx.world, me, target) {
            Some(plan) => {
                apply_plan(ctx, plan);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

// ============================================================================
// Defensive posture
// ============================================================================

/// Claims a reserve slot around the defended building.
///
/// On a full pool the node degrades instead of failing: the unit keeps no
/// claim but walks toward the building anyway. Only a building with no pool
/// at all fails the node.
pub struct RequestReservePosition;

impl Behavior<DecisionContext<'_>> for RequestReservePosition {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let building = ctx
            .state
            .current_priority_target
            .or(ctx.state.initial_target_building);
        let Some(building) = building else {
            return Status::Failure;
        };
        match ctx.reservations.request_slot(ctx.unit, building) {
            Ok(claim) => {
                ctx.state.reserve_position_assigned = true;
                ctx.state.current_reserve_tile = Some(claim.tile);
                ctx.state.current_reserve_building = Some(building);
                ctx.state.set_building_interaction(building);
                ctx.state.final_destination = Some(claim.tile);
                ctx.state.selected_action = ActionType::MoveToPosition;
                Status::Success
            }
            Err(ReservationError::NoSlotAvailable(_)) => {
                // Degraded posture: defend from the building's own tile
                // without holding a slot.
                warn!(unit = ?ctx.unit, ?building, "reserve pool full, defending unslotted");
                ctx.state.reserve_position_assigned = false;
                ctx.state.current_reserve_tile = None;
                ctx.state.current_reserve_building = Some(building);
                if let Some(b) = ctx.world.building(building) {
                    ctx.state.set_building_interaction(building);
                    ctx.state.final_destination = Some(b.tile);
                    ctx.state.selected_action = ActionType::MoveToPosition;
                }
                Status::Success
            }
            Err(ReservationError::UnknownBuilding(_)) => Status::Failure,
        }
    }
}

/// Walks back to the granted reserve tile, or settles into defending once
/// there. Fails when no slot is held (the degraded case keeps whatever
/// destination the request node wrote).
pub struct ReturnToReserve;

impl Behavior<DecisionContext<'_>> for ReturnToReserve {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let Some(here) = ctx.my_position() else {
            return Status::Failure;
        };
        match post::reserve_return(here, ctx.state) {
            Some(ReturnDecision::Holding) => {
                ctx.state.is_defending = true;
                ctx.state.selected_action = ActionType::None;
                ctx.state.final_destination = None;
                Status::Success
            }
            Some(ReturnDecision::MoveTo(tile)) => {
                ctx.state.is_defending = false;
                ctx.state.final_destination = Some(tile);
                ctx.state.selected_action = ActionType::MoveToPosition;
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Walks back to the guard post. Fails when there is no post or the unit is
/// already standing on it, so the tree can fall through to idling.
pub struct ReturnToGuardPost;

impl Behavior<DecisionContext<'_>> for ReturnToGuardPost {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let Some(here) = ctx.my_position() else {
            return Status::Failure;
        };
        match post::guard_return(here, ctx.state) {
            Some(ReturnDecision::MoveTo(tile)) => {
                ctx.state.final_destination = Some(tile);
                ctx.state.selected_action = ActionType::MoveToPosition;
                Status::Success
            }
            Some(ReturnDecision::Holding) | None => Status::Failure,
        }
    }
}

/// Settles into the watchful defending posture.
pub struct StartDefending;

impl Behavior<DecisionContext<'_>> for StartDefending {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        ctx.state.is_defending = true;
        Status::Success
    }
}

/// Adopts the current tile as the unit's guard post.
pub struct SetGuardPost;

impl Behavior<DecisionContext<'_>> for SetGuardPost {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let Some(here) = ctx.my_position() else {
            return Status::Failure;
        };
        ctx.state.guard_post = Some(here);
        Status::Success
    }
}

/// Forces the defensive-mode flag to a fixed value.
pub struct SetDefensiveMode {
    pub defensive: bool,
}

impl Behavior<DecisionContext<'_>> for SetDefensiveMode {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        ctx.state.set_defensive_mode(self.defensive);
        Status::Success
    }
}

/// Stands down: no action, no destination, no interaction targets.
pub struct Idle;

impl Behavior<DecisionContext<'_>> for Idle {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        ctx.state.clear_engagement_outputs();
        Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::ReservationLedger;
    use crate::state::DecisionState;
    use game_core::{HexCoord, Team, WorldState};

    #[test]
    fn resolver_writes_building_objective_into_the_blackboard() {
        let mut world = WorldState::new();
        let me = world.spawn_unit(Team::Player, HexCoord::new(0, 0));
        let objective = world.spawn_building(Team::Enemy, HexCoord::new(5, 0));

        let mut state = DecisionState::new();
        state.set_initial_objective(objective);
        let ledger = ReservationLedger::new();
        let mut ctx = DecisionContext::new(me, &world, &mut state, &ledger);

        assert_eq!(ResolveObjective.tick(&mut ctx), Status::Success);
        assert_eq!(state.current_priority_target, Some(objective));
        assert_eq!(state.current_target_position, Some(HexCoord::new(5, 0)));
        assert!(state.has_priority_target);
        assert!(!state.is_in_defensive_mode);
    }

    #[test]
    fn cheering_at_the_captured_objective_completes_it() {
        let mut world = WorldState::new();
        let me = world.spawn_unit(Team::Player, HexCoord::new(1, 0));
        let objective = world.spawn_building(Team::Player, HexCoord::new(0, 0));

        let mut state = DecisionState::new();
        state.set_initial_objective(objective);
        state.current_priority_target = Some(objective);
        let ledger = ReservationLedger::new();
        let mut ctx = DecisionContext::new(me, &world, &mut state, &ledger);

        assert_eq!(PlanObjectiveEngagement.tick(&mut ctx), Status::Success);
        assert_eq!(state.selected_action, ActionType::CheerAndDespawn);
        assert!(state.is_objective_completed);
    }

    #[test]
    fn dead_interaction_target_stands_the_unit_down() {
        let mut world = WorldState::new();
        let me = world.spawn_unit(Team::Enemy, HexCoord::new(0, 0));
        let foe = world.spawn_unit(Team::Player, HexCoord::new(1, 0));
        world.unit_mut(foe).unwrap().health = 0;

        let mut state = DecisionState::new();
        state.set_unit_interaction(foe);
        state.selected_action = ActionType::AttackUnit;
        let ledger = ReservationLedger::new();
        let mut ctx = DecisionContext::new(me, &world, &mut state, &ledger);

        assert_eq!(EngageInteractionUnit.tick(&mut ctx), Status::Success);
        assert_eq!(state.selected_action, ActionType::None);
        assert_eq!(state.interaction_target_unit, None);
        assert_eq!(state.final_destination, None);
    }

    #[test]
    fn full_pool_degrades_to_unslotted_defense() {
        let mut world = WorldState::new();
        let me = world.spawn_unit(Team::Player, HexCoord::new(4, 0));
        let home = world.spawn_building(Team::Player, HexCoord::new(0, 0));
        let b = world.building_mut(home).unwrap();
        *b = b.clone().with_reserve_tiles([HexCoord::new(1, 0)]);

        let ledger = ReservationLedger::new();
        ledger.register_building(world.building(home).unwrap());
        let squatter = world.spawn_unit(Team::Player, HexCoord::new(2, 0));
        ledger.request_slot(squatter, home).unwrap();

        let mut state = DecisionState::new();
        state.current_priority_target = Some(home);
        let mut ctx = DecisionContext::new(me, &world, &mut state, &ledger);

        assert_eq!(RequestReservePosition.tick(&mut ctx), Status::Success);
        assert!(!state.reserve_position_assigned);
        assert_eq!(state.final_destination, Some(HexCoord::new(0, 0)));
        assert_eq!(ledger.claim_of(me), None);
    }

    #[test]
    fn arriving_at_the_reserve_tile_starts_defending() {
        let mut world = WorldState::new();
        let me = world.spawn_unit(Team::Player, HexCoord::new(1, 0));

        let mut state = DecisionState::new();
        state.reserve_position_assigned = true;
        state.current_reserve_tile = Some(HexCoord::new(1, 0));
        let ledger = ReservationLedger::new();
        let mut ctx = DecisionContext::new(me, &world, &mut state, &ledger);

        assert_eq!(ReturnToReserve.tick(&mut ctx), Status::Success);
        assert!(state.is_defending);
        assert_eq!(state.selected_action, ActionType::None);
    }

    #[test]
    fn guard_return_fails_once_on_post() {
        let mut world = WorldState::new();
        let me = world.spawn_unit(Team::Enemy, HexCoord::new(3, 3));

        let mut state = DecisionState::new();
        state.guard_post = Some(HexCoord::new(3, 3));
        let ledger = ReservationLedger::new();
        let mut ctx = DecisionContext::new(me, &world, &mut state, &ledger);
        assert_eq!(ReturnToGuardPost.tick(&mut ctx), Status::Failure);

        state.guard_post = Some(HexCoord::new(5, 3));
        let mut ctx = DecisionContext::new(me, &world, &mut state, &ledger);
        assert_eq!(ReturnToGuardPost.tick(&mut ctx), Status::Success);
        assert_eq!(state.final_destination, Some(HexCoord::new(5, 3)));
        assert_eq!(state.selected_action, ActionType::MoveToPosition);
    }
}
