//! Condition nodes: gate branches without issuing orders.

use behavior_tree::{Behavior, Status};

use crate::context::DecisionContext;
use crate::post::{self, ReturnDecision};
use crate::threat::recent_threat;

// ============================================================================
// Threat and perception gates
// ============================================================================

/// Succeeds while the unit remembers a live attacker within the forget
/// window, and locks that attacker in as the interaction target.
pub struct HasRecentThreat {
    pub forget_window: f32,
}

impl Behavior<DecisionContext<'_>> for HasRecentThreat {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let Some(me) = ctx.self_unit() else {
            return Status::Failure;
        };
        match recent_threat(ctx.world, me, self.forget_window) {
            Some(attacker) => {
                ctx.state.set_unit_interaction(attacker);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Succeeds while the sensing subsystem reports a live enemy unit, and locks
/// it in as the interaction target. Stale detections of dead units are
/// cleared here so they stop short-circuiting the tree.
pub struct HasDetectedEnemyUnit;

impl Behavior<DecisionContext<'_>> for HasDetectedEnemyUnit {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let Some(detected) = ctx.state.detected_enemy_unit else {
            return Status::Failure;
        };
        if !ctx.world.is_unit_alive(detected) {
            ctx.state.detected_enemy_unit = None;
            return Status::Failure;
        }
        ctx.state.set_unit_interaction(detected);
        Status::Success
    }
}

/// Garrison counterpart of [`HasDetectedEnemyUnit`].
pub struct HasDetectedPlayerUnit;

impl Behavior<DecisionContext<'_>> for HasDetectedPlayerUnit {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let Some(detected) = ctx.state.detected_player_unit else {
            return Status::Failure;
        };
        if !ctx.world.is_unit_alive(detected) {
            ctx.state.detected_player_unit = None;
            return Status::Failure;
        }
        ctx.state.set_unit_interaction(detected);
        Status::Success
    }
}

// ============================================================================
// Posture gates
// ============================================================================

/// Succeeds while the resolver last marked the objective as ours to hold.
pub struct IsInDefensiveMode;

impl Behavior<DecisionContext<'_>> for IsInDefensiveMode {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        Status::from_success(ctx.state.is_in_defensive_mode)
    }
}

/// Succeeds while the unit stands on its granted reserve tile.
pub struct IsAtReservePosition;

impl Behavior<DecisionContext<'_>> for IsAtReservePosition {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let Some(here) = ctx.my_position() else {
            return Status::Failure;
        };
        Status::from_success(matches!(
            post::reserve_return(here, ctx.state),
            Some(ReturnDecision::Holding)
        ))
    }
}

/// Succeeds while the unit stands on its guard post.
pub struct IsAtGuardPost;

impl Behavior<DecisionContext<'_>> for IsAtGuardPost {
    fn tick(&self, ctx: &mut DecisionContext<'_>) -> Status {
        let Some(here) = ctx.my_position() else {
            return Status::Failure;
        };
        Status::from_success(matches!(
            post::guard_return(here, ctx.state),
            Some(ReturnDecision::Holding)
        ))
    }
}
