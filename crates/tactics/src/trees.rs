//! The per-archetype decision trees.
//!
//! Trees borrow nothing and carry no state; all memory lives in the
//! blackboard and the ledger, so a tree can be rebuilt every tick.

use behavior_tree::{BoxedBehavior, always_succeed, selector, sequence};

use crate::config::TacticsConfig;
use crate::context::DecisionContext;
use crate::nodes::{
    EngageInteractionUnit, EngageNearestThreat, HasDetectedEnemyUnit, HasDetectedPlayerUnit,
    HasRecentThreat, Idle, IsAtGuardPost, IsInDefensiveMode, PlanObjectiveEngagement,
    RequestReservePosition, ResolveObjective, ReturnToGuardPost, ReturnToReserve, SetGuardPost,
    StartDefending,
};

/// A decision tree evaluated against one unit's [`DecisionContext`].
pub type DecisionTree<'a> = BoxedBehavior<'a, DecisionContext<'a>>;

/// The tree for mission units (player side).
///
/// Priority order: answer whoever just hit us, then sensed enemies, then the
/// resolved objective (holding it defensively via a reserve slot, or taking
/// it), then any threat on the field, then walking back to the guard post,
/// then idling.
pub fn ally_defender<'a>(config: &TacticsConfig) -> DecisionTree<'a> {
    selector(vec![
        sequence(vec![
            Box::new(HasRecentThreat {
                forget_window: config.threat_forget_window,
            }),
            Box::new(EngageInteractionUnit),
        ]),
        sequence(vec![
            Box::new(HasDetectedEnemyUnit),
            Box::new(EngageInteractionUnit),
        ]),
        sequence(vec![
            Box::new(ResolveObjective),
            selector(vec![
                // Holding our own building: claim a slot and man it. The
                // return leg is wrapped so a degraded (slotless) claim still
                // commits the walk-to-building order.
                sequence(vec![
                    Box::new(IsInDefensiveMode),
                    Box::new(RequestReservePosition),
                    always_succeed(Box::new(ReturnToReserve)),
                ]),
                Box::new(PlanObjectiveEngagement),
            ]),
        ]),
        Box::new(EngageNearestThreat),
        Box::new(ReturnToGuardPost),
        Box::new(Idle),
    ])
}

/// The tree for garrison units (enemy side).
///
/// Garrisons hold ground: answer attackers and sensed player units, else
/// stand watch on the guard post, adopting the spawn tile as post on the
/// first tick.
pub fn enemy_garrison<'a>(config: &TacticsConfig) -> DecisionTree<'a> {
    selector(vec![
        sequence(vec![
            Box::new(HasRecentThreat {
                forget_window: config.threat_forget_window,
            }),
            Box::new(EngageInteractionUnit),
        ]),
        sequence(vec![
            Box::new(HasDetectedPlayerUnit),
            Box::new(EngageInteractionUnit),
        ]),
        sequence(vec![
            Box::new(IsAtGuardPost),
            Box::new(StartDefending),
            Box::new(Idle),
        ]),
        Box::new(ReturnToGuardPost),
        sequence(vec![Box::new(SetGuardPost), Box::new(Idle)]),
    ])
}
