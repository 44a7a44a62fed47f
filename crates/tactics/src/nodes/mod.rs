//! Behavior-tree nodes over [`DecisionContext`](crate::context::DecisionContext).
//!
//! Conditions read the world and blackboard; actions additionally write the
//! per-tick outputs. Every node is re-entrant and clears its own outputs on
//! failure, so trees can be re-evaluated from the root each tick.

mod actions;
mod conditions;

pub use actions::{
    EngageInteractionUnit, EngageNearestThreat, Idle, PlanObjectiveEngagement,
    RequestReservePosition, ResolveObjective, ReturnToGuardPost, ReturnToReserve, SetDefensiveMode,
    SetGuardPost, StartDefending,
};
pub use conditions::{
    HasDetectedEnemyUnit, HasDetectedPlayerUnit, HasRecentThreat, IsAtGuardPost,
    IsAtReservePosition, IsInDefensiveMode,
};
