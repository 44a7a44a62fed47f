//! Tactical unit decision core.
//!
//! Every allied and enemy unit runs the same decision pipeline once per
//! simulation tick: read the world snapshot, update its typed
//! [`DecisionState`] blackboard, and leave a concrete decision
//! (`selected_action` + `final_destination` + interaction targets) for the
//! movement/attack/capture executors to consume.
//!
//! # Architecture
//!
//! The core is split into two layers:
//!
//! - **Policy modules** ([`threat`], [`objective`], [`engagement`],
//!   [`reservation`], [`post`]): pure, idempotent functions over the world
//!   snapshot and the agent blackboard. All the decision rules live here and
//!   are unit-tested in isolation.
//! - **Nodes** ([`nodes`]): thin `behavior_tree::Behavior` wrappers that call
//!   the policy functions and write their results into the blackboard.
//!   [`trees`] composes them into per-archetype decision trees and
//!   [`TickDriver`] evaluates every agent in deterministic spawn order.
//!
//! Decision nodes never panic and never return errors: every failure path is
//! `Status::Failure` plus already-cleared output fields, so the scheduler can
//! re-invoke any node on the next tick.
//!
//! The only cross-agent shared state is the [`ReservationLedger`], which
//! serializes defensive-slot claims so that no two units are ever granted
//! the same tile.

pub mod config;
pub mod context;
pub mod driver;
pub mod engagement;
pub mod nodes;
pub mod objective;
pub mod post;
pub mod reservation;
pub mod state;
pub mod threat;
pub mod trees;

pub use config::TacticsConfig;
pub use context::DecisionContext;
pub use driver::TickDriver;
pub use engagement::{EngagementPlan, EngagementTarget, plan_engagement};
pub use objective::{Resolution, ResolvedTarget, resolve_objective};
pub use post::{ReturnDecision, guard_return, reserve_return};
pub use reservation::{Claim, ReservationError, ReservationLedger};
pub use state::{ActionType, DecisionState};
pub use threat::recent_threat;
pub use trees::{DecisionTree, ally_defender, enemy_garrison};
