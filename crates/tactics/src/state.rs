//! Per-unit decision blackboard.

use game_core::{BuildingId, HexCoord, UnitId};
use serde::{Deserialize, Serialize};

/// What the unit has decided to do this tick.
///
/// Executors (movement, combat, capture) read this after the decision pass;
/// the decision core never performs the action itself.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum ActionType {
    /// Stand still; nothing to do this tick.
    #[default]
    None,
    /// Walk toward `final_destination`, tracking a unit.
    MoveToUnit,
    /// Walk toward `final_destination`, tracking a building.
    MoveToBuilding,
    /// Walk toward `final_destination` as a bare tile (reserve slots, guard
    /// posts).
    MoveToPosition,
    AttackUnit,
    AttackBuilding,
    CaptureBuilding,
    /// The objective fell to our side with nothing left to do; celebrate and
    /// leave the field.
    CheerAndDespawn,
}

/// One unit's persistent decision memory.
///
/// Fields are plain data on purpose: tree nodes are the only writers, and
/// each node documents which fields it reads and writes. Everything here
/// survives across ticks; per-tick outputs (`selected_action`,
/// `final_destination`, interaction targets) are rewritten by whichever
/// branch runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionState {
    // ===== mission-scoped inputs =====
    /// True once the spawner has assigned this unit its opening objective.
    pub has_initial_objective: bool,
    /// The building the unit was sent to at spawn time.
    pub initial_target_building: Option<BuildingId>,
    /// Set once the initial objective has been dealt with (captured,
    /// destroyed, or superseded); the resolver then falls through to
    /// banner-driven targeting.
    pub is_objective_completed: bool,
    /// Guard post to fall back to when there is nothing else to do.
    pub guard_post: Option<HexCoord>,

    // ===== resolver outputs =====
    /// The building the priority resolver selected this tick.
    pub current_priority_target: Option<BuildingId>,
    /// Where the resolved objective physically is.
    pub current_target_position: Option<HexCoord>,
    /// True when the resolver produced any target at all.
    pub has_priority_target: bool,
    /// True when the resolved objective is one of ours to hold rather than
    /// one of theirs to take.
    pub is_in_defensive_mode: bool,

    // ===== engagement outputs =====
    /// Unit the engagement planner is tracking. Mutually exclusive with
    /// `interaction_target_building`.
    pub interaction_target_unit: Option<UnitId>,
    /// Building the engagement planner is tracking. Mutually exclusive with
    /// `interaction_target_unit`.
    pub interaction_target_building: Option<BuildingId>,
    /// Where the executor should move the unit this tick, if anywhere.
    pub final_destination: Option<HexCoord>,
    /// The action the executor should carry out this tick.
    pub selected_action: ActionType,

    // ===== perception inputs (written by the sensing subsystem) =====
    /// Most recently sensed hostile unit, for allied units.
    pub detected_enemy_unit: Option<UnitId>,
    /// Most recently sensed player unit, for garrison units.
    pub detected_player_unit: Option<UnitId>,

    // ===== defensive posture =====
    /// True while the unit holds its assigned slot and watches for threats.
    pub is_defending: bool,
    /// True while the unit owns a reserve slot in the ledger.
    pub reserve_position_assigned: bool,
    /// The exact tile granted by the reservation ledger.
    pub current_reserve_tile: Option<HexCoord>,
    /// The building whose pool granted the slot.
    pub current_reserve_building: Option<BuildingId>,
}

impl DecisionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives the unit its spawn-time objective.
    pub fn set_initial_objective(&mut self, building: BuildingId) {
        self.has_initial_objective = true;
        self.initial_target_building = Some(building);
        self.is_objective_completed = false;
    }

    /// Records the resolver's verdict on whether we hold or take.
    pub fn set_defensive_mode(&mut self, defensive: bool) {
        self.is_in_defensive_mode = defensive;
    }

    /// Targets a unit, dropping any building target. The two interaction
    /// fields are never both set.
    pub fn set_unit_interaction(&mut self, unit: UnitId) {
        self.interaction_target_unit = Some(unit);
        self.interaction_target_building = None;
    }

    /// Targets a building, dropping any unit target.
    pub fn set_building_interaction(&mut self, building: BuildingId) {
        self.interaction_target_building = Some(building);
        self.interaction_target_unit = None;
    }

    /// Wipes the resolver outputs ahead of a fresh resolution pass.
    pub fn clear_resolved_objective(&mut self) {
        self.current_priority_target = None;
        self.current_target_position = None;
        self.has_priority_target = false;
    }

    /// Wipes the per-tick engagement outputs so a failed branch leaves no
    /// stale orders behind.
    pub fn clear_engagement_outputs(&mut self) {
        self.interaction_target_unit = None;
        self.interaction_target_building = None;
        self.final_destination = None;
        self.selected_action = ActionType::None;
    }
}
