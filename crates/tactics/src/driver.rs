//! The tick driver: evaluates every agent once per simulation tick.

use std::collections::BTreeMap;

use behavior_tree::Behavior;
use game_core::{Team, UnitId, WorldState};
use tracing::debug;

use crate::config::TacticsConfig;
use crate::context::DecisionContext;
use crate::reservation::ReservationLedger;
use crate::state::DecisionState;
use crate::trees;

/// Owns the blackboards and the reservation ledger, and runs the decision
/// pass for every registered unit in spawn order.
#[derive(Debug, Default)]
pub struct TickDriver {
    config: TacticsConfig,
    ledger: ReservationLedger,
    agents: BTreeMap<UnitId, DecisionState>,
}

impl TickDriver {
    pub fn new(config: TacticsConfig) -> Self {
        Self {
            config,
            ledger: ReservationLedger::new(),
            agents: BTreeMap::new(),
        }
    }

    /// Enrolls a unit in the decision pass and returns its blackboard for
    /// spawn-time setup (initial objective, guard post).
    pub fn register_unit(&mut self, unit: UnitId) -> &mut DecisionState {
        self.agents.entry(unit).or_default()
    }

    /// Registers reserve pools for every building currently in the world.
    pub fn register_world_buildings(&mut self, world: &WorldState) {
        for building in world.buildings() {
            self.ledger.register_building(building);
        }
    }

    pub fn state(&self, unit: UnitId) -> Option<&DecisionState> {
        self.agents.get(&unit)
    }

    pub fn state_mut(&mut self, unit: UnitId) -> Option<&mut DecisionState> {
        self.agents.get_mut(&unit)
    }

    pub fn ledger(&self) -> &ReservationLedger {
        &self.ledger
    }

    /// Runs one decision pass over the world snapshot.
    ///
    /// Agents whose unit has died are retired first, releasing their reserve
    /// slot so the pool frees up within the same tick. Player units run the
    /// defender tree; everyone else runs the garrison tree.
    pub fn run_tick(&mut self, world: &WorldState) {
        let Self {
            config,
            ledger,
            agents,
        } = self;

        agents.retain(|&unit, _| {
            if world.is_unit_alive(unit) {
                return true;
            }
            ledger.release_slot(unit);
            debug!(?unit, "agent retired");
            false
        });

        for (&unit, state) in agents.iter_mut() {
            // Trees borrow nothing, so building them per agent is cheap and
            // keeps evaluation independent of other agents' blackboards.
            let team = match world.unit(unit) {
                Some(u) => u.team,
                None => continue,
            };
            let tree = match team {
                Team::Player => trees::ally_defender(config),
                _ => trees::enemy_garrison(config),
            };
            let mut ctx = DecisionContext::new(unit, world, state, ledger);
            let status = tree.tick(&mut ctx);
            drop(ctx);
            drop(tree);
            debug!(
                ?unit,
                ?status,
                action = %state.selected_action,
                "decision pass"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ActionType;
    use game_core::HexCoord;

    #[test]
    fn dead_agents_release_their_slots() {
        let mut world = WorldState::new();
        let home = world.spawn_building(Team::Player, HexCoord::new(0, 0));
        let b = world.building_mut(home).unwrap();
        *b = b.clone().with_reserve_tiles([HexCoord::new(1, 0)]);
        let defender = world.spawn_unit(Team::Player, HexCoord::new(3, 0));

        let mut driver = TickDriver::new(TacticsConfig::default());
        driver.register_world_buildings(&world);
        driver.register_unit(defender).set_initial_objective(home);

        driver.run_tick(&world);
        assert!(driver.ledger().claim_of(defender).is_some());

        world.unit_mut(defender).unwrap().health = 0;
        driver.run_tick(&world);
        assert_eq!(driver.ledger().claim_of(defender), None);
        assert!(driver.state(defender).is_none());
        assert_eq!(driver.ledger().free_slots(home), 1);
    }

    #[test]
    fn agents_run_in_spawn_order_with_independent_blackboards() {
        let mut world = WorldState::new();
        let objective = world.spawn_building(Team::Enemy, HexCoord::new(6, 0));
        let a = world.spawn_unit(Team::Player, HexCoord::new(0, 0));
        let g = world.spawn_unit(Team::Enemy, HexCoord::new(5, 5));

        let mut driver = TickDriver::new(TacticsConfig::default());
        driver.register_unit(a).set_initial_objective(objective);
        driver.register_unit(g);

        driver.run_tick(&world);
        assert_eq!(
            driver.state(a).unwrap().selected_action,
            ActionType::MoveToBuilding
        );
        // The garrison unit adopted its spawn tile and is left alone by the
        // player's objective.
        assert_eq!(driver.state(g).unwrap().guard_post, Some(HexCoord::new(5, 5)));
    }
}
