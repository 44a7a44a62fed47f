//! The reserve-slot ledger: defensive positions around friendly buildings.
//!
//! Each defensible building exposes a small pool of reserve tiles. The ledger
//! hands out at most one tile per unit and at most one unit per tile, across
//! every building, no matter how many agents ask in the same tick.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use game_core::{Building, BuildingId, HexCoord, UnitId};

/// Reservation failures a requester can act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    /// The building never registered a pool (or has no reserve tiles).
    #[error("no reserve pool registered for building {0:?}")]
    UnknownBuilding(BuildingId),

    /// Every slot in the pool is claimed.
    #[error("all reserve slots of building {0:?} are taken")]
    NoSlotAvailable(BuildingId),
}

/// A granted slot: which building's pool, and which exact tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Claim {
    pub building: BuildingId,
    pub tile: HexCoord,
}

#[derive(Debug, Default)]
struct Inner {
    /// Per-building pools: tile -> current owner.
    pools: BTreeMap<BuildingId, BTreeMap<HexCoord, Option<UnitId>>>,
    /// Reverse index: each unit's single claim.
    owners: BTreeMap<UnitId, Claim>,
}

/// Single-owner slot allocator shared by every decision agent.
///
/// Interior mutability lets tree nodes claim slots through a shared
/// reference; `BTreeMap` ordering makes grants deterministic (lowest free
/// tile first, in coordinate order).
#[derive(Debug, Default)]
pub struct ReservationLedger {
    inner: Mutex<Inner>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned ledger is still structurally sound: claims are updated
        // atomically under the lock, so keep serving.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers (or refreshes) a building's reserve pool.
    ///
    /// Buildings without reserve tiles get no pool, so requests against them
    /// fail with [`ReservationError::UnknownBuilding`]. Existing claims on
    /// tiles that survive the refresh are kept.
    pub fn register_building(&self, building: &Building) {
        if building.reserve_tiles.is_empty() {
            return;
        }
        let mut inner = self.lock();
        let pool = inner.pools.entry(building.id).or_default();
        let kept: BTreeMap<HexCoord, Option<UnitId>> = building
            .reserve_tiles
            .iter()
            .map(|&tile| (tile, pool.get(&tile).copied().flatten()))
            .collect();
        *pool = kept;
    }

    /// Grants `unit` a slot in `building`'s pool.
    ///
    /// Idempotent: asking again for the same building returns the already
    /// held tile. Asking for a different building releases the old claim
    /// first, so a unit never holds two slots.
    pub fn request_slot(
        &self,
        unit: UnitId,
        building: BuildingId,
    ) -> Result<Claim, ReservationError> {
        let mut inner = self.lock();

        if let Some(claim) = inner.owners.get(&unit).copied() {
            if claim.building == building {
                return Ok(claim);
            }
            Self::release_locked(&mut inner, unit);
        }

        let pool = inner
            .pools
            .get_mut(&building)
            .ok_or(ReservationError::UnknownBuilding(building))?;
        let (&tile, owner) = pool
            .iter_mut()
            .find(|(_, owner)| owner.is_none())
            .ok_or(ReservationError::NoSlotAvailable(building))?;
        *owner = Some(unit);

        let claim = Claim { building, tile };
        inner.owners.insert(unit, claim);
        tracing::debug!(?unit, ?building, %tile, "reserve slot granted");
        Ok(claim)
    }

    /// Releases whatever slot `unit` holds, if any.
    pub fn release_slot(&self, unit: UnitId) {
        let mut inner = self.lock();
        if Self::release_locked(&mut inner, unit) {
            tracing::debug!(?unit, "reserve slot released");
        }
    }

    fn release_locked(inner: &mut Inner, unit: UnitId) -> bool {
        let Some(claim) = inner.owners.remove(&unit) else {
            return false;
        };
        if let Some(pool) = inner.pools.get_mut(&claim.building) {
            if let Some(owner) = pool.get_mut(&claim.tile) {
                if *owner == Some(unit) {
                    *owner = None;
                }
            }
        }
        true
    }

    /// The claim `unit` currently holds, if any.
    pub fn claim_of(&self, unit: UnitId) -> Option<Claim> {
        self.lock().owners.get(&unit).copied()
    }

    /// How many slots of `building`'s pool are currently free.
    pub fn free_slots(&self, building: BuildingId) -> usize {
        self.lock()
            .pools
            .get(&building)
            .map(|pool| pool.values().filter(|o| o.is_none()).count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Team;

    fn building_with_slots(id: u32, slots: &[(i32, i32)]) -> Building {
        Building::new(BuildingId(id), Team::Player, HexCoord::new(0, 0))
            .with_reserve_tiles(slots.iter().map(|&(q, r)| HexCoord::new(q, r)))
    }

    #[test]
    fn more_units_than_slots_never_double_books() {
        let ledger = ReservationLedger::new();
        ledger.register_building(&building_with_slots(1, &[(1, 0), (0, 1)]));

        let a = ledger.request_slot(UnitId(1), BuildingId(1)).unwrap();
        let b = ledger.request_slot(UnitId(2), BuildingId(1)).unwrap();
        assert_ne!(a.tile, b.tile);

        assert_eq!(
            ledger.request_slot(UnitId(3), BuildingId(1)),
            Err(ReservationError::NoSlotAvailable(BuildingId(1)))
        );
    }

    #[test]
    fn repeat_requests_return_the_same_tile() {
        let ledger = ReservationLedger::new();
        ledger.register_building(&building_with_slots(1, &[(1, 0), (0, 1)]));

        let first = ledger.request_slot(UnitId(1), BuildingId(1)).unwrap();
        let again = ledger.request_slot(UnitId(1), BuildingId(1)).unwrap();
        assert_eq!(first, again);
        assert_eq!(ledger.free_slots(BuildingId(1)), 1);
    }

    #[test]
    fn release_frees_the_slot_for_the_next_unit() {
        let ledger = ReservationLedger::new();
        ledger.register_building(&building_with_slots(1, &[(1, 0)]));

        let claim = ledger.request_slot(UnitId(1), BuildingId(1)).unwrap();
        ledger.release_slot(UnitId(1));
        assert_eq!(ledger.claim_of(UnitId(1)), None);

        let next = ledger.request_slot(UnitId(2), BuildingId(1)).unwrap();
        assert_eq!(next.tile, claim.tile);
    }

    #[test]
    fn reassignment_releases_the_old_claim() {
        let ledger = ReservationLedger::new();
        ledger.register_building(&building_with_slots(1, &[(1, 0)]));
        ledger.register_building(&building_with_slots(2, &[(5, 5)]));

        ledger.request_slot(UnitId(1), BuildingId(1)).unwrap();
        let moved = ledger.request_slot(UnitId(1), BuildingId(2)).unwrap();
        assert_eq!(moved.building, BuildingId(2));
        assert_eq!(ledger.free_slots(BuildingId(1)), 1);
        assert_eq!(ledger.claim_of(UnitId(1)), Some(moved));
    }

    #[test]
    fn unregistered_building_is_rejected() {
        let ledger = ReservationLedger::new();
        assert_eq!(
            ledger.request_slot(UnitId(1), BuildingId(9)),
            Err(ReservationError::UnknownBuilding(BuildingId(9)))
        );
    }

    #[test]
    fn empty_pool_building_gets_no_pool() {
        let ledger = ReservationLedger::new();
        ledger.register_building(&building_with_slots(1, &[]));
        assert_eq!(
            ledger.request_slot(UnitId(1), BuildingId(1)),
            Err(ReservationError::UnknownBuilding(BuildingId(1)))
        );
    }

    #[test]
    fn refresh_keeps_surviving_claims() {
        let ledger = ReservationLedger::new();
        let b = building_with_slots(1, &[(1, 0), (0, 1)]);
        ledger.register_building(&b);
        let claim = ledger.request_slot(UnitId(1), BuildingId(1)).unwrap();

        ledger.register_building(&b);
        assert_eq!(ledger.claim_of(UnitId(1)), Some(claim));
        assert_eq!(ledger.free_slots(BuildingId(1)), 1);
    }

    #[test]
    fn concurrent_requests_stay_single_owner() {
        let ledger = ReservationLedger::new();
        ledger.register_building(&building_with_slots(1, &[(1, 0), (0, 1), (2, 0)]));

        std::thread::scope(|s| {
            for i in 0..8 {
                let ledger = &ledger;
                s.spawn(move || {
                    let _ = ledger.request_slot(UnitId(i), BuildingId(1));
                });
            }
        });

        let mut granted: Vec<HexCoord> = (0..8)
            .filter_map(|i| ledger.claim_of(UnitId(i)))
            .map(|c| c.tile)
            .collect();
        assert_eq!(granted.len(), 3);
        granted.sort();
        granted.dedup();
        assert_eq!(granted.len(), 3);
    }
}
