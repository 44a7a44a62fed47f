//! Units: the autonomous agents of the battlefield.

use serde::{Deserialize, Serialize};

use crate::building::Building;
use crate::hex::HexCoord;
use crate::team::Team;

/// Unique identifier for a unit, allocated in spawn order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct UnitId(pub u32);

/// Threat memory: the most recent attacker and when the damage landed.
///
/// Written by the damage subsystem whenever the unit takes a hit; the
/// decision core only reads it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackerRecord {
    pub attacker: UnitId,
    /// Simulation time of the hit, in seconds.
    pub time: f32,
}

/// A unit on the battlefield.
///
/// A unit occupies one or more tiles; the first entry of `tiles` is its
/// anchor tile (where it "stands"), and bosses list their full footprint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub team: Team,
    pub health: i32,
    /// Attack range in hex distance from the anchor tile.
    pub attack_range: u32,
    /// Capture range in hex distance; captures happen from adjacent tiles.
    pub capture_range: u32,
    /// Whether this unit kind is able to flip capturable buildings.
    pub can_capture: bool,
    tiles: Vec<HexCoord>,
    pub last_attacker: Option<AttackerRecord>,
}

impl Unit {
    pub const DEFAULT_HEALTH: i32 = 10;
    pub const DEFAULT_ATTACK_RANGE: u32 = 1;
    pub const DEFAULT_CAPTURE_RANGE: u32 = 1;

    pub fn new(id: UnitId, team: Team, position: HexCoord) -> Self {
        Self {
            id,
            team,
            health: Self::DEFAULT_HEALTH,
            attack_range: Self::DEFAULT_ATTACK_RANGE,
            capture_range: Self::DEFAULT_CAPTURE_RANGE,
            can_capture: true,
            tiles: vec![position],
            last_attacker: None,
        }
    }

    pub fn with_attack_range(mut self, range: u32) -> Self {
        self.attack_range = range;
        self
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    /// Extends the footprint beyond the anchor tile (boss-sized units).
    pub fn with_extra_tiles(mut self, extra: impl IntoIterator<Item = HexCoord>) -> Self {
        self.tiles.extend(extra);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// The anchor tile this unit stands on.
    pub fn position(&self) -> HexCoord {
        self.tiles[0]
    }

    /// Every tile this unit occupies, anchor first.
    pub fn occupied_tiles(&self) -> &[HexCoord] {
        &self.tiles
    }

    /// Whether this unit occupies the given tile.
    pub fn occupies(&self, tile: HexCoord) -> bool {
        self.tiles.contains(&tile)
    }

    /// Moves the anchor tile; a multi-tile footprint shifts rigidly with it.
    pub fn move_to(&mut self, position: HexCoord) {
        let anchor = self.tiles[0];
        let (dq, dr) = (position.q - anchor.q, position.r - anchor.r);
        for tile in &mut self.tiles {
            tile.q += dq;
            tile.r += dr;
        }
    }

    /// Hex distance to the closest tile of `other`'s footprint.
    pub fn distance_to_unit(&self, other: &Unit) -> u32 {
        other
            .occupied_tiles()
            .iter()
            .map(|t| self.position().distance(*t))
            .min()
            .unwrap_or(u32::MAX)
    }

    /// Whether any tile of `target`'s footprint is within attack range.
    ///
    /// Multi-tile targets (bosses) count as in range as soon as one of
    /// their tiles is reachable.
    pub fn unit_in_attack_range(&self, target: &Unit) -> bool {
        self.distance_to_unit(target) <= self.attack_range
    }

    /// Whether the building's tile is within attack range.
    pub fn building_in_attack_range(&self, building: &Building) -> bool {
        self.position().distance(building.tile) <= self.attack_range
    }

    /// Whether the building's tile is within capture range.
    pub fn building_in_capture_range(&self, building: &Building) -> bool {
        self.position().distance(building.tile) <= self.capture_range
    }

    /// Records a hit for threat memory. Called by the damage subsystem.
    pub fn record_attacker(&mut self, attacker: UnitId, time: f32) {
        self.last_attacker = Some(AttackerRecord { attacker, time });
    }
}
