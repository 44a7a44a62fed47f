//! Buildings: capture points, strongholds, and their defensive reserve tiles.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::hex::HexCoord;
use crate::team::Team;

/// Unique identifier for a building.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BuildingId(pub u32);

/// Upper bound on defensive reserve slots: the ring of adjacent tiles.
pub const MAX_RESERVE_SLOTS: usize = 6;

/// The bounded set of tiles a building offers as defensive posts.
pub type ReserveTiles = ArrayVec<HexCoord, MAX_RESERVE_SLOTS>;

/// A building on the battlefield.
///
/// Buildings occupy a single tile. A defensible building additionally
/// carries a pool of reserve tiles; slot ownership is tracked by the
/// reservation allocator, not here — the building only declares which tiles
/// exist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub team: Team,
    pub health: i32,
    /// Whether opposing units can flip this building's ownership by capture.
    pub recapturable: bool,
    pub tile: HexCoord,
    pub reserve_tiles: ReserveTiles,
}

impl Building {
    pub const DEFAULT_HEALTH: i32 = 50;

    pub fn new(id: BuildingId, team: Team, tile: HexCoord) -> Self {
        Self {
            id,
            team,
            health: Self::DEFAULT_HEALTH,
            recapturable: false,
            tile,
            reserve_tiles: ReserveTiles::new(),
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn recapturable(mut self) -> Self {
        self.recapturable = true;
        self
    }

    /// Declares reserve tiles for this building, capped at
    /// [`MAX_RESERVE_SLOTS`]; extra tiles are ignored.
    pub fn with_reserve_tiles(mut self, tiles: impl IntoIterator<Item = HexCoord>) -> Self {
        self.reserve_tiles = tiles
            .into_iter()
            .take(MAX_RESERVE_SLOTS)
            .collect();
        self
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Whether a unit of `team` could capture this building right now:
    /// the building must be of a capturable kind and not already owned by
    /// that side.
    pub fn capturable_by(&self, team: Team) -> bool {
        self.recapturable && self.team != team
    }
}
