//! World data model shared by the decision core and its executors.
//!
//! `game-core` defines the canonical entities of the battlefield (units,
//! buildings, teams) and the hex-grid geometry queries the decision core
//! consumes. It contains no decision policy: target selection, engagement
//! planning, and reservation logic live in the `tactics` crate and only read
//! or mutate the types re-exported here.

pub mod building;
pub mod error;
pub mod hex;
pub mod team;
pub mod unit;
pub mod world;

pub use building::{Building, BuildingId, MAX_RESERVE_SLOTS, ReserveTiles};
pub use error::WorldError;
pub use hex::HexCoord;
pub use team::Team;
pub use unit::{AttackerRecord, Unit, UnitId};
pub use world::WorldState;
