//! Error types for world-state mutation.

use crate::building::BuildingId;
use crate::unit::UnitId;

/// Errors surfaced while mutating the world state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("unknown unit {0:?}")]
    UnknownUnit(UnitId),

    #[error("unknown building {0:?}")]
    UnknownBuilding(BuildingId),

    #[error("building {0:?} cannot be captured by {1}")]
    NotCapturable(BuildingId, crate::team::Team),
}
