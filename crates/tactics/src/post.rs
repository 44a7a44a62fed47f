//! Return-to-post decisions: reserve slots and guard posts.

use game_core::HexCoord;

use crate::state::DecisionState;

/// Where a unit with a post should be, relative to where it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnDecision {
    /// Already standing on the post tile.
    Holding,
    /// Off post; walk back to this tile.
    MoveTo(HexCoord),
}

/// Decides whether the unit is on its granted reserve tile.
///
/// `None` when no slot is assigned.
pub fn reserve_return(current: HexCoord, state: &DecisionState) -> Option<ReturnDecision> {
    if !state.reserve_position_assigned {
        return None;
    }
    let tile = state.current_reserve_tile?;
    Some(if current == tile {
        ReturnDecision::Holding
    } else {
        ReturnDecision::MoveTo(tile)
    })
}

/// Decides whether the unit is on its guard post. `None` when no post is set.
pub fn guard_return(current: HexCoord, state: &DecisionState) -> Option<ReturnDecision> {
    let post = state.guard_post?;
    Some(if current == post {
        ReturnDecision::Holding
    } else {
        ReturnDecision::MoveTo(post)
    })
}
