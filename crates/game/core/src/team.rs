//! Team ownership and hostility rules.

use serde::{Deserialize, Serialize};

/// Owning side of a unit or building.
///
/// `NeutralEnemy` marks map garrisons that oppose the player without
/// belonging to the main enemy force (e.g. perimeter guards around a
/// neutral capture point).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Team {
    Player,
    Enemy,
    Neutral,
    NeutralEnemy,
}

impl Team {
    /// Whether entities of this team treat `other` as a valid combat target.
    ///
    /// Pure `Neutral` fights nobody and is fought by nobody; capturable
    /// neutral buildings change hands through capture, not combat.
    pub fn is_hostile_to(self, other: Team) -> bool {
        match (self, other) {
            (Team::Player, Team::Enemy) | (Team::Player, Team::NeutralEnemy) => true,
            (Team::Enemy, Team::Player) | (Team::NeutralEnemy, Team::Player) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostility_is_symmetric_for_player_vs_enemy() {
        assert!(Team::Player.is_hostile_to(Team::Enemy));
        assert!(Team::Enemy.is_hostile_to(Team::Player));
        assert!(Team::Player.is_hostile_to(Team::NeutralEnemy));
        assert!(Team::NeutralEnemy.is_hostile_to(Team::Player));
    }

    #[test]
    fn neutral_fights_nobody() {
        for team in [Team::Player, Team::Enemy, Team::Neutral, Team::NeutralEnemy] {
            assert!(!Team::Neutral.is_hostile_to(team));
            assert!(!team.is_hostile_to(Team::Neutral));
        }
    }
}
