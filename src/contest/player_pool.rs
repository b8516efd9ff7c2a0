//! Player pool entries for salary cap contests.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ContestPlayerError, Error},
    player::Player,
    sets::is_disjoint,
    types::{PositionSet, Salary, Slot},
};

/// A player as listed in one contest's player pool.
///
/// The underlying [`Player`] is shared, never copied, so the same identity
/// can appear in many pools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContestPlayerFields")]
pub struct ContestPlayer {
    player: Arc<Player>,
    positions: PositionSet,
    game_id: String,
    salary: Salary,
}

#[derive(Deserialize)]
struct ContestPlayerFields {
    player: Player,
    positions: PositionSet,
    game_id: String,
    salary: Salary,
}

impl TryFrom<ContestPlayerFields> for ContestPlayer {
    type Error = ContestPlayerError;

    fn try_from(value: ContestPlayerFields) -> Result<Self, Self::Error> {
        Self::new(
            Arc::new(value.player),
            value.positions,
            value.game_id,
            value.salary,
        )
    }
}

impl ContestPlayer {
    /// Validates and constructs a pool entry.
    pub fn new(
        player: Arc<Player>,
        positions: PositionSet,
        game_id: impl Into<String>,
        salary: Salary,
    ) -> Result<Self, ContestPlayerError> {
        let game_id = game_id.into();

        if game_id.is_empty() {
            return Err(ContestPlayerError::BlankGameId);
        }
        if positions.is_empty() {
            return Err(ContestPlayerError::EmptyPositionSet);
        }

        Ok(Self {
            player,
            positions,
            game_id,
            salary,
        })
    }

    /// Builds the core [`Player`] and the pool entry in one step.
    pub fn from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        positions: PositionSet,
        game_id: impl Into<String>,
        salary: Salary,
    ) -> Result<Self, Error> {
        let player = Arc::new(Player::new(id, name)?);
        Ok(Self::new(player, positions, game_id, salary)?)
    }

    /// Underlying player identity.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Shared handle to the underlying player.
    pub fn shared_player(&self) -> &Arc<Player> {
        &self.player
    }

    /// Positions this entry may fill.
    pub fn positions(&self) -> &PositionSet {
        &self.positions
    }

    /// Game this entry plays in.
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    /// Contest salary.
    pub fn salary(&self) -> Salary {
        self.salary
    }

    /// True when any eligible position is accepted by `slot`.
    pub fn is_eligible_for(&self, slot: Slot) -> bool {
        !is_disjoint(&self.positions, &slot.required_position_set())
    }
}

/// A pool entry paired with the fantasy points it scored.
///
/// "Contest results will be determined by the total points accumulated by
/// each individual lineup entry."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestResultPlayer {
    /// Entry that scored.
    pub contest_player: ContestPlayer,
    /// Fantasy points.
    pub points: f64,
}

impl ContestResultPlayer {
    /// Pairs an entry with its points.
    pub fn new(contest_player: ContestPlayer, points: f64) -> Self {
        Self {
            contest_player,
            points,
        }
    }
}
