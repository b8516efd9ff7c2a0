//! Validation errors for players, contest entries, lineups, and rules.
//!
//! Every error here is permanent: the caller must supply corrected inputs
//! and construct again.
//!
//! ```
//! use dfs_lineup::{error::PlayerError, player::Player};
//!
//! let result = Player::new("", "Jae");
//! assert_eq!(result, Err(PlayerError::BlankId));
//! ```

use thiserror::Error;

use crate::types::{Salary, Slot};

/// Core player identity violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// The id was empty.
    #[error("player id cannot be blank")]
    BlankId,
    /// The name was empty.
    #[error("player name cannot be blank")]
    BlankName,
}

/// Player pool entry violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContestPlayerError {
    /// The game id was empty.
    #[error("game id cannot be blank")]
    BlankGameId,
    /// No eligible positions were given.
    #[error("eligible positions cannot be empty")]
    EmptyPositionSet,
}

/// Lineup composition violations, in the order they are checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineupError {
    /// The same player identity occupies more than one slot.
    #[error("player {id} appears in more than one slot")]
    DuplicatePlayer {
        /// Id of the first repeated player.
        id: String,
    },
    /// Too few distinct games are represented.
    #[error("lineup must include players from at least {required} different games, found {distinct}")]
    InsufficientGameDiversity {
        /// Distinct game ids found.
        distinct: usize,
        /// Minimum required.
        required: usize,
    },
    /// Total salary is over the cap.
    #[error("total salary {total} exceeds the salary cap of {cap}")]
    SalaryCapExceeded {
        /// Sum of slot salaries.
        total: u64,
        /// Configured cap.
        cap: Salary,
    },
    /// The occupant of `slot` is not eligible for it.
    #[error("player is not eligible for the {slot} slot")]
    InvalidSlotPosition {
        /// Offending slot.
        slot: Slot,
    },
    /// A builder was finished with an empty slot.
    #[error("no player assigned to the {slot} slot")]
    MissingSlot {
        /// First empty slot.
        slot: Slot,
    },
}

/// Contest rules configuration errors.
#[derive(Error, Debug)]
pub enum RulesError {
    /// The document was not valid JSON for [`crate::rules::ContestRules`].
    #[error("failed to parse contest rules: {0}")]
    Parse(#[from] serde_json::Error),
    /// `min_games` was outside `1..=8`.
    #[error("min_games must be between 1 and {max}, got {got}")]
    InvalidMinGames {
        /// Rejected value.
        got: usize,
        /// Largest accepted value.
        max: usize,
    },
}

/// Any validation failure raised by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// See [`PlayerError`].
    #[error(transparent)]
    Player(#[from] PlayerError),
    /// See [`ContestPlayerError`].
    #[error(transparent)]
    ContestPlayer(#[from] ContestPlayerError),
    /// See [`LineupError`].
    #[error(transparent)]
    Lineup(#[from] LineupError),
}
