//! Shared primitive types, court positions, and roster slots.

use std::{fmt, str::FromStr};

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

/// Whole-dollar salary amount.
///
/// Unsigned so a negative salary cannot be expressed; zero is a legal
/// salary and passes every contest player check.
pub type Salary = u32;

/// Set of positions a player may occupy.
pub type PositionSet = HashSet<Position>;

/// Number of roster slots in a classic lineup.
pub const ROSTER_SIZE: usize = 8;

/// Basketball court position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// PG.
    #[serde(rename = "POINT GUARD")]
    PointGuard,
    /// SG.
    #[serde(rename = "SHOOTING GUARD")]
    ShootingGuard,
    /// SF.
    #[serde(rename = "SMALL FORWARD")]
    SmallForward,
    /// PF.
    #[serde(rename = "POWER FORWARD")]
    PowerForward,
    /// C.
    #[serde(rename = "CENTER")]
    Center,
}

impl Position {
    /// All positions in court order.
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    /// Standard roster abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Position::PointGuard => "POINT GUARD",
            Position::ShootingGuard => "SHOOTING GUARD",
            Position::SmallForward => "SMALL FORWARD",
            Position::PowerForward => "POWER FORWARD",
            Position::Center => "CENTER",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returned when a string names no known position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position: {0:?}")]
pub struct ParsePositionError(String);

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Accepts either the abbreviation (`"PG"`) or the display name
    /// (`"POINT GUARD"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| {
                wanted.eq_ignore_ascii_case(p.abbreviation())
                    || wanted.eq_ignore_ascii_case(p.display_name())
            })
            .ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

/// Named roster slot in a classic lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// PG slot.
    PointGuard,
    /// SG slot.
    ShootingGuard,
    /// SF slot.
    SmallForward,
    /// PF slot.
    PowerForward,
    /// C slot.
    Center,
    /// G (PG, SG).
    Guard,
    /// F (SF, PF).
    Forward,
    /// Util (PG, SG, SF, PF, C).
    Utility,
}

impl Slot {
    /// All slots in validation order.
    pub const ALL: [Slot; ROSTER_SIZE] = [
        Slot::PointGuard,
        Slot::ShootingGuard,
        Slot::SmallForward,
        Slot::PowerForward,
        Slot::Center,
        Slot::Guard,
        Slot::Forward,
        Slot::Utility,
    ];

    /// Positions that qualify a player for this slot.
    pub fn required_positions(self) -> &'static [Position] {
        match self {
            Slot::PointGuard => &[Position::PointGuard],
            Slot::ShootingGuard => &[Position::ShootingGuard],
            Slot::SmallForward => &[Position::SmallForward],
            Slot::PowerForward => &[Position::PowerForward],
            Slot::Center => &[Position::Center],
            Slot::Guard => &[Position::PointGuard, Position::ShootingGuard],
            Slot::Forward => &[Position::SmallForward, Position::PowerForward],
            Slot::Utility => &Position::ALL,
        }
    }

    /// [`Slot::required_positions`] collected into a set.
    pub fn required_position_set(self) -> PositionSet {
        self.required_positions().iter().copied().collect()
    }

    /// Index of this slot within [`Slot::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field name used when the slot is serialized.
    pub fn name(self) -> &'static str {
        match self {
            Slot::PointGuard => "point_guard",
            Slot::ShootingGuard => "shooting_guard",
            Slot::SmallForward => "small_forward",
            Slot::PowerForward => "power_forward",
            Slot::Center => "center",
            Slot::Guard => "guard",
            Slot::Forward => "forward",
            Slot::Utility => "utility",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
