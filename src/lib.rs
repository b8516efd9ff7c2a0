//! Validated DraftKings NBA salary cap lineups.
//!
//! Values are built through validating constructors only, so a
//! [`contest::lineup::Lineup`] that exists is a legal lineup.
//!
//! # Examples
//!
//! ```
//! use dfs_lineup::{
//!     contest::{lineup::{Lineup, LineupSlots}, player_pool::ContestPlayer},
//!     error::LineupError,
//!     types::{Position, PositionSet, Slot},
//! };
//!
//! fn entry(id: &str, pos: Position, game: &str) -> ContestPlayer {
//!     let positions: PositionSet = [pos].into_iter().collect();
//!     ContestPlayer::from_parts(id, format!("player {id}"), positions, game, 6_000)
//!         .expect("valid entry")
//! }
//!
//! let slots = LineupSlots {
//!     point_guard: entry("1", Position::PointGuard, "g1"),
//!     shooting_guard: entry("2", Position::ShootingGuard, "g1"),
//!     small_forward: entry("3", Position::SmallForward, "g1"),
//!     power_forward: entry("4", Position::PowerForward, "g1"),
//!     center: entry("5", Position::PointGuard, "g2"),
//!     guard: entry("6", Position::ShootingGuard, "g2"),
//!     forward: entry("7", Position::PowerForward, "g2"),
//!     utility: entry("8", Position::Center, "g2"),
//! };
//!
//! assert_eq!(
//!     Lineup::new(slots),
//!     Err(LineupError::InvalidSlotPosition { slot: Slot::Center })
//! );
//! ```
#![deny(missing_docs)]

/// Salary cap contest entries and lineups.
pub mod contest;
/// Validation error types.
pub mod error;
/// Core player identity.
pub mod player;
/// Contest rules configuration.
pub mod rules;
/// Set helpers used by eligibility checks.
pub mod sets;
/// Shared primitive types, positions, and slots.
pub mod types;
