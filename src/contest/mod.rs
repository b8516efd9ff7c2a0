//! Salary cap contest models.

/// Classic lineups, their validation, and the slot-by-slot builder.
pub mod lineup;
/// Contest player pool entries and results.
pub mod player_pool;
