//! Contest rules configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::RulesError,
    types::{ROSTER_SIZE, Salary},
};

/// "A valid lineup must not exceed the salary cap of $50,000."
pub const CLASSIC_SALARY_CAP: Salary = 50_000;

/// "Lineups ... must include players from at least 2 different NBA games."
pub const CLASSIC_MIN_GAMES: usize = 2;

/// Limits applied when a lineup is constructed.
///
/// Defaults to the NBA Classic salary cap contest. Every value is checked
/// on construction, so a `min_games` outside `1..=8` never reaches lineup
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RulesFields")]
pub struct ContestRules {
    salary_cap: Salary,
    min_games: usize,
}

// Fields missing from a document keep their classic default.
#[derive(Deserialize)]
#[serde(default)]
struct RulesFields {
    salary_cap: Salary,
    min_games: usize,
}

impl Default for RulesFields {
    fn default() -> Self {
        Self {
            salary_cap: CLASSIC_SALARY_CAP,
            min_games: CLASSIC_MIN_GAMES,
        }
    }
}

impl TryFrom<RulesFields> for ContestRules {
    type Error = RulesError;

    fn try_from(value: RulesFields) -> Result<Self, Self::Error> {
        Self::new(value.salary_cap, value.min_games)
    }
}

impl Default for ContestRules {
    fn default() -> Self {
        Self {
            salary_cap: CLASSIC_SALARY_CAP,
            min_games: CLASSIC_MIN_GAMES,
        }
    }
}

impl ContestRules {
    /// Validates and constructs a rule set.
    pub fn new(salary_cap: Salary, min_games: usize) -> Result<Self, RulesError> {
        if min_games == 0 || min_games > ROSTER_SIZE {
            return Err(RulesError::InvalidMinGames {
                got: min_games,
                max: ROSTER_SIZE,
            });
        }
        Ok(Self {
            salary_cap,
            min_games,
        })
    }

    /// Parses and checks a JSON rules document.
    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        let fields: RulesFields = serde_json::from_str(json)?;
        let rules = Self::try_from(fields)?;
        debug!(
            salary_cap = rules.salary_cap,
            min_games = rules.min_games,
            "loaded contest rules"
        );
        Ok(rules)
    }

    /// Inclusive ceiling on total lineup salary.
    pub fn salary_cap(&self) -> Salary {
        self.salary_cap
    }

    /// Minimum number of distinct games across the roster.
    pub fn min_games(&self) -> usize {
        self.min_games
    }
}
