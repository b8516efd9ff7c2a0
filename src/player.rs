//! Core player identity.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::error::PlayerError;

/// A real-world player, independent of any contest.
///
/// Two players are the same identity when their ids match; the name is
/// carried for display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PlayerFields")]
pub struct Player {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct PlayerFields {
    id: String,
    name: String,
}

impl TryFrom<PlayerFields> for Player {
    type Error = PlayerError;

    fn try_from(value: PlayerFields) -> Result<Self, Self::Error> {
        Self::new(value.id, value.name)
    }
}

impl Player {
    /// Validates and constructs a player.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, PlayerError> {
        let id = id.into();
        let name = name.into();

        if id.is_empty() {
            return Err(PlayerError::BlankId);
        }
        if name.is_empty() {
            return Err(PlayerError::BlankName);
        }

        Ok(Self { id, name })
    }

    /// Stable player id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key used for equality, hashing, and duplicate detection.
    pub fn identity_key(&self) -> &str {
        &self.id
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.identity_key() == other.identity_key()
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_key().hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
