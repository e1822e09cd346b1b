//! Game configuration types.
//!
//! The board topology is fixed; what a host may configure is:
//! - `PlayerProfile`: display name and color for each seat
//! - `GameConfig`: the four profiles plus the dice seed
//!
//! Configurations are plain serde structs so a host can ship them as JSON.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{PlayerId, PlayerMap};

/// Display identity of one seat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Human-readable name (used in notifications).
    pub name: String,

    /// CSS-style hex color, `#rrggbb`.
    pub color: String,
}

impl PlayerProfile {
    /// Create a new profile.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Default profile for a seat: Red, Blue, Yellow, Green.
    #[must_use]
    pub fn default_for(player: PlayerId) -> Self {
        match player.index() {
            0 => Self::new("Red", "#ef4444"),
            1 => Self::new("Blue", "#3b82f6"),
            2 => Self::new("Yellow", "#facc15"),
            _ => Self::new("Green", "#22c55e"),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seat profiles in turn order.
    pub players: PlayerMap<PlayerProfile>,

    /// Seed for the default dice. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: PlayerMap::new(PlayerProfile::default_for),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace one seat's profile.
    #[must_use]
    pub fn with_player(mut self, player: PlayerId, profile: PlayerProfile) -> Self {
        self.players[player] = profile;
        self
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that names are present and distinct and colors are `#rrggbb`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (player, profile) in self.players.iter() {
            if profile.name.trim().is_empty() {
                return Err(ConfigError::EmptyName(player));
            }
            if !is_hex_color(&profile.color) {
                return Err(ConfigError::InvalidColor {
                    player,
                    color: profile.color.clone(),
                });
            }
            let duplicate = self
                .players
                .iter()
                .take(player.index())
                .any(|(_, earlier)| earlier.name == profile.name);
            if duplicate {
                return Err(ConfigError::DuplicateName(profile.name.clone()));
            }
        }
        Ok(())
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
