use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Integer key naming a player across every store. Signed: unknown ids,
/// negative ones included, resolve to placeholders in comparisons.
pub type PlayerId = i64;

/// Identity record for a historical NBA player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique player identifier
    pub id: PlayerId,

    /// Full name (e.g., "Michael Jordan")
    pub name: String,

    /// Team the player is most associated with (e.g., "Chicago Bulls")
    pub team: String,

    /// Position abbreviation (e.g., "SG", "C")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Jersey number as printed, kept as text ("00" is not "0")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<String>,

    /// First season of the career
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_start: Option<i32>,

    /// Last season of the career
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_end: Option<i32>,
}

impl Player {
    /// Create a fully populated player record
    pub fn new(
        id: PlayerId,
        name: &str,
        team: &str,
        position: &str,
        jersey_number: &str,
        year_start: i32,
        year_end: i32,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            team: team.to_string(),
            position: Some(position.to_string()),
            jersey_number: Some(jersey_number.to_string()),
            year_start: Some(year_start),
            year_end: Some(year_end),
        }
    }

    /// Stand-in identity for an identifier that has no record
    pub fn placeholder(id: PlayerId) -> Self {
        Self {
            id,
            name: format!("Player {id}"),
            team: "Unknown".to_string(),
            position: None,
            jersey_number: None,
            year_start: None,
            year_end: None,
        }
    }

    /// Case-insensitive substring match against name or team.
    /// `query_lower` must already be lower-cased.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.team.to_lowercase().contains(query_lower)
    }
}

/// Career per-game averages and shooting percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CareerStats {
    /// Points per game
    pub ppg: f64,
    /// Rebounds per game
    pub rpg: f64,
    /// Assists per game
    pub apg: f64,
    /// Steals per game (0.0 before the stat was tracked)
    pub spg: f64,
    /// Blocks per game (0.0 before the stat was tracked)
    pub bpg: f64,
    /// Field-goal percentage
    pub fgp: f64,
    /// Three-point percentage
    pub tpp: f64,
    /// Free-throw percentage
    pub ftp: f64,
}

/// Career award counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievements {
    pub championships: u32,
    pub mvps: u32,
    pub all_star: u32,
    pub all_nba: u32,
    pub all_defense: u32,
    pub scoring_titles: u32,
    /// Defensive Player of the Year awards
    pub dpoy: u32,
}

/// Errors raised by registry lookups and loaders
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("Stats for player {0} not found")]
    StatsNotFound(PlayerId),

    #[error("Achievements for player {0} not found")]
    AchievementsNotFound(PlayerId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RegistryError {
    /// True for any of the three "no record for this identifier" variants
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::PlayerNotFound(_)
                | RegistryError::StatsNotFound(_)
                | RegistryError::AchievementsNotFound(_)
        )
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
