use crate::fixtures;
use crate::types::{Achievements, CareerStats, Player, PlayerId, RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// On-disk roster document accepted by [`PlayerRegistry::load_from_file`]
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RosterFile {
    pub players: Vec<Player>,

    #[serde(default)]
    pub stats: HashMap<PlayerId, CareerStats>,

    #[serde(default)]
    pub achievements: HashMap<PlayerId, Achievements>,
}

/// Player Registry - in-memory player directory plus stats/achievements store
///
/// Populated once at startup and read-only afterwards, so it can be shared
/// behind an `Arc` without locking.
pub struct PlayerRegistry {
    /// Map from player ID to identity record
    players_by_id: HashMap<PlayerId, Player>,

    /// Map from player ID to career averages
    stats_by_id: HashMap<PlayerId, CareerStats>,

    /// Map from player ID to award counts
    achievements_by_id: HashMap<PlayerId, Achievements>,
}

impl PlayerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            players_by_id: HashMap::new(),
            stats_by_id: HashMap::new(),
            achievements_by_id: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in roster
    pub fn with_fixtures() -> Self {
        let mut registry = Self::new();
        registry.populate(RosterFile {
            players: fixtures::players(),
            stats: fixtures::career_stats().into_iter().collect(),
            achievements: fixtures::achievements().into_iter().collect(),
        });
        registry
    }

    /// Load a roster from a JSON file, replacing the current contents
    pub async fn load_from_file<P: AsRef<Path>>(&mut self, file_path: P) -> RegistryResult<()> {
        info!("Loading roster from: {:?}", file_path.as_ref());

        let json_content = tokio::fs::read_to_string(&file_path).await?;
        let roster: RosterFile = serde_json::from_str(&json_content)?;

        info!("Loaded {} players from file", roster.players.len());
        self.populate(roster);

        Ok(())
    }

    fn populate(&mut self, roster: RosterFile) {
        self.players_by_id.clear();

        for player in roster.players {
            if self.players_by_id.contains_key(&player.id) {
                warn!("Duplicate player id {} ({}), keeping the first record", player.id, player.name);
                continue;
            }
            self.players_by_id.insert(player.id, player);
        }

        self.stats_by_id = roster.stats;
        self.achievements_by_id = roster.achievements;

        let orphaned = self
            .stats_by_id
            .keys()
            .chain(self.achievements_by_id.keys())
            .filter(|id| !self.players_by_id.contains_key(id))
            .count();
        if orphaned > 0 {
            warn!("{} stat/achievement records reference unknown players", orphaned);
        }
    }

    /// Get a player by ID
    pub fn get_by_id(&self, id: PlayerId) -> RegistryResult<&Player> {
        self.players_by_id.get(&id).ok_or(RegistryError::PlayerNotFound(id))
    }

    /// Get career stats by player ID
    pub fn get_stats(&self, id: PlayerId) -> RegistryResult<&CareerStats> {
        self.stats_by_id.get(&id).ok_or(RegistryError::StatsNotFound(id))
    }

    /// Get achievements by player ID
    pub fn get_achievements(&self, id: PlayerId) -> RegistryResult<&Achievements> {
        self.achievements_by_id.get(&id).ok_or(RegistryError::AchievementsNotFound(id))
    }

    /// Search players by case-insensitive substring of name or team.
    ///
    /// An empty (or all-whitespace) query is rejected; no matches is an empty vec.
    pub fn search_players(&self, query: &str) -> RegistryResult<Vec<&Player>> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Err(RegistryError::InvalidInput("Search query is required".to_string()));
        }

        let mut results: Vec<&Player> =
            self.players_by_id.values().filter(|player| player.matches(&query_lower)).collect();
        results.sort_by_key(|player| player.id);
        Ok(results)
    }

    /// Get all players ordered by ID
    pub fn get_all_players(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players_by_id.values().collect();
        players.sort_by_key(|player| player.id);
        players
    }

    /// Number of players in the registry
    pub fn player_count(&self) -> usize {
        self.players_by_id.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.players_by_id.is_empty()
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::with_fixtures()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = PlayerRegistry::with_fixtures();
        assert_eq!(registry.player_count(), 10);
        assert!(!registry.is_empty());
        assert!(PlayerRegistry::new().is_empty());
    }

    #[test]
    fn test_player_lookup() {
        let registry = PlayerRegistry::with_fixtures();

        let jordan = registry.get_by_id(1).unwrap();
        assert_eq!(jordan.name, "Michael Jordan");
        assert_eq!(jordan.team, "Chicago Bulls");
        assert_eq!(jordan.position.as_deref(), Some("SG"));
        assert_eq!(jordan.year_start, Some(1984));

        assert!(matches!(registry.get_by_id(999), Err(RegistryError::PlayerNotFound(999))));
    }

    #[test]
    fn test_stats_and_achievements_lookup() {
        let registry = PlayerRegistry::with_fixtures();

        let stats = registry.get_stats(1).unwrap();
        assert_eq!(stats.ppg, 30.1);
        assert_eq!(stats.ftp, 83.5);

        let achievements = registry.get_achievements(2).unwrap();
        assert_eq!(achievements.championships, 4);
        assert_eq!(achievements.all_star, 19);

        assert!(matches!(registry.get_stats(42), Err(RegistryError::StatsNotFound(42))));
        assert!(matches!(
            registry.get_achievements(42),
            Err(RegistryError::AchievementsNotFound(42))
        ));
    }

    #[test]
    fn test_every_fixture_player_has_records() {
        let registry = PlayerRegistry::with_fixtures();
        for player in registry.get_all_players() {
            assert!(registry.get_stats(player.id).is_ok(), "missing stats for {}", player.name);
            assert!(registry.get_achievements(player.id).is_ok(), "missing awards for {}", player.name);
        }
    }

    #[test]
    fn test_search_players() {
        let registry = PlayerRegistry::with_fixtures();

        // Partial name search
        let results = registry.search_players("Jordan").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Michael Jordan");

        // Case insensitive team search, ordered by id
        let results = registry.search_players("lakers").unwrap();
        let ids: Vec<PlayerId> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 6, 10]);

        // Every result contains the query in name or team
        for player in registry.search_players("an").unwrap() {
            assert!(player.matches("an"));
        }

        // No matches is not an error
        assert!(registry.search_players("zzz").unwrap().is_empty());
    }

    #[test]
    fn test_search_rejects_empty_query() {
        let registry = PlayerRegistry::with_fixtures();
        assert!(matches!(registry.search_players(""), Err(RegistryError::InvalidInput(_))));
        assert!(matches!(registry.search_players("   "), Err(RegistryError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        let document = serde_json::json!({
            "players": [
                { "id": 40, "name": "Test Center", "team": "Seattle SuperSonics" },
                { "id": 40, "name": "Duplicate", "team": "Nowhere" }
            ],
            "stats": {
                "40": { "ppg": 12.0, "rpg": 9.5, "apg": 1.1, "spg": 0.4, "bpg": 1.9,
                        "fgp": 51.0, "tpp": 0.0, "ftp": 61.2 }
            }
        });
        tokio::fs::write(&path, document.to_string()).await.unwrap();

        let mut registry = PlayerRegistry::with_fixtures();
        registry.load_from_file(&path).await.unwrap();

        assert_eq!(registry.player_count(), 1);
        assert_eq!(registry.get_by_id(40).unwrap().name, "Test Center");
        assert_eq!(registry.get_stats(40).unwrap().rpg, 9.5);
        assert!(registry.get_achievements(40).is_err());
        assert!(registry.get_by_id(1).is_err());
    }

    #[tokio::test]
    async fn test_load_from_missing_file() {
        let mut registry = PlayerRegistry::new();
        let result = registry.load_from_file("/nonexistent/roster.json").await;
        assert!(matches!(result, Err(RegistryError::Io(_))));
    }
}
