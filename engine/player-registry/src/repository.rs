//! Repository contract the comparison and HTTP layers depend on

use crate::registry::PlayerRegistry;
use crate::types::{Achievements, CareerStats, Player, PlayerId, RegistryResult};

/// Read-only access to player identity, stats and achievements.
///
/// Implemented by the in-memory [`PlayerRegistry`] and by
/// [`crate::postgres::PgPlayerRepository`].
#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Case-insensitive name/team search; `InvalidInput` on an empty query
    async fn search(&self, query: &str) -> RegistryResult<Vec<Player>>;

    /// Every player, ordered by ID
    async fn list_players(&self) -> RegistryResult<Vec<Player>>;

    /// `PlayerNotFound` when absent
    async fn get_by_id(&self, id: PlayerId) -> RegistryResult<Player>;

    /// `StatsNotFound` when absent
    async fn get_stats(&self, id: PlayerId) -> RegistryResult<CareerStats>;

    /// `AchievementsNotFound` when absent
    async fn get_achievements(&self, id: PlayerId) -> RegistryResult<Achievements>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}

#[async_trait::async_trait]
impl PlayerRepository for PlayerRegistry {
    async fn search(&self, query: &str) -> RegistryResult<Vec<Player>> {
        Ok(self.search_players(query)?.into_iter().cloned().collect())
    }

    async fn list_players(&self) -> RegistryResult<Vec<Player>> {
        Ok(self.get_all_players().into_iter().cloned().collect())
    }

    async fn get_by_id(&self, id: PlayerId) -> RegistryResult<Player> {
        PlayerRegistry::get_by_id(self, id).cloned()
    }

    async fn get_stats(&self, id: PlayerId) -> RegistryResult<CareerStats> {
        PlayerRegistry::get_stats(self, id).copied()
    }

    async fn get_achievements(&self, id: PlayerId) -> RegistryResult<Achievements> {
        PlayerRegistry::get_achievements(self, id).copied()
    }

    fn backend_name(&self) -> &'static str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegistryError;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_registry_through_trait_object() {
        let repository: Arc<dyn PlayerRepository> = Arc::new(PlayerRegistry::with_fixtures());

        assert_eq!(repository.backend_name(), "in-memory");
        assert_eq!(repository.get_by_id(3).await.unwrap().name, "Kobe Bryant");
        assert_eq!(repository.get_stats(3).await.unwrap().ppg, 25.0);
        assert_eq!(repository.get_achievements(3).await.unwrap().championships, 5);
        assert_eq!(repository.list_players().await.unwrap().len(), 10);

        let celtics = repository.search("CELTICS").await.unwrap();
        assert_eq!(celtics.iter().map(|p| p.id).collect::<Vec<_>>(), vec![5, 8]);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let repository = PlayerRegistry::with_fixtures();
        let repository: &dyn PlayerRepository = &repository;

        assert!(repository.get_by_id(0).await.unwrap_err().is_not_found());
        assert!(repository.get_stats(0).await.unwrap_err().is_not_found());
        assert!(repository.get_achievements(0).await.unwrap_err().is_not_found());
        assert!(matches!(repository.search("").await, Err(RegistryError::InvalidInput(_))));
    }
}
