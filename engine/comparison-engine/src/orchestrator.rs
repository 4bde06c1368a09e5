//! Comparison orchestration

use crate::error::{ComparisonError, EngineResult};
use crate::types::{ComparisonRequest, ComparisonResult, PlayerSummary};
use analysis_engine::{
    AnalysisGenerator, AnalysisResult, ComparisonCriteria, PlayerProfile, APOLOGY_ANALYSIS,
};
use player_registry::{Player, PlayerId, PlayerRepository, RegistryResult};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Minimum number of distinct players in a comparison
pub const MIN_PLAYERS: usize = 2;

/// Produces the narrative for a set of assembled players
#[async_trait::async_trait]
pub trait ComparisonAnalyst: Send + Sync {
    async fn analyze(
        &self,
        players: &[PlayerProfile],
        criteria: &ComparisonCriteria,
    ) -> AnalysisResult<String>;
}

#[async_trait::async_trait]
impl ComparisonAnalyst for AnalysisGenerator {
    async fn analyze(
        &self,
        players: &[PlayerProfile],
        criteria: &ComparisonCriteria,
    ) -> AnalysisResult<String> {
        self.try_generate(players, criteria).await
    }
}

/// Map "no record" to `None`, keep every other error
fn optional<T>(result: RegistryResult<T>) -> RegistryResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Distinct identifiers in first-seen order
fn distinct_ids(ids: &[PlayerId]) -> Vec<PlayerId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Builds comparisons from the repository and the analyst.
///
/// Stateless: each call is independent and only reads shared data.
pub struct ComparisonOrchestrator {
    repository: Arc<dyn PlayerRepository>,
    analyst: Arc<dyn ComparisonAnalyst>,
}

impl ComparisonOrchestrator {
    pub fn new(repository: Arc<dyn PlayerRepository>, analyst: Arc<dyn ComparisonAnalyst>) -> Self {
        Self { repository, analyst }
    }

    pub fn repository(&self) -> &Arc<dyn PlayerRepository> {
        &self.repository
    }

    /// Resolve one identifier, degrading unknown players to a placeholder
    async fn assemble(&self, id: PlayerId) -> RegistryResult<PlayerProfile> {
        let player = match optional(self.repository.get_by_id(id).await)? {
            Some(player) => player,
            None => {
                warn!("Player {} not found, using placeholder in comparison", id);
                Player::placeholder(id)
            }
        };

        let stats = optional(self.repository.get_stats(id).await)?;
        let achievements = optional(self.repository.get_achievements(id).await)?;

        Ok(PlayerProfile { player, stats, achievements })
    }

    /// Generate a comparison.
    ///
    /// Fails with `InvalidInput` when fewer than two distinct players are named,
    /// before any lookup. Unknown players and analyst failures never fail the call.
    pub async fn generate(&self, request: ComparisonRequest) -> EngineResult<ComparisonResult> {
        let ids = distinct_ids(&request.player_ids);
        if ids.len() < MIN_PLAYERS {
            return Err(ComparisonError::InvalidInput(
                "At least two player IDs are required".to_string(),
            ));
        }
        if ids.len() != request.player_ids.len() {
            debug!("Collapsed duplicate player IDs {:?} to {:?}", request.player_ids, ids);
        }

        let mut profiles = Vec::with_capacity(ids.len());
        for id in &ids {
            profiles.push(self.assemble(*id).await?);
        }

        let flags = request.criteria_flags();
        let analysis = match self.analyst.analyze(&profiles, &flags).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Analysis failed, returning fallback text: {}", e);
                APOLOGY_ANALYSIS.to_string()
            }
        };

        info!("Generated comparison for players {:?}", ids);

        Ok(ComparisonResult {
            players: profiles.iter().map(|p| PlayerSummary::from(&p.player)).collect(),
            analysis,
            stats: profiles.iter().map(|p| (p.player.id, p.stats.into())).collect(),
            achievements: profiles.iter().map(|p| (p.player.id, p.achievements.into())).collect(),
            criteria: request.criteria.unwrap_or_default(),
        })
    }
}
