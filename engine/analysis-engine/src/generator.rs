//! Analysis generator: language model when configured, fixed text otherwise

use crate::config::{AnalysisCapability, AnalysisConfig};
use crate::error::AnalysisResult;
use crate::llm::{CompletionRequest, OpenAiClient, TextGenerator};
use crate::prompt;
use crate::types::{ComparisonCriteria, EraAdjustedStats, PlayerProfile};
use player_registry::CareerStats;
use std::sync::Arc;
use tracing::{info, warn};

/// Returned whenever a language-model call fails
pub const APOLOGY_ANALYSIS: &str =
    "An error occurred while generating the AI analysis. Please try again later.";

enum Backend {
    Fallback,
    LanguageModel { client: Arc<dyn TextGenerator>, comparison_max_tokens: u32, era_max_tokens: u32 },
}

/// Turns assembled player records into narrative text.
///
/// Construction fixes the capability; nothing is resolved lazily or globally.
pub struct AnalysisGenerator {
    backend: Backend,
}

impl AnalysisGenerator {
    /// Build from configuration, creating an HTTP client when a credential is present
    pub fn from_config(config: &AnalysisConfig) -> AnalysisResult<Self> {
        match config.capability() {
            AnalysisCapability::Fallback => {
                info!("No language model credential configured, using fallback analysis");
                Ok(Self::fallback())
            }
            AnalysisCapability::LanguageModel => {
                info!("Language model analysis enabled (model {})", config.model);
                let client = OpenAiClient::new(config)?;
                Ok(Self::with_generator(Arc::new(client), config))
            }
        }
    }

    /// Generator that never leaves the process
    pub fn fallback() -> Self {
        Self { backend: Backend::Fallback }
    }

    /// Generator backed by an arbitrary text generator
    pub fn with_generator(client: Arc<dyn TextGenerator>, config: &AnalysisConfig) -> Self {
        Self {
            backend: Backend::LanguageModel {
                client,
                comparison_max_tokens: config.comparison_max_tokens,
                era_max_tokens: config.era_max_tokens,
            },
        }
    }

    pub fn capability(&self) -> AnalysisCapability {
        match self.backend {
            Backend::Fallback => AnalysisCapability::Fallback,
            Backend::LanguageModel { .. } => AnalysisCapability::LanguageModel,
        }
    }

    /// Template text used when no language model is configured
    pub fn fallback_analysis(players: &[PlayerProfile]) -> String {
        let names = players.iter().map(|p| p.player.name.as_str()).collect::<Vec<_>>().join(" and ");
        format!(
            "Comparing the careers of {names} reveals interesting patterns in their statistical \
             impact and championship success. This analysis would be more detailed with the \
             OpenAI integration enabled."
        )
    }

    /// Comparison analysis, surfacing language-model failures
    pub async fn try_generate(
        &self,
        players: &[PlayerProfile],
        criteria: &ComparisonCriteria,
    ) -> AnalysisResult<String> {
        match &self.backend {
            Backend::Fallback => Ok(Self::fallback_analysis(players)),
            Backend::LanguageModel { client, comparison_max_tokens, .. } => {
                let request = CompletionRequest {
                    messages: prompt::comparison_messages(players, criteria),
                    max_tokens: *comparison_max_tokens,
                };
                client.complete(request).await
            }
        }
    }

    /// Comparison analysis; any failure becomes [`APOLOGY_ANALYSIS`]
    pub async fn generate(&self, players: &[PlayerProfile], criteria: &ComparisonCriteria) -> String {
        match self.try_generate(players, criteria).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Analysis generation failed: {}", e);
                APOLOGY_ANALYSIS.to_string()
            }
        }
    }

    /// Project career averages onto a modern baseline.
    ///
    /// Returns the input unchanged (`era_adjusted: false`) in fallback mode or
    /// when the call fails. The returned text is not parsed.
    pub async fn era_adjusted_stats(
        &self,
        stats: &CareerStats,
        year_start: Option<i32>,
        year_end: Option<i32>,
    ) -> EraAdjustedStats {
        let (client, max_tokens) = match &self.backend {
            Backend::Fallback => return EraAdjustedStats::unadjusted(*stats),
            Backend::LanguageModel { client, era_max_tokens, .. } => (client, *era_max_tokens),
        };

        let request =
            CompletionRequest { messages: prompt::era_messages(stats, year_start, year_end), max_tokens };

        match client.complete(request).await {
            Ok(explanation) => {
                EraAdjustedStats { stats: *stats, era_adjusted: true, explanation: Some(explanation) }
            }
            Err(e) => {
                warn!("Era adjustment failed, returning original stats: {}", e);
                EraAdjustedStats::unadjusted(*stats)
            }
        }
    }
}

impl std::fmt::Debug for AnalysisGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisGenerator").field("capability", &self.capability()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use player_registry::{Achievements, Player};
    use std::sync::Mutex;

    /// Returns a fixed reply and records every request
    struct ScriptedGenerator {
        reply: String,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedGenerator {
        fn new(reply: &str) -> Self {
            Self { reply: reply.to_string(), requests: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait::async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn complete(&self, request: CompletionRequest) -> AnalysisResult<String> {
            self.requests.lock().unwrap().push(request);
            Ok(self.reply.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait::async_trait]
    impl TextGenerator for FailingGenerator {
        async fn complete(&self, _request: CompletionRequest) -> AnalysisResult<String> {
            Err(AnalysisError::Status { status: 503, body: "overloaded".to_string() })
        }
    }

    fn stats() -> CareerStats {
        CareerStats { ppg: 27.0, rpg: 7.4, apg: 7.4, spg: 1.6, bpg: 0.8, fgp: 50.4, tpp: 34.4, ftp: 73.4 }
    }

    fn profiles() -> Vec<PlayerProfile> {
        vec![
            PlayerProfile {
                player: Player::new(2, "LeBron James", "Los Angeles Lakers", "SF", "23", 2003, 2023),
                stats: Some(stats()),
                achievements: Some(Achievements {
                    championships: 4,
                    mvps: 4,
                    all_star: 19,
                    all_nba: 19,
                    all_defense: 6,
                    scoring_titles: 1,
                    dpoy: 0,
                }),
            },
            PlayerProfile { player: Player::placeholder(999), stats: None, achievements: None },
        ]
    }

    #[tokio::test]
    async fn test_fallback_is_pure_and_names_players() {
        let generator = AnalysisGenerator::fallback();
        let criteria = ComparisonCriteria::all();

        let first = generator.generate(&profiles(), &criteria).await;
        let second = generator.generate(&profiles(), &criteria).await;

        assert_eq!(first, second);
        assert!(first.starts_with("Comparing the careers of LeBron James and Player 999"));
        assert!(first.contains("OpenAI integration enabled"));
        assert_eq!(generator.capability(), AnalysisCapability::Fallback);
    }

    #[tokio::test]
    async fn test_from_config_without_credential_is_fallback() {
        let generator = AnalysisGenerator::from_config(&AnalysisConfig::default()).unwrap();
        assert_eq!(generator.capability(), AnalysisCapability::Fallback);
    }

    #[tokio::test]
    async fn test_language_model_text_returned_verbatim() {
        let scripted = Arc::new(ScriptedGenerator::new("  LeBron's longevity is unmatched.\n"));
        let config = AnalysisConfig { comparison_max_tokens: 321, ..Default::default() };
        let generator = AnalysisGenerator::with_generator(scripted.clone(), &config);

        let criteria = ComparisonCriteria { longevity: true, ..Default::default() };
        let text = generator.generate(&profiles(), &criteria).await;
        assert_eq!(text, "  LeBron's longevity is unmatched.\n");

        let requests = scripted.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].max_tokens, 321);
        assert!(requests[0].messages[1].content.contains("focusing on these criteria: Longevity"));
        assert!(requests[0].messages[1].content.contains("LeBron James (Los Angeles Lakers)"));
    }

    #[tokio::test]
    async fn test_failure_becomes_apology() {
        let generator =
            AnalysisGenerator::with_generator(Arc::new(FailingGenerator), &AnalysisConfig::default());

        let text = generator.generate(&profiles(), &ComparisonCriteria::all()).await;
        assert_eq!(text, APOLOGY_ANALYSIS);

        let error = generator.try_generate(&profiles(), &ComparisonCriteria::all()).await;
        assert!(matches!(error, Err(AnalysisError::Status { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_era_adjustment_success() {
        let scripted = Arc::new(ScriptedGenerator::new("Roughly 29 PPG in today's pace."));
        let config = AnalysisConfig { era_max_tokens: 77, ..Default::default() };
        let generator = AnalysisGenerator::with_generator(scripted.clone(), &config);

        let adjusted = generator.era_adjusted_stats(&stats(), Some(2003), Some(2023)).await;
        assert!(adjusted.era_adjusted);
        assert_eq!(adjusted.stats, stats());
        assert_eq!(adjusted.explanation.as_deref(), Some("Roughly 29 PPG in today's pace."));

        let requests = scripted.requests.lock().unwrap();
        assert_eq!(requests[0].max_tokens, 77);
        assert!(requests[0].messages[1].content.contains("Player career: 2003-2023"));
    }

    #[tokio::test]
    async fn test_era_adjustment_defaults() {
        let fallback = AnalysisGenerator::fallback();
        assert_eq!(
            fallback.era_adjusted_stats(&stats(), Some(2003), Some(2023)).await,
            EraAdjustedStats::unadjusted(stats())
        );

        let failing =
            AnalysisGenerator::with_generator(Arc::new(FailingGenerator), &AnalysisConfig::default());
        let adjusted = failing.era_adjusted_stats(&stats(), None, None).await;
        assert!(!adjusted.era_adjusted);
        assert_eq!(adjusted.stats, stats());
        assert!(adjusted.explanation.is_none());
    }
}
