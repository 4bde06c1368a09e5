//! Service state management and component initialization

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::ServiceConfig;
use analysis_engine::AnalysisGenerator;
use api_gateway::ApiGateway;
use player_registry::{PgPlayerRepository, PlayerRegistry, PlayerRepository};

/// Service state containing all initialized components
pub struct ServiceState {
    /// Service configuration
    pub config: ServiceConfig,

    /// Player data backend
    pub repository: Arc<dyn PlayerRepository>,

    /// Analysis generator shared by comparisons and era adjustments
    pub analysis: Arc<AnalysisGenerator>,
}

impl ServiceState {
    /// Create a new service state with all components initialized
    pub async fn new(config: ServiceConfig) -> Result<Self> {
        info!("Initializing service components...");

        let repository = select_repository(&config).await?;
        info!("Player repository ready (backend: {})", repository.backend_name());

        info!("Initializing AnalysisGenerator...");
        let analysis = Arc::new(
            AnalysisGenerator::from_config(&config.analysis)
                .context("Failed to create AnalysisGenerator")?,
        );
        info!("Analysis capability: {:?}", analysis.capability());

        Ok(Self { config, repository, analysis })
    }

    /// Build the HTTP gateway over the initialized components
    pub fn gateway(&self) -> ApiGateway {
        ApiGateway::new(self.config.gateway_config(), self.repository.clone(), self.analysis.clone())
    }
}

/// Postgres when a database URL is configured and reachable, the in-memory registry otherwise
async fn select_repository(config: &ServiceConfig) -> Result<Arc<dyn PlayerRepository>> {
    if let Some(url) = &config.database.url {
        info!("Connecting to Postgres...");
        match PgPlayerRepository::connect(url, config.database.max_connections).await {
            Ok(repository) => return Ok(Arc::new(repository)),
            Err(e) => {
                error!("Database connection failed: {}", e);
                warn!("Running without database, using in-memory roster");
            }
        }
    }

    load_registry(config).await.map(|registry| Arc::new(registry) as Arc<dyn PlayerRepository>)
}

/// In-memory registry from the configured roster file, or the built-in fixtures
async fn load_registry(config: &ServiceConfig) -> Result<PlayerRegistry> {
    match &config.data.roster_file {
        Some(path) => {
            let mut registry = PlayerRegistry::new();
            registry
                .load_from_file(path)
                .await
                .with_context(|| format!("Failed to load roster file: {:?}", path))?;
            Ok(registry)
        }
        None => Ok(PlayerRegistry::with_fixtures()),
    }
}
