//! Main ApiGateway implementation

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::rest_api::{create_routes, ApiContext};

use analysis_engine::AnalysisGenerator;
use comparison_engine::ComparisonOrchestrator;
use player_registry::PlayerRepository;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// HTTP front end for the comparison service
pub struct ApiGateway {
    /// Gateway configuration
    config: GatewayConfig,

    /// State shared by every request handler
    context: Arc<ApiContext>,
}

impl ApiGateway {
    /// Create a new ApiGateway
    pub fn new(
        config: GatewayConfig,
        repository: Arc<dyn PlayerRepository>,
        analysis: Arc<AnalysisGenerator>,
    ) -> Self {
        let orchestrator = Arc::new(ComparisonOrchestrator::new(repository.clone(), analysis.clone()));
        let context = Arc::new(ApiContext {
            repository,
            orchestrator,
            analysis,
            production: config.environment.is_production(),
        });

        Self { config, context }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Resolved bind address
    pub fn addr(&self) -> GatewayResult<SocketAddr> {
        self.config
            .server_addr()
            .map_err(|e| GatewayError::Config(format!("Invalid server address: {e}")))
    }

    /// Serve until `shutdown` resolves; in-flight requests are allowed to finish
    pub async fn serve<S>(&self, shutdown: S) -> GatewayResult<()>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        let addr = self.addr()?;
        let routes = create_routes(self.context.clone(), &self.config.cors_allowed_origins);

        let (bound, server) = warp::serve(routes).try_bind_with_graceful_shutdown(addr, shutdown)?;
        info!(
            "ApiGateway listening on {} (backend: {}, environment: {:?})",
            bound,
            self.context.repository.backend_name(),
            self.config.environment
        );

        server.await;
        info!("ApiGateway stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use player_registry::PlayerRegistry;

    #[tokio::test]
    async fn test_serve_until_shutdown() {
        let config = GatewayConfig { host: "127.0.0.1".to_string(), port: 0, ..Default::default() };
        let gateway = ApiGateway::new(
            config,
            Arc::new(PlayerRegistry::with_fixtures()),
            Arc::new(AnalysisGenerator::fallback()),
        );

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        tx.send(()).unwrap();
        let result = gateway
            .serve(async move {
                let _ = rx.await;
            })
            .await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_address() {
        let config = GatewayConfig { host: "nowhere at all".to_string(), ..Default::default() };
        let gateway = ApiGateway::new(
            config,
            Arc::new(PlayerRegistry::with_fixtures()),
            Arc::new(AnalysisGenerator::fallback()),
        );
        assert!(matches!(gateway.addr(), Err(GatewayError::Config(_))));
    }
}
