//! Service configuration management

use analysis_engine::AnalysisConfig;
use anyhow::{Context, Result};
use api_gateway::{Environment, GatewayConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Language-model configuration
    pub analysis: AnalysisConfig,

    /// Optional Postgres backend
    pub database: DatabaseConfig,

    /// Roster data source
    pub data: DataConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Service-level configuration
    pub service: ServiceSettings,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    pub cors_allowed_origins: Vec<String>,
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Postgres connection string; the in-memory roster is used when absent
    pub url: Option<String>,

    pub max_connections: u32,
}

/// Roster data settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON roster replacing the built-in players
    pub roster_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (pretty, compact, json)
    pub format: String,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Deployment environment
    pub environment: Environment,

    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let gateway = GatewayConfig::default();
        Self {
            host: gateway.host,
            port: gateway.port,
            cors_allowed_origins: gateway.cors_allowed_origins,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: None, max_connections: 5 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self { environment: Environment::Development, shutdown_timeout_secs: 10 }
    }
}

impl ServiceConfig {
    /// Gateway view of this configuration
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            host: self.server.host.clone(),
            port: self.server.port,
            cors_allowed_origins: self.server.cors_allowed_origins.clone(),
            environment: self.service.environment,
        }
    }
}

/// Load configuration from an optional file and the process environment
pub fn load_config(config_file: Option<&Path>) -> Result<ServiceConfig> {
    let path = config_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("HARDWOOD_CONFIG").ok().map(PathBuf::from));

    let mut config = match path {
        Some(path) => {
            tracing::debug!("Loading configuration from file: {:?}", path);
            load_from_file(&path)?
        }
        None => ServiceConfig::default(),
    };

    // Override with environment variables
    apply_env(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

/// Load configuration from a TOML file
pub fn load_from_file(path: &Path) -> Result<ServiceConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
}

/// Overlay environment variables, read through `var`
pub fn apply_env<F>(config: &mut ServiceConfig, var: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| var(key).filter(|value| !value.trim().is_empty());

    if let Some(key) = non_empty("OPENAI_API_KEY") {
        config.analysis.api_key = Some(key);
    }

    if let Some(url) = non_empty("OPENAI_BASE_URL") {
        config.analysis.base_url = url;
    }

    if let Some(model) = non_empty("OPENAI_MODEL") {
        config.analysis.model = model;
    }

    if let Some(url) = non_empty("DATABASE_URL") {
        config.database.url = Some(url);
    }

    if let Some(port) = non_empty("PORT") {
        config.server.port =
            port.trim().parse().with_context(|| format!("Invalid PORT value: {port}"))?;
    }

    if let Some(host) = non_empty("HARDWOOD_HOST") {
        config.server.host = host;
    }

    if let Some(env) = non_empty("HARDWOOD_ENV") {
        config.service.environment = env.parse().map_err(anyhow::Error::msg)?;
    }

    if let Some(level) = non_empty("HARDWOOD_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Some(format) = non_empty("HARDWOOD_LOG_FORMAT") {
        config.logging.format = format;
    }

    if let Some(roster) = non_empty("HARDWOOD_ROSTER_FILE") {
        config.data.roster_file = Some(PathBuf::from(roster));
    }

    Ok(())
}

/// Validate configuration
pub fn validate_config(config: &ServiceConfig) -> Result<()> {
    // Validate log level
    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow::anyhow!("Invalid log level: {}", config.logging.level)),
    }

    // Validate log format
    match config.logging.format.as_str() {
        "json" | "pretty" | "compact" => {}
        _ => return Err(anyhow::anyhow!("Invalid log format: {}", config.logging.format)),
    }

    // Validate server port
    if config.server.port == 0 {
        return Err(anyhow::anyhow!("Invalid server port: {}", config.server.port));
    }

    if config.database.max_connections == 0 {
        return Err(anyhow::anyhow!("database.max_connections must be greater than zero"));
    }

    config.analysis.validate().map_err(|e| anyhow::anyhow!("Invalid analysis config: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.analysis.model, "gpt-4");
        assert!(config.database.url.is_none());
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hardwood.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 4000

[analysis]
model = "gpt-4o-mini"
comparison_max_tokens = 800

[data]
roster_file = "roster.json"

[service]
environment = "production"
"#,
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.analysis.model, "gpt-4o-mini");
        assert_eq!(config.analysis.comparison_max_tokens, 800);
        assert_eq!(config.analysis.era_max_tokens, 500);
        assert_eq!(config.data.roster_file, Some(PathBuf::from("roster.json")));
        assert!(config.service.environment.is_production());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = ServiceConfig::default();
        config.server.port = 4000;

        apply_env(
            &mut config,
            env(&[
                ("OPENAI_API_KEY", "sk-test"),
                ("PORT", "5050"),
                ("DATABASE_URL", "postgres://localhost/hardwood"),
                ("HARDWOOD_ENV", "production"),
                ("HARDWOOD_LOG_FORMAT", "json"),
            ]),
        )
        .unwrap();

        assert_eq!(config.analysis.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.server.port, 5050);
        assert_eq!(config.database.url.as_deref(), Some("postgres://localhost/hardwood"));
        assert!(config.service.environment.is_production());
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = ServiceConfig::default();
        apply_env(&mut config, env(&[("OPENAI_API_KEY", ""), ("PORT", " ")])).unwrap();
        assert!(config.analysis.api_key.is_none());
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_invalid_env_values() {
        let mut config = ServiceConfig::default();
        assert!(apply_env(&mut config, env(&[("PORT", "http")])).is_err());
        assert!(apply_env(&mut config, env(&[("HARDWOOD_ENV", "staging")])).is_err());
    }

    #[test]
    fn test_validation() {
        let mut config = ServiceConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.logging.format = "xml".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());

        let mut config = ServiceConfig::default();
        config.analysis.era_max_tokens = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_gateway_config() {
        let mut config = ServiceConfig::default();
        config.server.cors_allowed_origins = vec!["http://localhost:3000".to_string()];
        config.service.environment = Environment::Production;

        let gateway = config.gateway_config();
        assert_eq!(gateway.port, 3001);
        assert_eq!(gateway.cors_allowed_origins.len(), 1);
        assert!(gateway.environment.is_production());
    }
}
