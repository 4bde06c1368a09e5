//! Configuration for the ApiGateway

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Deployment environment; controls how much error detail leaves the process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" | "test" => Ok(Environment::Development),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// Main configuration for the ApiGateway
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    pub cors_allowed_origins: Vec<String>,

    /// Deployment environment
    pub environment: Environment,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: crate::DEFAULT_PORT,
            cors_allowed_origins: Vec::new(),
            environment: Environment::Development,
        }
    }
}

impl GatewayConfig {
    /// Get the server address
    pub fn server_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Load configuration from file
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GatewayConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_addr() {
        let config = GatewayConfig::default();
        assert_eq!(config.server_addr().unwrap().port(), 3001);
        assert!(!config.environment.is_production());
    }

    #[test]
    fn test_invalid_host() {
        let config = GatewayConfig { host: "not a host".to_string(), ..Default::default() };
        assert!(config.server_addr().is_err());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("DEV".parse::<Environment>().unwrap(), Environment::Development);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.toml");
        std::fs::write(&path, "port = 8088\nenvironment = \"production\"\n").unwrap();

        let config = GatewayConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.port, 8088);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.environment.is_production());
    }
}
