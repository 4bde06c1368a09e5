//! ApiGateway - REST API for player lookups and comparisons
//!
//! This module provides the external HTTP interface of the comparison
//! service: player search and lookups, era-adjusted stats, multi-player
//! comparison generation and a health check, with a uniform JSON error
//! envelope.

pub mod config;
pub mod error;
pub mod gateway;
pub mod rest_api;

pub use config::{Environment, GatewayConfig};
pub use error::{ApiError, GatewayError, GatewayResult};
pub use gateway::ApiGateway;
pub use rest_api::{create_routes, ApiContext};

/// Version of the ApiGateway
pub const VERSION: &str = "0.1.0";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3001;
