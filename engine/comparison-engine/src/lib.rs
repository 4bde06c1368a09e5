//! Comparison Engine - Orchestrates multi-player comparisons
//!
//! Validates the request, resolves each player's identity, stats and
//! achievements through a [`player_registry::PlayerRepository`], and obtains
//! the narrative from a [`ComparisonAnalyst`].

pub mod error;
pub mod orchestrator;
pub mod types;

pub use error::{ComparisonError, EngineResult};
pub use orchestrator::{ComparisonAnalyst, ComparisonOrchestrator, MIN_PLAYERS};
pub use types::{ComparisonRequest, ComparisonResult, EmptyRecord, MaybeRecord, PlayerSummary};
