//! Analysis Engine - Narrative comparison text for NBA players
//!
//! The generator either delegates to an OpenAI-compatible language model or,
//! when no credential is configured, emits fixed template text. Language-model
//! failures are absorbed here and replaced with safe defaults.

pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod prompt;
pub mod types;

pub use config::{AnalysisCapability, AnalysisConfig};
pub use error::{AnalysisError, AnalysisResult};
pub use generator::{AnalysisGenerator, APOLOGY_ANALYSIS};
pub use llm::{CompletionRequest, OpenAiClient, TextGenerator};
pub use types::{ComparisonCriteria, EraAdjustedStats, PlayerProfile};
