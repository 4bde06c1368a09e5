//! Player Registry - Player directory and stats/achievements store
//!
//! This module provides the static reference data for the comparison service:
//! player identity records, career averages and award counts, all keyed by
//! player ID and exposed through the [`PlayerRepository`] contract.

pub mod fixtures;
pub mod postgres;
pub mod registry;
pub mod repository;
pub mod types;

pub use postgres::PgPlayerRepository;
pub use registry::{PlayerRegistry, RosterFile};
pub use repository::PlayerRepository;
pub use types::{Achievements, CareerStats, Player, PlayerId, RegistryError, RegistryResult};
