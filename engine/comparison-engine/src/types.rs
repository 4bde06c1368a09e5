//! Comparison request and result types

use analysis_engine::ComparisonCriteria;
use player_registry::{Achievements, CareerStats, Player, PlayerId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Body of `POST /comparison/generate`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    /// Players to compare, in display order. A missing field is an empty list
    /// so the size check reports it.
    #[serde(default)]
    pub player_ids: Vec<PlayerId>,

    /// Criteria object as sent; echoed back untouched
    #[serde(default)]
    pub criteria: Option<Map<String, Value>>,
}

impl ComparisonRequest {
    pub fn new(player_ids: Vec<PlayerId>, criteria: Option<Map<String, Value>>) -> Self {
        Self { player_ids, criteria }
    }

    /// Flags read from the criteria object, for the analysis prompt
    pub fn criteria_flags(&self) -> ComparisonCriteria {
        self.criteria.as_ref().map(ComparisonCriteria::from_object).unwrap_or_default()
    }
}

/// Identity echoed back for each compared player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self { id: player.id, name: player.name.clone(), team: player.team.clone() }
    }
}

/// Serialises as `{}` on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmptyRecord {}

/// A record, or an empty object when the player has none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaybeRecord<T> {
    Record(T),
    Empty(EmptyRecord),
}

impl<T> MaybeRecord<T> {
    pub fn as_record(&self) -> Option<&T> {
        match self {
            MaybeRecord::Record(record) => Some(record),
            MaybeRecord::Empty(_) => None,
        }
    }
}

impl<T> From<Option<T>> for MaybeRecord<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(record) => MaybeRecord::Record(record),
            None => MaybeRecord::Empty(EmptyRecord {}),
        }
    }
}

/// Outcome of one comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Summaries in the order the caller requested
    pub players: Vec<PlayerSummary>,

    pub analysis: String,

    pub stats: BTreeMap<PlayerId, MaybeRecord<CareerStats>>,

    pub achievements: BTreeMap<PlayerId, MaybeRecord<Achievements>>,

    /// Exactly the criteria object supplied with the request, `{}` when absent
    pub criteria: Map<String, Value>,
}
