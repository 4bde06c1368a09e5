//! Inputs and outputs of the analysis engine

use player_registry::{Achievements, CareerStats, Player};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Comparison dimensions the caller cares about.
///
/// Advisory only: the flags are rendered into the analysis prompt and echoed
/// back, but do not change which records are fetched. Omitted flags are false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonCriteria {
    pub peak_performance: bool,
    pub longevity: bool,
    pub playoffs: bool,
    pub championships: bool,
    pub statistics: bool,
    pub era_adjusted: bool,
}

impl ComparisonCriteria {
    /// Every criterion switched on
    pub fn all() -> Self {
        Self {
            peak_performance: true,
            longevity: true,
            playoffs: true,
            championships: true,
            statistics: true,
            era_adjusted: true,
        }
    }

    /// Flags paired with their wire names, in declaration order
    pub fn flags(&self) -> [(&'static str, bool); 6] {
        [
            ("peakPerformance", self.peak_performance),
            ("longevity", self.longevity),
            ("playoffs", self.playoffs),
            ("championships", self.championships),
            ("statistics", self.statistics),
            ("eraAdjusted", self.era_adjusted),
        ]
    }

    /// Read flags from a raw criteria object. Only `true` enables a flag;
    /// unknown keys and non-boolean values are ignored.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let flag = |name: &str| object.get(name).and_then(Value::as_bool).unwrap_or(false);
        Self {
            peak_performance: flag("peakPerformance"),
            longevity: flag("longevity"),
            playoffs: flag("playoffs"),
            championships: flag("championships"),
            statistics: flag("statistics"),
            era_adjusted: flag("eraAdjusted"),
        }
    }

    /// Wire names of the enabled flags
    pub fn enabled(&self) -> impl Iterator<Item = &'static str> {
        self.flags().into_iter().filter(|(_, on)| *on).map(|(name, _)| name)
    }
}

/// One player's assembled record as handed to the analysis engine
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub player: Player,
    pub stats: Option<CareerStats>,
    pub achievements: Option<Achievements>,
}

/// Career averages projected onto a modern-era baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraAdjustedStats {
    #[serde(flatten)]
    pub stats: CareerStats,

    /// False when the original stats are returned unchanged
    pub era_adjusted: bool,

    /// Model-provided explanation, carried through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl EraAdjustedStats {
    /// The input stats, untouched
    pub fn unadjusted(stats: CareerStats) -> Self {
        Self { stats, era_adjusted: false, explanation: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_partial_object_defaults_to_false() {
        let criteria: ComparisonCriteria =
            serde_json::from_str(r#"{"peakPerformance": true, "eraAdjusted": true}"#).unwrap();
        assert!(criteria.peak_performance);
        assert!(criteria.era_adjusted);
        assert!(!criteria.longevity);
        assert_eq!(criteria.enabled().collect::<Vec<_>>(), vec!["peakPerformance", "eraAdjusted"]);
    }

    #[test]
    fn test_criteria_from_raw_object() {
        let object = serde_json::json!({
            "longevity": true,
            "playoffs": false,
            "statistics": "yes",
            "clutch": true
        });
        let criteria = ComparisonCriteria::from_object(object.as_object().unwrap());
        assert_eq!(criteria, ComparisonCriteria { longevity: true, ..Default::default() });

        assert_eq!(ComparisonCriteria::from_object(&Map::new()), ComparisonCriteria::default());
    }

    #[test]
    fn test_criteria_wire_names_match_flags() {
        let json = serde_json::to_value(ComparisonCriteria::all()).unwrap();
        for (name, _) in ComparisonCriteria::all().flags() {
            assert_eq!(json[name], true, "missing wire field {name}");
        }
    }

    #[test]
    fn test_era_adjusted_stats_flatten() {
        let stats = CareerStats {
            ppg: 30.1,
            rpg: 6.2,
            apg: 5.3,
            spg: 2.3,
            bpg: 0.8,
            fgp: 49.7,
            tpp: 32.7,
            ftp: 83.5,
        };
        let json = serde_json::to_value(EraAdjustedStats::unadjusted(stats)).unwrap();
        assert_eq!(json["ppg"], 30.1);
        assert_eq!(json["eraAdjusted"], false);
        assert!(json.get("explanation").is_none());
    }
}
