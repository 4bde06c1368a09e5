//! Prompt assembly for comparison analyses and era adjustments

use crate::types::{ComparisonCriteria, PlayerProfile};
use player_registry::CareerStats;
use serde::{Deserialize, Serialize};

const COMPARISON_SYSTEM_PROMPT: &str = "You are an expert basketball analyst specializing in NBA \
player comparisons. Provide detailed, nuanced analysis comparing players across different eras.";

const ERA_SYSTEM_PROMPT: &str = "You are a basketball analytics expert specializing in historical \
statistical normalization. You can adjust player statistics across different NBA eras.";

/// Used in place of the criteria list when no flag is enabled
const NO_CRITERIA: &str = "Overall Career Impact";

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Split a camelCase key into capitalised words: `peakPerformance` -> `Peak Performance`
pub fn humanize_key(key: &str) -> String {
    let mut words = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            words.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                words.push(' ');
            }
            words.push(ch);
        }
    }
    words
}

/// Enabled criteria as readable words joined with ", "
pub fn describe_criteria(criteria: &ComparisonCriteria) -> String {
    criteria.enabled().map(humanize_key).collect::<Vec<_>>().join(", ")
}

fn stat_line(stats: &CareerStats) -> String {
    format!(
        "{:.1} PPG, {:.1} RPG, {:.1} APG, {:.1} SPG, {:.1} BPG, {:.1}% FG, {:.1}% 3P, {:.1}% FT",
        stats.ppg, stats.rpg, stats.apg, stats.spg, stats.bpg, stats.fgp, stats.tpp, stats.ftp
    )
}

/// Per-player block embedded in the comparison prompt
pub fn player_details(profile: &PlayerProfile) -> String {
    let career = profile.stats.as_ref().map(stat_line).unwrap_or_else(|| "N/A".to_string());
    let awards = match &profile.achievements {
        Some(a) => format!(
            "{} Championships, {} MVPs, {} All-Star selections, {} All-NBA Teams, \
             {} All-Defensive Teams, {} Scoring Titles",
            a.championships, a.mvps, a.all_star, a.all_nba, a.all_defense, a.scoring_titles
        ),
        None => "N/A".to_string(),
    };

    format!(
        "{} ({}):\n- Career Stats: {}\n- Achievements: {}",
        profile.player.name, profile.player.team, career, awards
    )
}

/// System and user messages for a comparison analysis
pub fn comparison_messages(
    players: &[PlayerProfile],
    criteria: &ComparisonCriteria,
) -> Vec<ChatMessage> {
    let mut focus = describe_criteria(criteria);
    if focus.is_empty() {
        focus = NO_CRITERIA.to_string();
    }

    let details = players.iter().map(player_details).collect::<Vec<_>>().join("\n\n");

    vec![
        ChatMessage::system(COMPARISON_SYSTEM_PROMPT),
        ChatMessage::user(format!(
            "Compare the following NBA players, focusing on these criteria: {focus}\n\n\
             {details}\n\n\
             Provide a detailed analysis that compares their statistical achievements, playing \
             styles, impact on winning, and historical legacy. Consider the different eras they \
             played in when making your analysis. The response should be unbiased, data-driven, \
             and highlight both strengths and weaknesses of each player."
        )),
    ]
}

/// System and user messages for an era adjustment
pub fn era_messages(
    stats: &CareerStats,
    year_start: Option<i32>,
    year_end: Option<i32>,
) -> Vec<ChatMessage> {
    let year = |y: Option<i32>| y.map(|y| y.to_string()).unwrap_or_else(|| "unknown".to_string());

    vec![
        ChatMessage::system(ERA_SYSTEM_PROMPT),
        ChatMessage::user(format!(
            "Adjust the following player statistics for modern era comparison (2020s):\n\n\
             Player career: {}-{}\n\
             Original stats: {:.1} PPG, {:.1} RPG, {:.1} APG, {:.1}% FG, {:.1}% 3P\n\n\
             Calculate how these statistics would translate to the modern NBA, considering \
             factors like pace of play, rule changes, spacing, three-point volume, and defensive \
             intensity. Provide the adjusted statistics and a brief explanation.",
            year(year_start),
            year(year_end),
            stats.ppg,
            stats.rpg,
            stats.apg,
            stats.fgp,
            stats.tpp
        )),
    ]
}
