//! Per-trait dimension overview
//!
//! One summary per RIASEC code in canonical order, carrying the trait's
//! descriptive metadata, its rounded raw score, a match level, and whether
//! it is among the profile's three strongest traits.

use crate::profile::NormalizedProfile;
use pathways_common::RiasecCode;
use serde::Serialize;

/// Raw score at or above which a trait is a high match
pub const HIGH_MATCH_SCORE: i64 = 30;

/// Raw score at or above which a trait is a moderate match
pub const MODERATE_MATCH_SCORE: i64 = 15;

/// Strength of a single trait score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchLevel {
    High,
    Moderate,
    Low,
}

impl MatchLevel {
    /// Level for a rounded raw score
    pub fn from_score(score: i64) -> Self {
        if score >= HIGH_MATCH_SCORE {
            MatchLevel::High
        } else if score >= MODERATE_MATCH_SCORE {
            MatchLevel::Moderate
        } else {
            MatchLevel::Low
        }
    }

    /// Canonical upper-case level ("HIGH", "MODERATE", "LOW")
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLevel::High => "HIGH",
            MatchLevel::Moderate => "MODERATE",
            MatchLevel::Low => "LOW",
        }
    }
}

impl std::fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Summary of one trait
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSummary {
    pub code: RiasecCode,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Raw score rounded to the nearest integer
    pub score: i64,
    pub match_level: MatchLevel,
    pub is_top3: bool,
}

/// Summaries for all six traits in R, I, A, S, E, C order
pub fn summarize(profile: &NormalizedProfile) -> Vec<DimensionSummary> {
    let top3 = profile.top_codes(3);
    RiasecCode::all_variants()
        .iter()
        .map(|&code| {
            let score = profile.raw_score(code).round() as i64;
            DimensionSummary {
                code,
                name: code.display_name(),
                description: code.description(),
                category: code.category(),
                score,
                match_level: MatchLevel::from_score(score),
                is_top3: top3.contains(&code),
            }
        })
        .collect()
}
