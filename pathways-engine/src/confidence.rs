//! Confidence classifier
//!
//! Maps a field's final rank to a tier: rank 0 is High, ranks 1-2 are
//! Moderate, everything else is Low.

use serde::{Deserialize, Serialize};

/// Confidence tier for a ranked field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceTier {
    High,
    Moderate,
    Low,
}

impl ConfidenceTier {
    /// Tier for a 0-based final rank
    pub fn from_rank(rank: usize) -> Self {
        match rank {
            0 => ConfidenceTier::High,
            1 | 2 => ConfidenceTier::Moderate,
            _ => ConfidenceTier::Low,
        }
    }

    /// Canonical upper-case level ("HIGH", "MODERATE", "LOW")
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "HIGH",
            ConfidenceTier::Moderate => "MODERATE",
            ConfidenceTier::Low => "LOW",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High Confidence",
            ConfidenceTier::Moderate => "Moderate Confidence",
            ConfidenceTier::Low => "Low Confidence",
        }
    }

    /// One-sentence definition shown alongside the tier legend
    pub fn definition(&self) -> &'static str {
        match self {
            ConfidenceTier::High => {
                "Strong alignment between pathway requirements and the RIASEC profile."
            }
            ConfidenceTier::Moderate => {
                "Reasonable alignment, with moderate gaps between pathway needs and the scores."
            }
            ConfidenceTier::Low => {
                "Limited alignment; significant gaps suggest additional development."
            }
        }
    }

    /// All tiers, best first
    pub fn all_variants() -> &'static [ConfidenceTier; 3] {
        &[ConfidenceTier::High, ConfidenceTier::Moderate, ConfidenceTier::Low]
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
