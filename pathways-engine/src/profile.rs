//! Normalizer: raw RIASEC scores → normalized profile
//!
//! Fractions sum to 1.0 when the raw total is positive. An all-zero input
//! clamps the denominator to 1 and yields all-zero fractions, never NaN.

use pathways_common::{RiasecCode, RiasecScore};
use serde::Serialize;
use std::ops::Index;
use tracing::{debug, warn};

/// Upper bound of the raw score domain
pub const MAX_RAW_SCORE: f64 = 100.0;

/// Normalized RIASEC profile
///
/// Both vectors are indexed by [`RiasecCode::index`] (canonical R, I, A, S, E, C).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedProfile {
    /// Sanitized raw scores (0-100, missing codes are 0)
    raw: [f64; 6],
    /// Fractions of the raw total
    fractions: [f64; 6],
}

impl NormalizedProfile {
    /// Normalize a set of raw scores
    ///
    /// Missing codes default to 0. When a code appears more than once the
    /// last occurrence wins. Non-finite and negative values become 0, values
    /// above 100 are clamped.
    pub fn from_scores(scores: &[RiasecScore]) -> Self {
        let mut raw = [0.0; 6];
        for score in scores {
            raw[score.code.index()] = sanitize(score);
        }

        let total: f64 = raw.iter().sum();
        let denominator = if total > 0.0 { total } else { 1.0 };

        let mut fractions = [0.0; 6];
        for (fraction, value) in fractions.iter_mut().zip(raw.iter()) {
            *fraction = value / denominator;
        }

        let profile = Self { raw, fractions };
        debug!("Normalized profile (total {:.2}): {}", total, profile);
        profile
    }

    /// Fraction for one code
    pub fn fraction(&self, code: RiasecCode) -> f64 {
        self.fractions[code.index()]
    }

    /// Sanitized raw score for one code
    pub fn raw_score(&self, code: RiasecCode) -> f64 {
        self.raw[code.index()]
    }

    /// Sum of the sanitized raw scores
    pub fn raw_total(&self) -> f64 {
        self.raw.iter().sum()
    }

    /// True when every raw score is zero
    pub fn is_empty(&self) -> bool {
        self.raw_total() <= 0.0
    }

    /// Largest fraction among the given codes (0.0 for an empty slice)
    pub fn max_of(&self, codes: &[RiasecCode]) -> f64 {
        codes
            .iter()
            .map(|code| self.fraction(*code))
            .fold(0.0, f64::max)
    }

    /// Codes ordered by fraction descending, ties in lexical code order
    pub fn ranked_codes(&self) -> [RiasecCode; 6] {
        let mut codes = *RiasecCode::all_variants();
        codes.sort_by(|a, b| {
            self.fraction(*b)
                .total_cmp(&self.fraction(*a))
                .then_with(|| a.lexical_cmp(b))
        });
        codes
    }

    /// Strongest trait (ties broken lexically, so all-zero yields `A`)
    pub fn dominant_code(&self) -> RiasecCode {
        self.ranked_codes()[0]
    }

    /// The `n` strongest traits
    pub fn top_codes(&self, n: usize) -> Vec<RiasecCode> {
        self.ranked_codes().into_iter().take(n).collect()
    }

    /// Hyphen-joined top-3 codes, e.g. "I-R-A"
    pub fn riasec_mix(&self) -> String {
        self.top_codes(3)
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl Index<RiasecCode> for NormalizedProfile {
    type Output = f64;

    fn index(&self, code: RiasecCode) -> &f64 {
        &self.fractions[code.index()]
    }
}

impl std::fmt::Display for NormalizedProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = RiasecCode::all_variants()
            .iter()
            .map(|code| format!("{}:{:.3}", code, self.fraction(*code)))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

fn sanitize(score: &RiasecScore) -> f64 {
    let value = score.raw_score;
    if !value.is_finite() || value < 0.0 {
        warn!("Score for {} is {}, treating as 0", score.code, value);
        return 0.0;
    }
    if value > MAX_RAW_SCORE {
        warn!(
            "Score for {} is {}, clamping to {}",
            score.code, value, MAX_RAW_SCORE
        );
        return MAX_RAW_SCORE;
    }
    value
}
