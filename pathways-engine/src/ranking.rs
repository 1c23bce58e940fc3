//! Ranking & stability engine
//!
//! # Algorithm
//! 1. Sort fields by adjusted score, descending
//! 2. Scores within `tie_epsilon` are ordered by the weight each field gives
//!    the profile's dominant code (higher first); equal weights keep
//!    catalogue order
//! 3. `score_difference = top1 − top2`
//! 4. If `score_difference < stability_threshold` and more than one field
//!    exists: multiply every member of the dominant code's cluster by
//!    `cluster_boost` and re-sort once with the same comparator
//!
//! The re-ranking is a single pass, never iterated.

use crate::catalog::{cluster_members, AspiringField};
use crate::compatibility::FieldCompatibility;
use crate::confidence::ConfidenceTier;
use pathways_common::{EngineSettings, RiasecCode};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// A field in its final ranked position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedField {
    pub field: AspiringField,
    pub base_score: f64,
    pub adjusted_score: f64,
    /// Adjusted score, with cluster boost when applied
    pub final_score: f64,
    /// 0-based position in the final order
    pub rank: usize,
    pub confidence_tier: ConfidenceTier,
    /// True when this field received the cluster boost
    pub cluster_boosted: bool,
}

/// Record of the stability decision
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StabilityOutcome {
    /// Top score minus runner-up score before any boost
    pub score_difference: f64,
    pub threshold: f64,
    pub boost_applied: bool,
    /// Dominant code whose cluster was considered
    pub cluster: RiasecCode,
}

/// Final ordering plus the stability decision that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub fields: Vec<RankedField>,
    pub stability: StabilityOutcome,
}

/// Working entry used while sorting
#[derive(Debug, Clone, Copy)]
struct Entry {
    compat: FieldCompatibility,
    score: f64,
    boosted: bool,
}

/// Rank scored fields for a profile whose dominant code is `dominant`
pub fn rank_fields(
    scores: &[FieldCompatibility],
    dominant: RiasecCode,
    settings: &EngineSettings,
) -> Ranking {
    let mut entries: Vec<Entry> = scores
        .iter()
        .map(|&compat| Entry {
            compat,
            score: compat.adjusted_score,
            boosted: false,
        })
        .collect();

    let comparator = |a: &Entry, b: &Entry| {
        compare_scores(
            (a.compat.field, a.score),
            (b.compat.field, b.score),
            dominant,
            settings.tie_epsilon,
        )
    };

    stable_sort_by(&mut entries, comparator);

    let best = entries.first().map(|e| e.score).unwrap_or(0.0);
    let second = entries.get(1).map(|e| e.score).unwrap_or(0.0);
    let score_difference = best - second;
    let boost_applied = score_difference < settings.stability_threshold && entries.len() > 1;

    if boost_applied {
        let members = cluster_members(dominant);
        for entry in entries.iter_mut() {
            if members.contains(&entry.compat.field) {
                entry.score *= settings.cluster_boost;
                entry.boosted = true;
            }
        }
        stable_sort_by(&mut entries, comparator);
    }

    debug!(
        "Stability: difference {:.4} vs threshold {:.4}, cluster {} boost {}",
        score_difference,
        settings.stability_threshold,
        dominant,
        if boost_applied { "applied" } else { "skipped" }
    );

    let fields = entries
        .iter()
        .enumerate()
        .map(|(rank, entry)| RankedField {
            field: entry.compat.field,
            base_score: entry.compat.base_score,
            adjusted_score: entry.compat.adjusted_score,
            final_score: entry.score,
            rank,
            confidence_tier: ConfidenceTier::from_rank(rank),
            cluster_boosted: entry.boosted,
        })
        .collect();

    Ranking {
        fields,
        stability: StabilityOutcome {
            score_difference,
            threshold: settings.stability_threshold,
            boost_applied,
            cluster: dominant,
        },
    }
}

/// Ordering of two (field, score) pairs, best first
///
/// Scores further apart than `epsilon` order by score; otherwise by the
/// dominant-code weight. `Equal` leaves catalogue order to the stable sort.
pub fn compare_scores(
    a: (AspiringField, f64),
    b: (AspiringField, f64),
    dominant: RiasecCode,
    epsilon: f64,
) -> Ordering {
    let (field_a, score_a) = a;
    let (field_b, score_b) = b;
    if (score_b - score_a).abs() > epsilon {
        return score_b.total_cmp(&score_a);
    }
    field_b.weight(dominant).total_cmp(&field_a.weight(dominant))
}

/// Stable insertion sort
///
/// The epsilon comparator is not transitive, which `slice::sort_by` does not
/// accept. Insertion sort only compares neighbours and never panics on it.
fn stable_sort_by<T, F>(items: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
