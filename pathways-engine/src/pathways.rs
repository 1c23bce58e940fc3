//! Pathway row builder
//!
//! Expands every ranked field (the full catalogue, never a top-N cut) into a
//! display row and assembles the report that all consumers share.

use crate::catalog::AspiringField;
use crate::confidence::ConfidenceTier;
use crate::dimensions::{self, DimensionSummary};
use crate::personas;
use crate::profile::NormalizedProfile;
use crate::ranking::{Ranking, StabilityOutcome};
use pathways_common::RiasecCode;
use serde::Serialize;

/// A career path with its persona and focus description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerPath {
    pub title: &'static str,
    pub persona: &'static str,
    pub focus: &'static str,
}

impl CareerPath {
    /// Resolve persona and focus for a title (fallbacks for unknown titles)
    pub fn lookup(title: &'static str) -> Self {
        Self {
            title,
            persona: personas::persona_for(title),
            focus: personas::focus_for(title),
        }
    }
}

/// One display row per aspiring field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayRow {
    /// 0-based final rank
    pub rank: usize,
    pub aspiring_field: AspiringField,
    pub career_paths: Vec<CareerPath>,
    pub best_career_path: &'static str,
    /// Top-3 codes of the profile, shared by every row
    pub riasec_mix: String,
    /// Final (post-stability) score
    pub compatibility: f64,
    pub confidence_tier: ConfidenceTier,
}

/// Result of one engine invocation
///
/// The unavailable sentinel ([`PathwayReport::unavailable`]) has no rows and
/// no best field; consumers decide how to degrade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayReport {
    pub rows: Vec<PathwayRow>,
    pub best_field: Option<AspiringField>,
    pub best_path: Option<&'static str>,
    pub top3_fields: Vec<AspiringField>,
    pub riasec_mix: Option<String>,
    pub dominant_code: Option<RiasecCode>,
    pub stability: Option<StabilityOutcome>,
    pub dimensions: Vec<DimensionSummary>,
}

impl PathwayReport {
    /// Empty-result sentinel for missing or malformed input
    pub fn unavailable() -> Self {
        Self {
            rows: Vec::new(),
            best_field: None,
            best_path: None,
            top3_fields: Vec::new(),
            riasec_mix: None,
            dominant_code: None,
            stability: None,
            dimensions: Vec::new(),
        }
    }

    /// True when the report carries computed rows
    pub fn is_available(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Row for a specific field
    pub fn row(&self, field: AspiringField) -> Option<&PathwayRow> {
        self.rows.iter().find(|r| r.aspiring_field == field)
    }
}

/// Build the report from a final ranking
///
/// `best_field`, `top3_fields`, `rank` and `confidence_tier` come from the
/// ranking. Rows are then ordered by compatibility for display, so when two
/// scores sit within the tie epsilon the row order can differ from the rank
/// order. `best_path` is the best career path of the first displayed row.
pub fn build_report(ranking: Ranking, profile: &NormalizedProfile) -> PathwayReport {
    let riasec_mix = profile.riasec_mix();

    let mut rows: Vec<PathwayRow> = ranking
        .fields
        .iter()
        .map(|ranked| {
            let titles = ranked.field.career_paths();
            PathwayRow {
                rank: ranked.rank,
                aspiring_field: ranked.field,
                career_paths: titles.iter().map(|&t| CareerPath::lookup(t)).collect(),
                best_career_path: titles[0],
                riasec_mix: riasec_mix.clone(),
                compatibility: ranked.final_score,
                confidence_tier: ranked.confidence_tier,
            }
        })
        .collect();

    // Stable: equal scores keep rank order
    rows.sort_by(|a, b| b.compatibility.total_cmp(&a.compatibility));

    PathwayReport {
        best_field: ranking.fields.first().map(|f| f.field),
        best_path: rows.first().map(|r| r.best_career_path),
        top3_fields: ranking.fields.iter().take(3).map(|f| f.field).collect(),
        riasec_mix: Some(riasec_mix),
        dominant_code: Some(ranking.stability.cluster),
        stability: Some(ranking.stability),
        dimensions: dimensions::summarize(profile),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::score_fields;
    use crate::ranking::rank_fields;
    use pathways_common::{EngineSettings, RiasecScore};

    fn report_for(values: [f64; 6]) -> PathwayReport {
        let scores: Vec<RiasecScore> = RiasecCode::all_variants()
            .iter()
            .zip(values)
            .map(|(code, v)| RiasecScore::new(*code, v))
            .collect();
        let profile = NormalizedProfile::from_scores(&scores);
        let ranking = rank_fields(
            &score_fields(&profile),
            profile.dominant_code(),
            &EngineSettings::default(),
        );
        build_report(ranking, &profile)
    }

    #[test]
    fn test_every_field_gets_a_row() {
        let report = report_for([20.0, 70.0, 30.0, 10.0, 15.0, 25.0]);
        assert_eq!(report.rows.len(), AspiringField::all().len());
        for field in AspiringField::all() {
            assert!(report.row(*field).is_some(), "{} missing", field);
        }
    }

    #[test]
    fn test_rows_carry_paths_and_shared_mix() {
        let report = report_for([20.0, 70.0, 30.0, 10.0, 15.0, 25.0]);
        for row in &report.rows {
            assert_eq!(row.career_paths.len(), 3);
            assert_eq!(row.best_career_path, row.career_paths[0].title);
            assert_eq!(row.riasec_mix, "I-A-C");
        }
        let ds = report.row(AspiringField::DataScience).unwrap();
        assert_eq!(ds.best_career_path, "Machine Learning Engineer");
        assert_eq!(ds.career_paths[1].persona, "The Insight Architect");
    }

    #[test]
    fn test_best_field_and_top3_follow_ranking() {
        let report = report_for([20.0, 70.0, 30.0, 10.0, 15.0, 25.0]);
        assert_eq!(report.best_field, Some(report.rows[0].aspiring_field));
        assert_eq!(report.best_path, Some(report.rows[0].best_career_path));
        assert_eq!(report.top3_fields.len(), 3);
        assert_eq!(report.rows[0].confidence_tier, ConfidenceTier::High);

        let mut ranks: Vec<usize> = report.rows.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (0..AspiringField::all().len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_near_tie_rows_sorted_by_compatibility_keep_rank() {
        // E-dominant: Business Management wins the ranking on E weight while
        // Finance scores 0.00009 higher
        let report = report_for([0.0, 0.0, 0.0, 5.0, 85.0, 50.0]);
        assert_eq!(report.best_field, Some(AspiringField::BusinessManagement));
        assert_eq!(
            report.top3_fields,
            vec![AspiringField::BusinessManagement, AspiringField::Finance, AspiringField::Law]
        );

        let first = &report.rows[0];
        assert_eq!(first.aspiring_field, AspiringField::Finance);
        assert_eq!(first.rank, 1);
        assert_eq!(first.confidence_tier, ConfidenceTier::Moderate);
        assert_eq!(report.best_path, Some("Investment Banker"));

        let second = &report.rows[1];
        assert_eq!(second.aspiring_field, AspiringField::BusinessManagement);
        assert_eq!(second.rank, 0);
        assert_eq!(second.confidence_tier, ConfidenceTier::High);
    }

    #[test]
    fn test_low_rows_sorted_strictly() {
        // Humanities outranks Engineering on E weight but scores lower
        let report = report_for([0.0, 0.0, 0.0, 5.0, 30.0, 20.0]);
        let position = |field| report.rows.iter().position(|r| r.aspiring_field == field).unwrap();
        assert!(position(AspiringField::Engineering) < position(AspiringField::Humanities));
        assert!(
            report.row(AspiringField::Engineering).unwrap().rank
                > report.row(AspiringField::Humanities).unwrap().rank
        );
    }

    #[test]
    fn test_rows_are_in_descending_compatibility() {
        let report = report_for([55.0, 20.0, 10.0, 35.0, 40.0, 5.0]);
        for pair in report.rows.windows(2) {
            assert!(
                pair[0].compatibility >= pair[1].compatibility,
                "{} ({}) before {} ({})",
                pair[0].aspiring_field,
                pair[0].compatibility,
                pair[1].aspiring_field,
                pair[1].compatibility
            );
        }
    }

    #[test]
    fn test_unknown_title_lookup_uses_fallbacks() {
        let path = CareerPath::lookup("Lighthouse Keeper");
        assert_eq!(path.persona, personas::DEFAULT_PERSONA);
        assert_eq!(path.focus, personas::DEFAULT_FOCUS);
    }

    #[test]
    fn test_unavailable_sentinel() {
        let report = PathwayReport::unavailable();
        assert!(!report.is_available());
        assert!(report.best_field.is_none());
        assert!(report.best_path.is_none());
        assert!(report.top3_fields.is_empty());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rows"], serde_json::json!([]));
        assert!(json["bestField"].is_null());
    }
}
