//! Pathway engine
//!
//! Single entry point that runs the full pipeline. Every consumer (screen
//! table, exported report) calls [`PathwayEngine::evaluate`] exactly once per
//! profile and renders from the returned [`PathwayReport`], so no two views
//! can disagree.

use crate::compatibility::score_fields;
use crate::input;
use crate::pathways::{build_report, PathwayReport};
use crate::profile::NormalizedProfile;
use crate::ranking::rank_fields;
use pathways_common::{EngineSettings, RiasecScore};
use serde_json::Value;
use tracing::{debug, info};

/// Stateless pathway computation with fixed tuning
#[derive(Debug, Clone, Default)]
pub struct PathwayEngine {
    settings: EngineSettings,
}

impl PathwayEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Compute the report for a set of scores
    ///
    /// An empty slice yields [`PathwayReport::unavailable`]. Repeated calls
    /// with the same input return identical reports.
    pub fn evaluate(&self, scores: &[RiasecScore]) -> PathwayReport {
        if scores.is_empty() {
            debug!("No scores supplied, pathways unavailable");
            return PathwayReport::unavailable();
        }
        self.run(scores)
    }

    /// Compute the report from the assessment's JSON dimension array
    ///
    /// A valid array whose entries were all skipped still computes, from an
    /// all-zero profile.
    pub fn evaluate_json(&self, value: &Value) -> PathwayReport {
        match input::scores_from_value(value) {
            Some(scores) => self.run(&scores),
            None => PathwayReport::unavailable(),
        }
    }

    /// Compute the report from JSON text
    pub fn evaluate_json_str(&self, text: &str) -> PathwayReport {
        match input::scores_from_json_str(text) {
            Some(scores) => self.run(&scores),
            None => PathwayReport::unavailable(),
        }
    }

    fn run(&self, scores: &[RiasecScore]) -> PathwayReport {
        let profile = NormalizedProfile::from_scores(scores);
        let compatibilities = score_fields(&profile);
        let ranking = rank_fields(&compatibilities, profile.dominant_code(), &self.settings);
        let report = build_report(ranking, &profile);

        if let (Some(best), Some(stability)) = (
            report.best_field.and_then(|f| report.row(f)),
            report.stability.as_ref(),
        ) {
            info!(
                "Pathways computed: best field {} ({:.4}), mix {}, boost {}",
                best.aspiring_field,
                best.compatibility,
                profile.riasec_mix(),
                if stability.boost_applied { "applied" } else { "skipped" }
            );
        }

        report
    }
}

/// Compute pathways with default tuning
pub fn compute_pathways(scores: &[RiasecScore]) -> PathwayReport {
    PathwayEngine::default().evaluate(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AspiringField, ConfidenceTier};
    use pathways_common::RiasecCode;
    use serde_json::json;

    fn worked_example() -> Vec<RiasecScore> {
        vec![
            RiasecScore::new(RiasecCode::R, 80.0),
            RiasecScore::new(RiasecCode::I, 10.0),
            RiasecScore::new(RiasecCode::A, 5.0),
            RiasecScore::new(RiasecCode::S, 2.0),
            RiasecScore::new(RiasecCode::E, 2.0),
            RiasecScore::new(RiasecCode::C, 1.0),
        ]
    }

    #[test]
    fn test_empty_scores_are_unavailable() {
        let report = compute_pathways(&[]);
        assert_eq!(report, PathwayReport::unavailable());
    }

    #[test]
    fn test_realistic_profile_prefers_engineering() {
        let report = compute_pathways(&worked_example());
        assert_eq!(report.best_field, Some(AspiringField::Engineering));
        assert_eq!(report.best_path, Some("Civil Engineer"));
        assert_eq!(report.riasec_mix.as_deref(), Some("R-I-A"));
        assert_eq!(report.rows[0].confidence_tier, ConfidenceTier::High);

        let tech = report.row(AspiringField::Tech).unwrap();
        let accounting = report.row(AspiringField::Accounting).unwrap();
        assert!(report.rows[0].compatibility > tech.compatibility);
        assert!(tech.compatibility > accounting.compatibility);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let engine = PathwayEngine::default();
        let first = engine.evaluate(&worked_example());
        let second = engine.evaluate(&worked_example());
        assert_eq!(first, second);
    }

    #[test]
    fn test_json_entry_points() {
        let engine = PathwayEngine::default();
        let value = json!([
            { "code": "R", "score": 80 },
            { "code": "I", "score": 10 },
            { "code": "A", "score": 5 },
            { "code": "S", "score": 2 },
            { "code": "E", "score": 2 },
            { "code": "C", "score": 1 },
        ]);
        let from_value = engine.evaluate_json(&value);
        let from_text = engine.evaluate_json_str(&value.to_string());
        assert_eq!(from_value, engine.evaluate(&worked_example()));
        assert_eq!(from_value, from_text);

        assert!(!engine.evaluate_json(&json!({})).is_available());
        assert!(!engine.evaluate_json(&json!([])).is_available());
        assert!(!engine.evaluate_json_str("not json").is_available());
    }

    #[test]
    fn test_unknown_codes_compute_zero_profile() {
        let report = PathwayEngine::default().evaluate_json(&json!([{ "code": "Q", "score": 9 }]));
        assert!(report.is_available());
        assert_eq!(report.rows.len(), AspiringField::all().len());
        assert!(report.rows.iter().all(|r| r.compatibility == 0.0));
    }

    #[test]
    fn test_settings_are_applied() {
        let settings = EngineSettings {
            stability_threshold: 0.0,
            ..EngineSettings::default()
        };
        let engine = PathwayEngine::new(settings);
        assert_eq!(engine.settings(), &settings);

        let report = engine.evaluate(&worked_example());
        let stability = report.stability.unwrap();
        assert!(!stability.boost_applied);
        assert_eq!(stability.threshold, 0.0);
    }
}
