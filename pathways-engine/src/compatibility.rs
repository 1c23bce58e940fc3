//! Base compatibility calculator
//!
//! `base = Σ weight[code] × fraction[code]` over the six codes, followed by
//! the field's behavioral conflict adjustment.

use crate::catalog::AspiringField;
use crate::conflicts;
use crate::profile::NormalizedProfile;
use pathways_common::RiasecCode;
use serde::Serialize;

/// Scores for one field before ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCompatibility {
    pub field: AspiringField,
    /// Weighted dot product against the normalized profile
    pub base_score: f64,
    /// Base score after conflict multipliers
    pub adjusted_score: f64,
}

/// Weighted dot product of a field's weights and the profile
pub fn base_compatibility(field: AspiringField, profile: &NormalizedProfile) -> f64 {
    RiasecCode::all_variants()
        .iter()
        .map(|code| field.weight(*code) * profile[*code])
        .sum()
}

/// Base and adjusted scores for every field, in catalogue order
pub fn score_fields(profile: &NormalizedProfile) -> Vec<FieldCompatibility> {
    AspiringField::all()
        .iter()
        .map(|&field| {
            let base_score = base_compatibility(field, profile);
            let adjusted_score = conflicts::adjust(field, base_score, profile);
            FieldCompatibility {
                field,
                base_score,
                adjusted_score,
            }
        })
        .collect()
}
