//! Screen table and report export
//!
//! Both outputs are rendered from the same [`PathwayReport`], so the table
//! and the exported document always agree on order, scores and tiers.

use chrono::Utc;
use pathways_common::Result;
use pathways_engine::{ConfidenceTier, PathwayReport};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Shown in place of the table when the input could not be scored
pub const NOT_COMPUTABLE_MESSAGE: &str = "Career pathways not computable";

const TABLE_HEADERS: [&str; 7] = [
    "#",
    "Aspiring Field",
    "RIASEC Mix",
    "Best Career Path",
    "Professional Persona",
    "Compatibility",
    "Confidence",
];

/// Exported report document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope<'a> {
    /// Export timestamp (RFC 3339)
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    pub report: &'a PathwayReport,
}

impl<'a> ExportEnvelope<'a> {
    pub fn new(report: &'a PathwayReport, student_name: Option<String>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            student_name,
            report,
        }
    }

    /// Write the envelope as pretty-printed JSON
    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }
}

/// Plain-text renderer for the terminal
pub struct TableFormatter;

impl TableFormatter {
    /// Full screen output: summary, pathway table, legend, dimensions
    ///
    /// `limit` caps the number of table rows; the summary always reflects the
    /// full ranking.
    pub fn format_report(report: &PathwayReport, limit: Option<usize>) -> String {
        if !report.is_available() {
            return format!("{}\n", NOT_COMPUTABLE_MESSAGE);
        }

        let mut output = String::new();
        output.push_str(&Self::format_summary(report));
        output.push('\n');
        output.push_str(&Self::format_pathways(report, limit));
        output.push('\n');
        output.push_str(&Self::format_legend());
        output.push('\n');
        output.push_str(&Self::format_dimensions(report));
        output
    }

    /// Best field, best path, mix and the stability decision
    pub fn format_summary(report: &PathwayReport) -> String {
        let mut output = String::new();
        output.push_str("Career Pathways\n");
        output.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

        if let Some(field) = report.best_field {
            output.push_str(&format!("Best field:   {}\n", field));
        }
        if let Some(path) = report.best_path {
            output.push_str(&format!("Best path:    {}\n", path));
        }
        if let Some(mix) = &report.riasec_mix {
            output.push_str(&format!("RIASEC mix:   {}\n", mix));
        }
        if !report.top3_fields.is_empty() {
            let top3: Vec<&str> = report.top3_fields.iter().map(|f| f.name()).collect();
            output.push_str(&format!("Top 3 fields: {}\n", top3.join(", ")));
        }
        if let Some(stability) = &report.stability {
            output.push_str(&format!(
                "Stability:    lead {:.4} vs {:.2}, {} cluster boost {}\n",
                stability.score_difference,
                stability.threshold,
                stability.cluster,
                if stability.boost_applied { "applied" } else { "not applied" }
            ));
        }
        output
    }

    /// One line per aspiring field, highest compatibility first
    pub fn format_pathways(report: &PathwayReport, limit: Option<usize>) -> String {
        let shown = limit.unwrap_or(report.rows.len()).min(report.rows.len());

        let cells: Vec<[String; 7]> = report
            .rows
            .iter()
            .take(shown)
            .map(|row| {
                let persona = row
                    .career_paths
                    .first()
                    .map(|p| p.persona)
                    .unwrap_or_default();
                [
                    (row.rank + 1).to_string(),
                    row.aspiring_field.name().to_string(),
                    row.riasec_mix.clone(),
                    row.best_career_path.to_string(),
                    persona.to_string(),
                    format!("{:.1}%", row.compatibility * 100.0),
                    row.confidence_tier.as_str().to_string(),
                ]
            })
            .collect();

        let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();
        output.push_str(&format_line(&TABLE_HEADERS.map(String::from), &widths));
        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        output.push_str(&rule.join("─┼─"));
        output.push('\n');
        for row in &cells {
            output.push_str(&format_line(row, &widths));
        }

        if shown < report.rows.len() {
            output.push_str(&format!("({} more fields not shown)\n", report.rows.len() - shown));
        }
        output
    }

    /// Confidence tier definitions
    pub fn format_legend() -> String {
        let mut output = String::from("Confidence levels:\n");
        for tier in ConfidenceTier::all_variants() {
            output.push_str(&format!("  {:<9} {}\n", tier.as_str(), tier.definition()));
        }
        output
    }

    /// Per-trait overview in R, I, A, S, E, C order
    pub fn format_dimensions(report: &PathwayReport) -> String {
        let mut output = String::from("RIASEC dimensions:\n");
        if report.dimensions.is_empty() {
            output.push_str("  RIASEC dimensions not available\n");
            return output;
        }
        for dim in &report.dimensions {
            output.push_str(&format!(
                "  {} {:<13} {:<11} {:>3}  {:<8}{}\n",
                dim.code,
                dim.name,
                dim.category,
                dim.score,
                dim.match_level.as_str(),
                if dim.is_top3 { " ★" } else { "" }
            ));
        }
        output
    }
}

fn format_line(cells: &[String; 7], widths: &[usize; 7]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    format!("{}\n", padded.join(" │ ").trim_end())
}
