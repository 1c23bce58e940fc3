//! # RIASEC Career-Pathway Engine
//!
//! Scores a student's six RIASEC trait scores against a fixed catalogue of
//! 17 aspiring fields and produces one display row per field.
//!
//! Pipeline (each stage pure, depends only on the prior stage and static tables):
//! 1. [`profile`]: raw scores → normalized distribution
//! 2. [`compatibility`]: weighted dot product against the field weight table
//! 3. [`conflicts`]: per-field behavioral conflict multipliers
//! 4. [`ranking`]: deterministic sort + single stability re-ranking pass
//! 5. [`confidence`]: rank → High/Moderate/Low
//! 6. [`pathways`]: full-catalogue row builder
//!
//! [`engine::PathwayEngine`] wires the stages together and is the single entry
//! point for every consumer (screen table, exported report).

pub mod catalog;
pub mod compatibility;
pub mod confidence;
pub mod conflicts;
pub mod dimensions;
pub mod engine;
pub mod input;
pub mod pathways;
pub mod personas;
pub mod profile;
pub mod ranking;

pub use catalog::AspiringField;
pub use confidence::ConfidenceTier;
pub use engine::{compute_pathways, PathwayEngine};
pub use pathways::{CareerPath, PathwayReport, PathwayRow};
pub use profile::NormalizedProfile;
