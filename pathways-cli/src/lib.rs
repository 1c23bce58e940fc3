//! # riasec-pathways CLI support
//!
//! Score argument parsing, the screen table renderer, and the report
//! exporter. Both renderers consume one [`pathways_engine::PathwayReport`].

pub mod input;
pub mod report;

pub use input::{parse_score_arg, read_input};
pub use report::{ExportEnvelope, TableFormatter, NOT_COMPUTABLE_MESSAGE};
