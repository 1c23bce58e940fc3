//! RIASEC trait codes and raw scores
//!
//! Six-trait vocational interest model: Realistic, Investigative, Artistic,
//! Social, Enterprising, Conventional.
//!
//! Two orderings matter:
//! - Canonical order R, I, A, S, E, C (declaration order, used for display
//!   and for indexing fixed-size weight vectors)
//! - Lexical order A, C, E, I, R, S (used to break ties between equally
//!   strong traits)

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// RIASEC trait code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiasecCode {
    /// Realistic: hands-on and practical
    R,
    /// Investigative: observant and reflective
    I,
    /// Artistic: creative and original
    A,
    /// Social: works with people
    S,
    /// Enterprising: decisive and influential
    E,
    /// Conventional: structure and order
    C,
}

impl RiasecCode {
    /// Number of trait codes
    pub const COUNT: usize = 6;

    /// All codes in canonical R, I, A, S, E, C order
    pub fn all_variants() -> &'static [RiasecCode; 6] {
        &[
            RiasecCode::R,
            RiasecCode::I,
            RiasecCode::A,
            RiasecCode::S,
            RiasecCode::E,
            RiasecCode::C,
        ]
    }

    /// Position in canonical order (0..6)
    pub fn index(&self) -> usize {
        match self {
            RiasecCode::R => 0,
            RiasecCode::I => 1,
            RiasecCode::A => 2,
            RiasecCode::S => 3,
            RiasecCode::E => 4,
            RiasecCode::C => 5,
        }
    }

    /// Single-letter code
    pub fn letter(&self) -> char {
        match self {
            RiasecCode::R => 'R',
            RiasecCode::I => 'I',
            RiasecCode::A => 'A',
            RiasecCode::S => 'S',
            RiasecCode::E => 'E',
            RiasecCode::C => 'C',
        }
    }

    /// Parse code from a string
    ///
    /// Accepts the single letter in either case, surrounding whitespace
    /// ignored. Anything else yields `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R" => Some(RiasecCode::R),
            "I" => Some(RiasecCode::I),
            "A" => Some(RiasecCode::A),
            "S" => Some(RiasecCode::S),
            "E" => Some(RiasecCode::E),
            "C" => Some(RiasecCode::C),
            _ => None,
        }
    }

    /// Compare by letter (A < C < E < I < R < S)
    pub fn lexical_cmp(&self, other: &RiasecCode) -> Ordering {
        self.letter().cmp(&other.letter())
    }

    /// Full trait name
    pub fn display_name(&self) -> &'static str {
        match self {
            RiasecCode::R => "Realistic",
            RiasecCode::I => "Investigative",
            RiasecCode::A => "Artistic",
            RiasecCode::S => "Social",
            RiasecCode::E => "Enterprising",
            RiasecCode::C => "Conventional",
        }
    }

    /// One-line description of the trait
    pub fn description(&self) -> &'static str {
        match self {
            RiasecCode::R => "Hands-on and practical",
            RiasecCode::I => "Observant and reflective",
            RiasecCode::A => "Creative and original",
            RiasecCode::S => "Work with people",
            RiasecCode::E => "Decisive and influential",
            RiasecCode::C => "Structure and order",
        }
    }

    /// Archetype group the trait belongs to
    pub fn category(&self) -> &'static str {
        match self {
            RiasecCode::R => "Doers",
            RiasecCode::I => "Thinkers",
            RiasecCode::A => "Creators",
            RiasecCode::S => "Helpers",
            RiasecCode::E => "Persuaders",
            RiasecCode::C => "Organizers",
        }
    }
}

impl std::fmt::Display for RiasecCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Raw score for one trait as delivered by the assessment
///
/// Expected domain is 0-100. Out-of-range values are tolerated here and
/// sanitized by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiasecScore {
    pub code: RiasecCode,
    #[serde(rename = "score", default)]
    pub raw_score: f64,
}

impl RiasecScore {
    pub fn new(code: RiasecCode, raw_score: f64) -> Self {
        Self { code, raw_score }
    }
}
