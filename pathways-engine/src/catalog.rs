//! Static field catalogue
//!
//! The 17 aspiring fields, their RIASEC weight vectors, their three career
//! paths, and the cluster membership used by the stability pass. All data is
//! compile-time constant.

use pathways_common::RiasecCode;
use serde::{Deserialize, Serialize};

/// Aspiring field (career domain category)
///
/// Declaration order is catalogue order, which is also the final fallback
/// when ranking cannot otherwise separate two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AspiringField {
    #[serde(rename = "Engineering")]
    Engineering,
    #[serde(rename = "Tech")]
    Tech,
    #[serde(rename = "Medical & Health")]
    MedicalHealth,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Data Analytics")]
    DataAnalytics,
    #[serde(rename = "Pure & Applied Science")]
    PureAppliedScience,
    #[serde(rename = "Business & Management")]
    BusinessManagement,
    #[serde(rename = "Accounting")]
    Accounting,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "Humanities")]
    Humanities,
    #[serde(rename = "Design")]
    Design,
    #[serde(rename = "Media")]
    Media,
    #[serde(rename = "Networking")]
    Networking,
    #[serde(rename = "Marketing")]
    Marketing,
    #[serde(rename = "Law")]
    Law,
    #[serde(rename = "Computer Applications")]
    ComputerApplications,
    #[serde(rename = "Hospitality")]
    Hospitality,
}

use AspiringField::*;

/// Number of fields in the catalogue
pub const FIELD_COUNT: usize = 17;

const ALL_FIELDS: [AspiringField; FIELD_COUNT] = [
    Engineering,
    Tech,
    MedicalHealth,
    DataScience,
    DataAnalytics,
    PureAppliedScience,
    BusinessManagement,
    Accounting,
    Finance,
    Humanities,
    Design,
    Media,
    Networking,
    Marketing,
    Law,
    ComputerApplications,
    Hospitality,
];

impl AspiringField {
    /// All fields in catalogue order
    pub fn all() -> &'static [AspiringField; FIELD_COUNT] {
        &ALL_FIELDS
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Engineering => "Engineering",
            Tech => "Tech",
            MedicalHealth => "Medical & Health",
            DataScience => "Data Science",
            DataAnalytics => "Data Analytics",
            PureAppliedScience => "Pure & Applied Science",
            BusinessManagement => "Business & Management",
            Accounting => "Accounting",
            Finance => "Finance",
            Humanities => "Humanities",
            Design => "Design",
            Media => "Media",
            Networking => "Networking",
            Marketing => "Marketing",
            Law => "Law",
            ComputerApplications => "Computer Applications",
            Hospitality => "Hospitality",
        }
    }

    /// Weight vector in canonical R, I, A, S, E, C order
    #[rustfmt::skip]
    pub fn weights(&self) -> [f64; 6] {
        //                     R     I     A     S     E     C
        match self {
            Engineering =>          [0.40, 0.35, 0.05, 0.03, 0.02, 0.15],
            Tech =>                 [0.25, 0.35, 0.10, 0.05, 0.05, 0.20],
            MedicalHealth =>        [0.10, 0.30, 0.05, 0.35, 0.05, 0.15],
            DataScience =>          [0.10, 0.45, 0.20, 0.05, 0.05, 0.15],
            DataAnalytics =>        [0.05, 0.35, 0.10, 0.05, 0.15, 0.30],
            PureAppliedScience =>   [0.20, 0.50, 0.10, 0.03, 0.02, 0.15],
            BusinessManagement =>   [0.02, 0.10, 0.03, 0.20, 0.40, 0.25],
            Accounting =>           [0.03, 0.20, 0.02, 0.10, 0.15, 0.50],
            Finance =>              [0.02, 0.20, 0.03, 0.10, 0.35, 0.30],
            Humanities =>           [0.02, 0.20, 0.30, 0.35, 0.10, 0.03],
            Design =>               [0.02, 0.25, 0.45, 0.10, 0.15, 0.03],
            Media =>                [0.02, 0.10, 0.35, 0.20, 0.30, 0.03],
            Networking =>           [0.30, 0.35, 0.03, 0.02, 0.10, 0.20],
            Marketing =>            [0.02, 0.10, 0.25, 0.20, 0.40, 0.03],
            Law =>                  [0.02, 0.25, 0.03, 0.15, 0.35, 0.20],
            ComputerApplications => [0.25, 0.30, 0.10, 0.05, 0.05, 0.25],
            Hospitality =>          [0.02, 0.03, 0.15, 0.40, 0.30, 0.10],
        }
    }

    /// Weight this field assigns to one code
    pub fn weight(&self, code: RiasecCode) -> f64 {
        self.weights()[code.index()]
    }

    /// The field's three career paths; the first is the field's best path
    pub fn career_paths(&self) -> &'static [&'static str; 3] {
        match self {
            Engineering => &["Civil Engineer", "Mechanical Engineer", "Robotics Engineer"],
            Tech => &["Software Developer", "Cybersecurity Analyst", "Cloud Architect"],
            MedicalHealth => &["Medical Doctor", "Registered Nurse", "Healthcare Administrator"],
            DataScience => &["Machine Learning Engineer", "Data Scientist", "AI Research Scientist"],
            DataAnalytics => &[
                "Business Intelligence Analyst",
                "Operations Analyst",
                "Market Research Analyst",
            ],
            PureAppliedScience => &["Research Scientist", "Biotechnologist", "Environmental Consultant"],
            BusinessManagement => &["Project Manager", "Operations Manager", "Management Consultant"],
            Accounting => &["Certified Public Accountant", "Forensic Accountant", "Tax Auditor"],
            Finance => &["Investment Banker", "Financial Planner", "Portfolio Manager"],
            Humanities => &["Psychologist", "Technical Writer", "Policy Analyst"],
            Design => &["UX/UI Designer", "Graphic Designer", "Industrial Designer"],
            Media => &["Content Producer", "Public Relations Specialist", "Digital Editor"],
            Networking => &["Network Engineer", "Systems Administrator", "Solutions Architect"],
            Marketing => &["Digital Marketing Manager", "Brand Strategist", "Social Media Director"],
            Law => &["Corporate Attorney", "Legal Consultant", "Paralegal"],
            ComputerApplications => &["Web Developer", "Database Administrator", "Mobile App Developer"],
            Hospitality => &["Hotel Manager", "Event Coordinator", "Tourism Director"],
        }
    }
}

impl std::fmt::Display for AspiringField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fields sharing an affinity with a dominant code
///
/// Members receive the cluster boost when the stability pass fires.
pub fn cluster_members(code: RiasecCode) -> &'static [AspiringField] {
    match code {
        RiasecCode::I => &[DataScience, PureAppliedScience, Tech, ComputerApplications, DataAnalytics],
        RiasecCode::R => &[Engineering, Tech, Networking, ComputerApplications],
        RiasecCode::A => &[Design, Media, Humanities],
        RiasecCode::E => &[BusinessManagement, Finance, Marketing, Law],
        RiasecCode::C => &[Accounting, Finance, BusinessManagement],
        RiasecCode::S => &[MedicalHealth, Humanities, Hospitality],
    }
}
