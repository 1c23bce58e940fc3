//! Behavioral conflict adjuster
//!
//! Each field owns a fixed rule set: an ordered list of checks, each a
//! predicate over the normalized profile plus a score multiplier. How the
//! checks combine is part of the rule set:
//!
//! - [`RuleMode::Exclusive`]: else-if chain, only the first matching check applies
//! - [`RuleMode::Independent`]: every matching check applies, multipliers compound
//!
//! Multipliers below 1.0 penalize a trait mismatch, above 1.0 reward strong
//! alignment.

use crate::catalog::AspiringField;
use crate::profile::NormalizedProfile;
use pathways_common::RiasecCode::{A, C, E, I, R, S};
use tracing::{debug, Level};

/// How a field's checks combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMode {
    /// First matching check wins
    Exclusive,
    /// All matching checks compound
    Independent,
}

/// One conflict check
pub struct ConflictCheck {
    /// Short human-readable condition, used in logs
    pub label: &'static str,
    pub predicate: fn(&NormalizedProfile) -> bool,
    pub multiplier: f64,
}

impl std::fmt::Debug for ConflictCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConflictCheck")
            .field("label", &self.label)
            .field("multiplier", &self.multiplier)
            .finish()
    }
}

/// A field's complete rule set
#[derive(Debug)]
pub struct ConflictRuleSet {
    pub mode: RuleMode,
    pub checks: &'static [ConflictCheck],
}

impl ConflictRuleSet {
    /// Checks that fire for this profile, respecting the rule mode
    pub fn matching(&self, profile: &NormalizedProfile) -> Vec<&'static ConflictCheck> {
        let mut fired = self.checks.iter().filter(|check| (check.predicate)(profile));
        match self.mode {
            RuleMode::Exclusive => fired.next().into_iter().collect(),
            RuleMode::Independent => fired.collect(),
        }
    }

    /// Apply the rule set to a base score
    pub fn apply(&self, base_score: f64, profile: &NormalizedProfile) -> f64 {
        self.matching(profile)
            .iter()
            .fold(base_score, |score, check| score * check.multiplier)
    }
}

/// Adjusted score for one field
pub fn adjust(field: AspiringField, base_score: f64, profile: &NormalizedProfile) -> f64 {
    let rules = rule_set(field);
    let adjusted = rules.apply(base_score, profile);

    if tracing::enabled!(Level::DEBUG) {
        let fired = rules.matching(profile);
        if !fired.is_empty() {
            debug!(
                "{}: {:.4} → {:.4} via [{}]",
                field,
                base_score,
                adjusted,
                fired
                    .iter()
                    .map(|c| format!("{} ×{}", c.label, c.multiplier))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }
    adjusted
}

/// Rule set for a field
pub fn rule_set(field: AspiringField) -> &'static ConflictRuleSet {
    use AspiringField::*;
    match field {
        Engineering => &ENGINEERING,
        Tech => &TECH,
        MedicalHealth => &MEDICAL_HEALTH,
        DataScience => &DATA_SCIENCE,
        DataAnalytics => &DATA_ANALYTICS,
        PureAppliedScience => &PURE_APPLIED_SCIENCE,
        BusinessManagement => &BUSINESS_MANAGEMENT,
        Accounting => &ACCOUNTING,
        Finance => &FINANCE,
        Humanities => &HUMANITIES,
        Design => &DESIGN,
        Media => &MEDIA,
        Networking => &NETWORKING,
        Marketing => &MARKETING,
        Law => &LAW,
        ComputerApplications => &COMPUTER_APPLICATIONS,
        Hospitality => &HOSPITALITY,
    }
}

static ENGINEERING: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[ConflictCheck {
        label: "A > R and R < 0.15",
        predicate: |p| p[A] > p[R] && p[R] < 0.15,
        multiplier: 0.75,
    }],
};

static TECH: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[ConflictCheck {
        label: "C > max(R,I) and R+I < 0.30",
        predicate: |p| p[C] > p.max_of(&[R, I]) && (p[R] + p[I]) < 0.30,
        multiplier: 0.70,
    }],
};

static MEDICAL_HEALTH: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[
        ConflictCheck {
            label: "S < 0.15",
            predicate: |p| p[S] < 0.15,
            multiplier: 0.65,
        },
        ConflictCheck {
            label: "R > max(I,S)",
            predicate: |p| p[R] > p.max_of(&[I, S]),
            multiplier: 0.75,
        },
    ],
};

static DATA_SCIENCE: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Independent,
    checks: &[
        ConflictCheck {
            label: "R > I",
            predicate: |p| p[R] > p[I],
            multiplier: 0.80,
        },
        ConflictCheck {
            label: "I > max(R,A,S,E,C)",
            predicate: |p| p[I] > p.max_of(&[R, A, S, E, C]),
            multiplier: 1.10,
        },
    ],
};

static DATA_ANALYTICS: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[ConflictCheck {
        label: "A > max(I,C)",
        predicate: |p| p[A] > p.max_of(&[I, C]),
        multiplier: 0.75,
    }],
};

static PURE_APPLIED_SCIENCE: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[ConflictCheck {
        label: "E > max(I,R)",
        predicate: |p| p[E] > p.max_of(&[I, R]),
        multiplier: 0.75,
    }],
};

static BUSINESS_MANAGEMENT: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[ConflictCheck {
        label: "R > max(E,C)",
        predicate: |p| p[R] > p.max_of(&[E, C]),
        multiplier: 0.75,
    }],
};

static ACCOUNTING: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[
        ConflictCheck {
            label: "R >= C",
            predicate: |p| p[R] >= p[C],
            multiplier: 0.60,
        },
        ConflictCheck {
            label: "I > 1.2·C",
            predicate: |p| p[I] > p[C] * 1.2,
            multiplier: 0.75,
        },
        ConflictCheck {
            label: "A > 0.20",
            predicate: |p| p[A] > 0.20,
            multiplier: 0.75,
        },
    ],
};

static FINANCE: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Independent,
    checks: &[
        ConflictCheck {
            label: "A > max(E,C)",
            predicate: |p| p[A] > p.max_of(&[E, C]),
            multiplier: 0.75,
        },
        ConflictCheck {
            label: "E > max(C,I)",
            predicate: |p| p[E] > p.max_of(&[C, I]),
            multiplier: 1.05,
        },
    ],
};

static HUMANITIES: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[ConflictCheck {
        label: "C > max(A,S)",
        predicate: |p| p[C] > p.max_of(&[A, S]),
        multiplier: 0.70,
    }],
};

static DESIGN: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[ConflictCheck {
        label: "C >= A",
        predicate: |p| p[C] >= p[A],
        multiplier: 0.60,
    }],
};

static MEDIA: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[ConflictCheck {
        label: "R > max(A,E)",
        predicate: |p| p[R] > p.max_of(&[A, E]),
        multiplier: 0.75,
    }],
};

static NETWORKING: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[ConflictCheck {
        label: "A > max(R,I)",
        predicate: |p| p[A] > p.max_of(&[R, I]),
        multiplier: 0.75,
    }],
};

static MARKETING: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[ConflictCheck {
        label: "C > max(E,A)",
        predicate: |p| p[C] > p.max_of(&[E, A]),
        multiplier: 0.70,
    }],
};

static LAW: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[ConflictCheck {
        label: "A > max(E,C,I)",
        predicate: |p| p[A] > p.max_of(&[E, C, I]),
        multiplier: 0.70,
    }],
};

static COMPUTER_APPLICATIONS: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Independent,
    checks: &[
        ConflictCheck {
            label: "I > max(R,C,A,S,E)",
            predicate: |p| p[I] > p.max_of(&[R, C, A, S, E]),
            multiplier: 1.15,
        },
        ConflictCheck {
            label: "C > max(I,R) and R+I < 0.40",
            predicate: |p| p[C] > p.max_of(&[I, R]) && (p[R] + p[I]) < 0.40,
            multiplier: 0.70,
        },
    ],
};

static HOSPITALITY: ConflictRuleSet = ConflictRuleSet {
    mode: RuleMode::Exclusive,
    checks: &[ConflictCheck {
        label: "I > max(S,E) and S < 0.20",
        predicate: |p| p[I] > p.max_of(&[S, E]) && p[S] < 0.20,
        multiplier: 0.75,
    }],
};

#[cfg(test)]
mod tests {
    use super::*;
    use pathways_common::{RiasecCode, RiasecScore};

    /// Profile from raw values in R, I, A, S, E, C order (sum 100 keeps fractions readable)
    fn profile(values: [f64; 6]) -> NormalizedProfile {
        let scores: Vec<RiasecScore> = RiasecCode::all_variants()
            .iter()
            .zip(values)
            .map(|(code, v)| RiasecScore::new(*code, v))
            .collect();
        NormalizedProfile::from_scores(&scores)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_engineering_penalizes_artistic_low_realistic() {
        let p = profile([10.0, 30.0, 40.0, 10.0, 5.0, 5.0]);
        assert_close(adjust(AspiringField::Engineering, 1.0, &p), 0.75);

        let realistic = profile([80.0, 10.0, 5.0, 2.0, 2.0, 1.0]);
        assert_close(adjust(AspiringField::Engineering, 0.36, &realistic), 0.36);
    }

    #[test]
    fn test_tech_penalizes_conventional_dominance() {
        let p = profile([10.0, 10.0, 10.0, 10.0, 10.0, 50.0]);
        assert_close(adjust(AspiringField::Tech, 1.0, &p), 0.70);

        // R + I = 0.30 exactly: strict inequality does not fire
        let boundary = profile([15.0, 15.0, 10.0, 10.0, 0.0, 50.0]);
        assert_close(adjust(AspiringField::Tech, 1.0, &boundary), 1.0);
    }

    #[test]
    fn test_data_science_checks_compound() {
        // R > I only
        let p = profile([50.0, 30.0, 10.0, 5.0, 5.0, 0.0]);
        assert_close(adjust(AspiringField::DataScience, 1.0, &p), 0.80);

        // I dominant only
        let p = profile([10.0, 60.0, 10.0, 10.0, 5.0, 5.0]);
        assert_close(adjust(AspiringField::DataScience, 1.0, &p), 1.10);

        // Neither: A dominant, I > R
        let p = profile([5.0, 20.0, 60.0, 5.0, 5.0, 5.0]);
        assert_close(adjust(AspiringField::DataScience, 1.0, &p), 1.0);
    }

    #[test]
    fn test_independent_mode_compounds_both_multipliers() {
        // Finance: A > max(E,C) and E > max(C,I) both true
        let p = profile([0.0, 5.0, 50.0, 5.0, 30.0, 10.0]);
        let fired = rule_set(AspiringField::Finance).matching(&p);
        assert_eq!(fired.len(), 2);
        assert_close(adjust(AspiringField::Finance, 1.0, &p), 0.75 * 1.05);
    }

    #[test]
    fn test_accounting_chain_is_exclusive() {
        // R >= C and I > 1.2·C and A > 0.20 all true: only the first applies
        let p = profile([30.0, 30.0, 30.0, 0.0, 0.0, 10.0]);
        let fired = rule_set(AspiringField::Accounting).matching(&p);
        assert_eq!(fired.len(), 1);
        assert_close(adjust(AspiringField::Accounting, 1.0, &p), 0.60);

        // R < C, I > 1.2·C
        let p = profile([5.0, 50.0, 5.0, 5.0, 5.0, 30.0]);
        assert_close(adjust(AspiringField::Accounting, 1.0, &p), 0.75);

        // R < C, I <= 1.2·C, A > 0.20
        let p = profile([5.0, 20.0, 30.0, 5.0, 0.0, 40.0]);
        assert_close(adjust(AspiringField::Accounting, 1.0, &p), 0.75);

        // Conventional-dominant: no check fires
        let p = profile([5.0, 10.0, 5.0, 10.0, 10.0, 60.0]);
        assert_close(adjust(AspiringField::Accounting, 1.0, &p), 1.0);
    }

    #[test]
    fn test_accounting_equal_r_and_c_fires_first_check() {
        let zero = profile([0.0; 6]);
        assert_close(adjust(AspiringField::Accounting, 0.0, &zero), 0.0);

        let p = profile([20.0, 20.0, 10.0, 10.0, 20.0, 20.0]);
        assert_close(adjust(AspiringField::Accounting, 1.0, &p), 0.60);
    }

    #[test]
    fn test_medical_chain_is_exclusive() {
        // S < 0.15 and R > max(I,S): only ×0.65
        let p = profile([60.0, 20.0, 5.0, 5.0, 5.0, 5.0]);
        assert_close(adjust(AspiringField::MedicalHealth, 1.0, &p), 0.65);

        // S >= 0.15 and R > max(I,S)
        let p = profile([40.0, 20.0, 5.0, 20.0, 10.0, 5.0]);
        assert_close(adjust(AspiringField::MedicalHealth, 1.0, &p), 0.75);
    }

    #[test]
    fn test_design_penalizes_when_conventional_matches_artistic() {
        let p = profile([20.0, 20.0, 20.0, 10.0, 10.0, 20.0]);
        assert_close(adjust(AspiringField::Design, 1.0, &p), 0.60);

        let p = profile([5.0, 10.0, 60.0, 10.0, 10.0, 5.0]);
        assert_close(adjust(AspiringField::Design, 1.0, &p), 1.0);
    }

    #[test]
    fn test_computer_applications_boost_and_penalty() {
        let p = profile([10.0, 50.0, 10.0, 10.0, 10.0, 10.0]);
        assert_close(adjust(AspiringField::ComputerApplications, 1.0, &p), 1.15);

        let p = profile([10.0, 15.0, 10.0, 10.0, 5.0, 50.0]);
        assert_close(adjust(AspiringField::ComputerApplications, 1.0, &p), 0.70);
    }

    #[test]
    fn test_hospitality_investigative_low_social() {
        let p = profile([10.0, 50.0, 10.0, 10.0, 10.0, 10.0]);
        assert_close(adjust(AspiringField::Hospitality, 1.0, &p), 0.75);

        let p = profile([10.0, 40.0, 5.0, 25.0, 10.0, 10.0]);
        assert_close(adjust(AspiringField::Hospitality, 1.0, &p), 1.0);
    }

    #[test]
    fn test_single_check_fields_fire_once() {
        let cases: &[(AspiringField, [f64; 6], f64)] = &[
            (AspiringField::DataAnalytics, [5.0, 20.0, 50.0, 10.0, 5.0, 10.0], 0.75),
            (AspiringField::PureAppliedScience, [10.0, 20.0, 5.0, 10.0, 50.0, 5.0], 0.75),
            (AspiringField::BusinessManagement, [50.0, 10.0, 10.0, 10.0, 10.0, 10.0], 0.75),
            (AspiringField::Humanities, [10.0, 10.0, 10.0, 10.0, 10.0, 50.0], 0.70),
            (AspiringField::Media, [50.0, 10.0, 10.0, 10.0, 10.0, 10.0], 0.75),
            (AspiringField::Networking, [10.0, 10.0, 50.0, 10.0, 10.0, 10.0], 0.75),
            (AspiringField::Marketing, [10.0, 10.0, 10.0, 10.0, 10.0, 50.0], 0.70),
            (AspiringField::Law, [10.0, 10.0, 50.0, 10.0, 10.0, 10.0], 0.70),
        ];
        for (field, values, expected) in cases {
            let p = profile(*values);
            assert_close(adjust(*field, 1.0, &p), *expected);
        }
    }

    #[test]
    fn test_rule_modes_per_field() {
        let independent = [
            AspiringField::DataScience,
            AspiringField::Finance,
            AspiringField::ComputerApplications,
        ];
        for field in AspiringField::all() {
            let expected = if independent.contains(field) {
                RuleMode::Independent
            } else {
                RuleMode::Exclusive
            };
            assert_eq!(rule_set(*field).mode, expected, "{}", field);
        }
    }

    #[test]
    fn test_adjust_applies_fired_multipliers_only() {
        let p = profile([10.0, 60.0, 10.0, 10.0, 5.0, 5.0]);
        for field in AspiringField::all() {
            let rules = rule_set(*field);
            let expected = rules
                .matching(&p)
                .iter()
                .fold(0.5, |score, check| score * check.multiplier);
            assert_close(adjust(*field, 0.5, &p), expected);
        }
        // I-dominant: Data Science rewarded, Medical & Health penalized once
        assert_close(adjust(AspiringField::DataScience, 0.5, &p), 0.5 * 1.10);
        assert_close(adjust(AspiringField::MedicalHealth, 0.5, &p), 0.5 * 0.65);
    }
}
