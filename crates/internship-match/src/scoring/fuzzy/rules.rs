use super::model::{CGPA, RECOMMENDATION, SECTOR_MATCH, SKILL_MATCH};
use super::InferenceError;
use serde::Serialize;
use std::collections::HashMap;

/// Membership degrees of the crisp inputs, keyed by `(variable, set)`.
#[derive(Debug, Default, Clone)]
pub struct Memberships(HashMap<(&'static str, &'static str), f64>);

impl Memberships {
    pub fn insert(&mut self, variable: &'static str, set: &'static str, degree: f64) {
        self.0.insert((variable, set), degree);
    }

    pub fn degree(&self, variable: &'static str, set: &'static str) -> Option<f64> {
        self.0.get(&(variable, set)).copied()
    }
}

/// Antecedent expression tree. AND evaluates to the minimum of its operands, OR to the maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Antecedent {
    Is {
        variable: &'static str,
        set: &'static str,
    },
    And(Vec<Antecedent>),
    Or(Vec<Antecedent>),
}

impl Antecedent {
    pub fn is(variable: &'static str, set: &'static str) -> Self {
        Self::Is { variable, set }
    }

    pub fn and(self, other: Antecedent) -> Self {
        match self {
            Self::And(mut operands) => {
                operands.push(other);
                Self::And(operands)
            }
            single => Self::And(vec![single, other]),
        }
    }

    pub fn or(self, other: Antecedent) -> Self {
        match self {
            Self::Or(mut operands) => {
                operands.push(other);
                Self::Or(operands)
            }
            single => Self::Or(vec![single, other]),
        }
    }

    pub fn degree(&self, memberships: &Memberships) -> Result<f64, InferenceError> {
        match self {
            Self::Is { variable, set } => {
                memberships
                    .degree(*variable, *set)
                    .ok_or_else(|| InferenceError::UnknownTerm {
                        variable: variable.to_string(),
                        set: set.to_string(),
                    })
            }
            // Empty conjunction is vacuously true, empty disjunction false.
            Self::And(operands) => operands.iter().try_fold(1.0_f64, |acc, operand| {
                Ok::<_, InferenceError>(acc.min(operand.degree(memberships)?))
            }),
            Self::Or(operands) => operands.iter().try_fold(0.0_f64, |acc, operand| {
                Ok::<_, InferenceError>(acc.max(operand.degree(memberships)?))
            }),
        }
    }

    /// Every `(variable, set)` reference in the tree, in order of appearance.
    pub fn terms(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            Self::Is { variable, set } => vec![(*variable, *set)],
            Self::And(operands) | Self::Or(operands) => {
                operands.iter().flat_map(Antecedent::terms).collect()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Consequent {
    pub variable: &'static str,
    pub set: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub id: u8,
    pub label: &'static str,
    pub antecedent: Antecedent,
    pub consequent: Consequent,
}

/// Fixed, independent rules. Every rule is evaluated on every inference; outputs are combined.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Hand-authored internship recommendation policy.
    pub fn standard() -> Self {
        use Antecedent as A;

        let rules = vec![
            rule(
                1,
                "ideal candidate",
                A::is(CGPA, "high")
                    .and(A::is(SKILL_MATCH, "excellent"))
                    .and(A::is(SECTOR_MATCH, "yes")),
                "strong",
            ),
            rule(
                2,
                "strong skills offset a medium CGPA",
                A::is(CGPA, "medium")
                    .and(A::is(SKILL_MATCH, "excellent"))
                    .and(A::is(SECTOR_MATCH, "yes")),
                "strong",
            ),
            rule(
                3,
                "excellent skills compensate for a low CGPA",
                A::is(CGPA, "low")
                    .and(A::is(SKILL_MATCH, "excellent"))
                    .and(A::is(SECTOR_MATCH, "yes")),
                "moderate",
            ),
            rule(
                4,
                "good academics with fair skills",
                A::is(CGPA, "high")
                    .and(A::is(SKILL_MATCH, "fair"))
                    .and(A::is(SECTOR_MATCH, "yes")),
                "moderate",
            ),
            rule(
                5,
                "sector mismatch caps a strong profile",
                A::is(CGPA, "high")
                    .and(A::is(SKILL_MATCH, "excellent"))
                    .and(A::is(SECTOR_MATCH, "no")),
                "moderate",
            ),
            rule(
                6,
                "low CGPA or poor skills",
                A::is(CGPA, "low").or(A::is(SKILL_MATCH, "poor")),
                "weak",
            ),
            rule(
                7,
                "wrong sector with fair skills",
                A::is(SECTOR_MATCH, "no").and(A::is(SKILL_MATCH, "fair")),
                "weak",
            ),
            rule(
                8,
                "medium CGPA, fair skills, wrong sector",
                A::is(CGPA, "medium")
                    .and(A::is(SKILL_MATCH, "fair"))
                    .and(A::is(SECTOR_MATCH, "no")),
                "weak",
            ),
            rule(
                9,
                "high CGPA in the preferred sector",
                A::is(CGPA, "high").and(A::is(SECTOR_MATCH, "yes")),
                "moderate",
            ),
        ];

        Self::new(rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: u8) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn rule(id: u8, label: &'static str, antecedent: Antecedent, consequent: &'static str) -> Rule {
    Rule {
        id,
        label,
        antecedent,
        consequent: Consequent {
            variable: RECOMMENDATION,
            set: consequent,
        },
    }
}
