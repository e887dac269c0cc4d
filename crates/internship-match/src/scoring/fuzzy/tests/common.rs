use crate::scoring::fuzzy::model::{CGPA, RECOMMENDATION, SECTOR_MATCH, SKILL_MATCH};
use crate::scoring::fuzzy::{
    Antecedent, Consequent, FuzzyEngine, FuzzyScorer, Memberships, Rule, RuleBase,
};

pub(super) fn engine() -> FuzzyEngine {
    FuzzyEngine::standard()
}

pub(super) fn scorer() -> FuzzyScorer {
    FuzzyScorer::default()
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Degrees for every input set; anything not listed is zero.
pub(super) fn memberships(degrees: &[(&'static str, &'static str, f64)]) -> Memberships {
    let mut memberships = Memberships::default();
    for (variable, sets) in [
        (CGPA, ["low", "medium", "high"]),
        (SKILL_MATCH, ["poor", "fair", "excellent"]),
    ] {
        for set in sets {
            memberships.insert(variable, set, 0.0);
        }
    }
    memberships.insert(SECTOR_MATCH, "no", 0.0);
    memberships.insert(SECTOR_MATCH, "yes", 0.0);

    for &(variable, set, degree) in degrees {
        memberships.insert(variable, set, degree);
    }
    memberships
}

pub(super) fn rule_strength(rule_id: u8, memberships: &Memberships) -> f64 {
    RuleBase::standard()
        .get(rule_id)
        .expect("rule defined")
        .antecedent
        .degree(memberships)
        .expect("rule evaluates")
}

/// Standard engine with one extra rule pointing at a set the cgpa variable lacks.
pub(super) fn engine_with_dangling_rule() -> FuzzyEngine {
    let mut rules = RuleBase::standard().rules().to_vec();
    rules.push(Rule {
        id: 10,
        label: "dangling",
        antecedent: Antecedent::is(CGPA, "stellar"),
        consequent: Consequent {
            variable: RECOMMENDATION,
            set: "strong",
        },
    });
    let standard = FuzzyEngine::standard();
    FuzzyEngine::new(
        standard.inputs().to_vec(),
        standard.output().clone(),
        RuleBase::new(rules),
    )
}
