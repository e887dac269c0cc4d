use super::membership::{Triangular, Universe};
use super::variable::LinguisticVariable;

pub const CGPA: &str = "cgpa";
pub const SKILL_MATCH: &str = "skill_match";
pub const SECTOR_MATCH: &str = "sector_match";
pub const RECOMMENDATION: &str = "recommendation";

/// CGPA on a 4.0 scale; 2.0 is the modelled floor and nothing is credited above 4.0.
pub fn cgpa() -> LinguisticVariable {
    LinguisticVariable::new(CGPA, Universe::new(2.0, 4.0, 0.1))
        .with_set("low", Triangular::new(2.0, 2.0, 3.2))
        .with_set("medium", Triangular::new(2.9, 3.4, 3.8))
        .with_set("high", Triangular::new(3.6, 4.0, 4.0))
}

/// Percentage of the internship's skill requirements the student covers.
pub fn skill_match() -> LinguisticVariable {
    LinguisticVariable::new(SKILL_MATCH, Universe::new(0.0, 100.0, 1.0))
        .with_set("poor", Triangular::new(0.0, 0.0, 60.0))
        .with_set("fair", Triangular::new(45.0, 70.0, 90.0))
        .with_set("excellent", Triangular::new(80.0, 100.0, 100.0))
}

/// 0.0 when the internship is outside the preferred sector, 1.0 when it matches.
pub fn sector_match() -> LinguisticVariable {
    LinguisticVariable::new(SECTOR_MATCH, Universe::new(0.0, 1.0, 0.1))
        .with_set("no", Triangular::new(0.0, 0.0, 0.6))
        .with_set("yes", Triangular::new(0.4, 1.0, 1.0))
}

pub fn recommendation() -> LinguisticVariable {
    LinguisticVariable::new(RECOMMENDATION, Universe::new(0.0, 100.0, 1.0))
        .with_set("weak", Triangular::new(0.0, 10.0, 40.0))
        .with_set("moderate", Triangular::new(30.0, 60.0, 80.0))
        .with_set("strong", Triangular::new(70.0, 100.0, 100.0))
}
