//! Fuzzy-inference recommendation scoring.
//!
//! Three crisp inputs (CGPA, skill-match percentage, sector-match indicator) are
//! fuzzified against triangular sets, combined by a fixed rule base (AND = min,
//! OR = max), clipped and aggregated per output set, then defuzzified with the
//! centroid method. [`FuzzyScorer`] wraps the engine with a total API that maps
//! every failure to a fallback score.

mod engine;
mod facade;
mod membership;
pub mod model;
mod rules;
mod variable;

#[cfg(test)]
mod tests;

pub use engine::{
    CrispInput, FuzzyEngine, InferenceSession, RuleFiring, SetActivation, TermDegree,
};
pub use facade::{
    CoercionError, CrispValue, FuzzyScorer, ScoreOutcome, FAILED_SCORE, NON_EVALUABLE_SCORE,
};
pub use membership::{Triangular, Universe};
pub use rules::{Antecedent, Consequent, Memberships, Rule, RuleBase};
pub use variable::{FuzzySet, LinguisticVariable};

/// Failures raised by the inference engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("no rule fired; the aggregate output cannot be defuzzified")]
    NoActivation,
    #[error("input for '{variable}' is not a finite number ({value})")]
    InvalidInput { variable: String, value: f64 },
    #[error("rule references unknown fuzzy set '{set}' of '{variable}'")]
    UnknownTerm { variable: String, set: String },
    #[error("variable '{variable}' has no sample points")]
    EmptyUniverse { variable: String },
    #[error("expected {expected} crisp inputs, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
}
