pub mod baseline;
pub mod fuzzy;

pub use baseline::{calculate_baseline_score, precision_at_k};
pub use fuzzy::{FuzzyEngine, FuzzyScorer, InferenceError, ScoreOutcome};
