use super::engine::FuzzyEngine;
use super::InferenceError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Score returned when no rule fires and the aggregate output has no mass.
pub const NON_EVALUABLE_SCORE: f64 = 5.0;
/// Score returned on any other failure (uncoercible or non-finite input, malformed model).
pub const FAILED_SCORE: f64 = 0.0;

/// Error raised when a facade argument cannot be read as a number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoercionError {
    #[error("'{raw}' is not a numeric value")]
    NotNumeric { raw: String },
}

/// Values the scoring facade accepts and coerces to `f64`.
pub trait CrispValue {
    fn to_crisp(&self) -> Result<f64, CoercionError>;
}

macro_rules! lossless_crisp {
    ($($ty:ty),*) => {
        $(
            impl CrispValue for $ty {
                fn to_crisp(&self) -> Result<f64, CoercionError> {
                    Ok(f64::from(*self))
                }
            }
        )*
    };
}

lossless_crisp!(f64, f32, i8, i16, i32, u8, u16, u32);

macro_rules! wide_crisp {
    ($($ty:ty),*) => {
        $(
            impl CrispValue for $ty {
                fn to_crisp(&self) -> Result<f64, CoercionError> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

wide_crisp!(i64, u64, usize);

impl CrispValue for bool {
    fn to_crisp(&self) -> Result<f64, CoercionError> {
        Ok(if *self { 1.0 } else { 0.0 })
    }
}

impl CrispValue for str {
    fn to_crisp(&self) -> Result<f64, CoercionError> {
        self.trim()
            .parse::<f64>()
            .map_err(|_| CoercionError::NotNumeric {
                raw: self.to_string(),
            })
    }
}

impl CrispValue for String {
    fn to_crisp(&self) -> Result<f64, CoercionError> {
        self.as_str().to_crisp()
    }
}

impl<T: CrispValue + ?Sized> CrispValue for &T {
    fn to_crisp(&self) -> Result<f64, CoercionError> {
        (**self).to_crisp()
    }
}

/// How a facade call was resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreOutcome {
    Evaluated(f64),
    NonEvaluable,
    Failed,
}

impl ScoreOutcome {
    pub fn value(self) -> f64 {
        match self {
            ScoreOutcome::Evaluated(score) => score,
            ScoreOutcome::NonEvaluable => NON_EVALUABLE_SCORE,
            ScoreOutcome::Failed => FAILED_SCORE,
        }
    }

    pub fn is_evaluated(self) -> bool {
        matches!(self, ScoreOutcome::Evaluated(_))
    }
}

/// Total entry point over a shared engine: never fails, always yields a score.
#[derive(Debug, Clone)]
pub struct FuzzyScorer {
    engine: Arc<FuzzyEngine>,
}

impl FuzzyScorer {
    pub fn new(engine: FuzzyEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &FuzzyEngine {
        &self.engine
    }

    pub fn get_fuzzy_score<C, S, M>(
        &self,
        student_cgpa: C,
        skill_match_score: S,
        sector_match_value: M,
    ) -> f64
    where
        C: CrispValue,
        S: CrispValue,
        M: CrispValue,
    {
        self.assess(student_cgpa, skill_match_score, sector_match_value)
            .value()
    }

    pub fn assess<C, S, M>(
        &self,
        student_cgpa: C,
        skill_match_score: S,
        sector_match_value: M,
    ) -> ScoreOutcome
    where
        C: CrispValue,
        S: CrispValue,
        M: CrispValue,
    {
        let crisp = student_cgpa.to_crisp().and_then(|cgpa| {
            Ok((
                cgpa,
                skill_match_score.to_crisp()?,
                sector_match_value.to_crisp()?,
            ))
        });

        let (cgpa, skill_match, sector_match) = match crisp {
            Ok(values) => values,
            Err(err) => {
                warn!(error = %err, "fuzzy logic error: input coercion failed");
                return ScoreOutcome::Failed;
            }
        };

        match self.engine.infer(cgpa, skill_match, sector_match) {
            Ok(score) => ScoreOutcome::Evaluated(score),
            Err(InferenceError::NoActivation) => {
                debug!(
                    cgpa,
                    skill_match,
                    sector_match,
                    "no rule fired; using non-evaluable fallback"
                );
                ScoreOutcome::NonEvaluable
            }
            Err(err) => {
                warn!(error = %err, cgpa, skill_match, sector_match, "fuzzy logic error");
                ScoreOutcome::Failed
            }
        }
    }
}

impl Default for FuzzyScorer {
    fn default() -> Self {
        Self::new(FuzzyEngine::standard())
    }
}
