use super::model;
use super::rules::{Memberships, RuleBase};
use super::variable::LinguisticVariable;
use super::InferenceError;
use serde::Serialize;
use tracing::trace;

/// Mamdani-style inference over fixed input variables, one output variable and a rule base.
///
/// The engine is immutable after construction; every call builds its own
/// [`InferenceSession`], so a single engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct FuzzyEngine {
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    rules: RuleBase,
}

impl FuzzyEngine {
    pub fn new(
        inputs: Vec<LinguisticVariable>,
        output: LinguisticVariable,
        rules: RuleBase,
    ) -> Self {
        Self {
            inputs,
            output,
            rules,
        }
    }

    /// CGPA, skill match and sector match feeding the recommendation score.
    pub fn standard() -> Self {
        Self::new(
            vec![model::cgpa(), model::skill_match(), model::sector_match()],
            model::recommendation(),
            RuleBase::standard(),
        )
    }

    pub fn inputs(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    pub fn output(&self) -> &LinguisticVariable {
        &self.output
    }

    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    /// Crisp recommendation score in `[0, 100]`, rounded to two decimals.
    pub fn infer(
        &self,
        cgpa: f64,
        skill_match: f64,
        sector_match: f64,
    ) -> Result<f64, InferenceError> {
        self.session(cgpa, skill_match, sector_match)?.outcome()
    }

    pub fn session(
        &self,
        cgpa: f64,
        skill_match: f64,
        sector_match: f64,
    ) -> Result<InferenceSession, InferenceError> {
        self.evaluate(&[cgpa, skill_match, sector_match])
    }

    /// Runs one inference with crisp values given in the order of [`FuzzyEngine::inputs`].
    pub fn evaluate(&self, crisp: &[f64]) -> Result<InferenceSession, InferenceError> {
        if crisp.len() != self.inputs.len() {
            return Err(InferenceError::ArityMismatch {
                expected: self.inputs.len(),
                actual: crisp.len(),
            });
        }

        let mut inputs = Vec::with_capacity(crisp.len());
        let mut degrees = Vec::new();
        let mut memberships = Memberships::default();

        for (variable, value) in self.inputs.iter().zip(crisp.iter().copied()) {
            if !value.is_finite() {
                return Err(InferenceError::InvalidInput {
                    variable: variable.name().to_string(),
                    value,
                });
            }

            inputs.push(CrispInput {
                variable: variable.name(),
                value,
                clamped: variable.universe().clamp(value),
            });

            for (set, degree) in variable.fuzzify(value) {
                memberships.insert(variable.name(), set, degree);
                degrees.push(TermDegree {
                    variable: variable.name(),
                    set,
                    degree,
                });
            }
        }

        let mut firings = Vec::with_capacity(self.rules.len());
        for rule in self.rules.rules() {
            if rule.consequent.variable != self.output.name()
                || self.output.set(rule.consequent.set).is_none()
            {
                return Err(InferenceError::UnknownTerm {
                    variable: rule.consequent.variable.to_string(),
                    set: rule.consequent.set.to_string(),
                });
            }

            let strength = rule.antecedent.degree(&memberships)?;
            trace!(rule = rule.id, strength, "rule evaluated");
            firings.push(RuleFiring {
                rule_id: rule.id,
                label: rule.label,
                consequent: rule.consequent.set,
                strength,
            });
        }

        // Each output set is clipped by the strongest rule invoking it.
        let activations: Vec<SetActivation> = self
            .output
            .sets()
            .iter()
            .map(|set| SetActivation {
                set: set.name,
                strength: firings
                    .iter()
                    .filter(|firing| firing.consequent == set.name)
                    .map(|firing| firing.strength)
                    .fold(0.0, f64::max),
            })
            .collect();

        let universe = self.output.points().to_vec();
        if universe.is_empty() {
            return Err(InferenceError::EmptyUniverse {
                variable: self.output.name().to_string(),
            });
        }

        let mut aggregate = vec![0.0_f64; universe.len()];
        for (set, activation) in self.output.sets().iter().zip(&activations) {
            if activation.strength <= 0.0 {
                continue;
            }
            for (slot, degree) in aggregate.iter_mut().zip(self.output.curve(set)) {
                *slot = slot.max(degree.min(activation.strength));
            }
        }

        let score = centroid(&universe, &aggregate).map(round_to_cents);

        Ok(InferenceSession {
            inputs,
            memberships: degrees,
            firings,
            activations,
            universe,
            aggregate,
            score,
        })
    }
}

impl Default for FuzzyEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Center of gravity `Σ x·μ(x) / Σ μ(x)`; `None` when the curve carries no mass.
pub(crate) fn centroid(universe: &[f64], curve: &[f64]) -> Option<f64> {
    let (weighted, mass) = universe
        .iter()
        .zip(curve)
        .fold((0.0, 0.0), |(weighted, mass), (x, mu)| {
            (weighted + x * mu, mass + mu)
        });

    (mass > 0.0).then(|| weighted / mass)
}

pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A crisp input as supplied and as evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrispInput {
    pub variable: &'static str,
    pub value: f64,
    pub clamped: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermDegree {
    pub variable: &'static str,
    pub set: &'static str,
    pub degree: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleFiring {
    pub rule_id: u8,
    pub label: &'static str,
    pub consequent: &'static str,
    pub strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetActivation {
    pub set: &'static str,
    pub strength: f64,
}

/// Transient state of a single inference call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceSession {
    pub inputs: Vec<CrispInput>,
    pub memberships: Vec<TermDegree>,
    pub firings: Vec<RuleFiring>,
    pub activations: Vec<SetActivation>,
    pub universe: Vec<f64>,
    pub aggregate: Vec<f64>,
    /// `None` when no rule fired above zero and the aggregate cannot be defuzzified.
    pub score: Option<f64>,
}

impl InferenceSession {
    pub fn outcome(&self) -> Result<f64, InferenceError> {
        self.score.ok_or(InferenceError::NoActivation)
    }

    pub fn firing(&self, rule_id: u8) -> Option<f64> {
        self.firings
            .iter()
            .find(|firing| firing.rule_id == rule_id)
            .map(|firing| firing.strength)
    }

    pub fn activation(&self, set: &str) -> Option<f64> {
        self.activations
            .iter()
            .find(|activation| activation.set == set)
            .map(|activation| activation.strength)
    }

    pub fn membership(&self, variable: &str, set: &str) -> Option<f64> {
        self.memberships
            .iter()
            .find(|term| term.variable == variable && term.set == set)
            .map(|term| term.degree)
    }
}
