use super::membership::{Triangular, Universe};
use serde::Serialize;

/// Named fuzzy set belonging to a linguistic variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzySet {
    pub name: &'static str,
    pub membership: Triangular,
}

/// Input or output variable: a sampled universe plus its (possibly overlapping) fuzzy sets.
#[derive(Debug, Clone, PartialEq)]
pub struct LinguisticVariable {
    name: &'static str,
    universe: Universe,
    points: Vec<f64>,
    sets: Vec<FuzzySet>,
}

impl LinguisticVariable {
    pub fn new(name: &'static str, universe: Universe) -> Self {
        Self {
            name,
            points: universe.points(),
            universe,
            sets: Vec::new(),
        }
    }

    pub fn with_set(mut self, name: &'static str, membership: Triangular) -> Self {
        self.sets.push(FuzzySet { name, membership });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn universe(&self) -> Universe {
        self.universe
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn sets(&self) -> &[FuzzySet] {
        &self.sets
    }

    pub fn set(&self, name: &str) -> Option<&FuzzySet> {
        self.sets.iter().find(|set| set.name == name)
    }

    /// Degree of every set for a crisp value, after clamping it into the universe.
    pub fn fuzzify(&self, value: f64) -> Vec<(&'static str, f64)> {
        let value = self.universe.clamp(value);
        self.sets
            .iter()
            .map(|set| (set.name, set.membership.degree(value)))
            .collect()
    }

    /// The set a crisp value belongs to most strongly, if any membership is non-zero.
    pub fn dominant_set(&self, value: f64) -> Option<(&'static str, f64)> {
        self.fuzzify(value)
            .into_iter()
            .filter(|(_, degree)| *degree > 0.0)
            .fold(None, |best, candidate| match best {
                Some((_, degree)) if degree >= candidate.1 => best,
                _ => Some(candidate),
            })
    }

    /// Membership curve of one set over the sampled universe.
    pub fn curve(&self, set: &FuzzySet) -> Vec<f64> {
        self.points
            .iter()
            .map(|point| set.membership.degree(*point))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sector_match() -> LinguisticVariable {
        LinguisticVariable::new("sector_match", Universe::new(0.0, 1.0, 0.1))
            .with_set("no", Triangular::new(0.0, 0.0, 0.6))
            .with_set("yes", Triangular::new(0.4, 1.0, 1.0))
    }

    #[test]
    fn fuzzify_reports_overlapping_degrees() {
        let variable = sector_match();
        let degrees = variable.fuzzify(0.5);

        assert_eq!(degrees.len(), 2);
        let no = degrees[0].1;
        let yes = degrees[1].1;
        assert!(no > 0.0 && yes > 0.0, "both sets overlap at 0.5");
        assert!(no + yes < 1.0, "degrees need not sum to one");
    }

    #[test]
    fn fuzzify_clamps_values_outside_the_universe() {
        let variable = sector_match();
        assert_eq!(variable.fuzzify(7.0), vec![("no", 0.0), ("yes", 1.0)]);
        assert_eq!(variable.fuzzify(-3.0), vec![("no", 1.0), ("yes", 0.0)]);
    }

    #[test]
    fn dominant_set_prefers_the_strongest_membership() {
        let variable = sector_match();
        assert_eq!(variable.dominant_set(0.9).map(|(name, _)| name), Some("yes"));
        assert_eq!(variable.dominant_set(0.1).map(|(name, _)| name), Some("no"));
    }

    #[test]
    fn curve_is_sampled_on_the_universe() {
        let variable = sector_match();
        let yes = variable.set("yes").expect("yes set defined");
        let curve = variable.curve(yes);

        assert_eq!(curve.len(), variable.points().len());
        assert_eq!(curve[0], 0.0);
        assert_eq!(curve[10], 1.0);
        assert!(variable.set("maybe").is_none());
    }
}
