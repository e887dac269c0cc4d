//! Deterministic weighted-rule baseline the fuzzy model is compared against.

use std::collections::HashSet;
use std::hash::Hash;

const CGPA_WEIGHT: f64 = 0.3;
const SECTOR_WEIGHT: f64 = 0.3;
const SKILL_WEIGHT: f64 = 0.4;

/// Score in `[0, 1]`: 0.3 for meeting the CGPA requirement, 0.3 for a sector
/// match and 0.4 when the student's summed skill levels exceed the required sum.
pub fn calculate_baseline_score(
    student_cgpa: f64,
    req_cgpa: f64,
    pref_sector: &str,
    req_sector: &str,
    student_skill_sum: f64,
    req_skill_sum: f64,
) -> f64 {
    let mut score = 0.0;

    if student_cgpa >= req_cgpa {
        score += CGPA_WEIGHT;
    }
    if pref_sector == req_sector {
        score += SECTOR_WEIGHT;
    }
    if student_skill_sum > req_skill_sum {
        score += SKILL_WEIGHT;
    }

    (f64::min(score, 1.0) * 100.0).round() / 100.0
}

/// Share of the top `k` recommendations that are relevant. Always divides by `k`.
pub fn precision_at_k<T>(relevant: &HashSet<T>, recommended: &[T], k: usize) -> f64
where
    T: Eq + Hash,
{
    if recommended.is_empty() || k == 0 {
        return 0.0;
    }

    let top_k: HashSet<&T> = recommended.iter().take(k).collect();
    let true_positives = top_k.iter().filter(|item| relevant.contains(**item)).count();

    true_positives as f64 / k as f64
}
