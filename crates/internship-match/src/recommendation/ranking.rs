use super::profile::{sector_match_value, skill_match_score, StudentProfile};
use crate::dataset::InternshipRecord;
use crate::scoring::{calculate_baseline_score, precision_at_k, FuzzyScorer};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

/// Baseline score from which an internship counts as relevant.
pub const RELEVANCE_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub record_id: String,
    pub company: String,
    pub sector: String,
    /// Fuzzy suitability rescaled to `[0, 1]`.
    pub fuzzy_score: f64,
    pub baseline_score: f64,
    pub required_cgpa: f64,
}

pub fn company_for_sector(sector: &str) -> &'static str {
    match sector {
        "oil & gas" => "PETRONAS Energy Solutions",
        "tech & software" => "UTP Digital Labs",
        "finance & consulting" => "Perak Financial Group",
        "manufacturing" => "Malaysian AutoWorks",
        "construction" => "Bota Infra Group",
        _ => "Global Internship Co.",
    }
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
pub fn title_case(value: &str) -> String {
    let mut rendered = String::with_capacity(value.len());
    let mut inside_word = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if inside_word {
                rendered.extend(ch.to_lowercase());
            } else {
                rendered.extend(ch.to_uppercase());
            }
            inside_word = true;
        } else {
            rendered.push(ch);
            inside_word = false;
        }
    }

    rendered
}

/// Scores every internship for one student with both models.
#[derive(Debug, Clone)]
pub struct Recommender {
    scorer: FuzzyScorer,
    top_k: usize,
}

impl Recommender {
    pub fn new(scorer: FuzzyScorer, top_k: usize) -> Self {
        Self { scorer, top_k }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Every record ranked by fuzzy score, highest first. Ties keep dataset order.
    pub fn rank(
        &self,
        profile: &StudentProfile,
        records: &[InternshipRecord],
    ) -> Vec<Recommendation> {
        let mut ranked: Vec<Recommendation> = records
            .iter()
            .map(|record| self.score_record(profile, record))
            .collect();

        ranked.sort_by(|left, right| right.fuzzy_score.total_cmp(&left.fuzzy_score));
        ranked
    }

    pub fn recommend(
        &self,
        profile: &StudentProfile,
        records: &[InternshipRecord],
    ) -> Vec<Recommendation> {
        let mut ranked = self.rank(profile, records);
        ranked.truncate(self.top_k);

        info!(
            evaluated = records.len(),
            returned = ranked.len(),
            sector = %profile.pref_sector,
            "internships ranked"
        );
        ranked
    }

    /// Top-k ranking plus the model comparison, stamped with the local time.
    pub fn report(
        &self,
        profile: &StudentProfile,
        records: &[InternshipRecord],
    ) -> RecommendationReport {
        let mut ranked = self.rank(profile, records);
        let comparison = ModelComparison::from_ranked(&ranked, self.top_k);
        ranked.truncate(self.top_k);

        info!(
            evaluated = records.len(),
            returned = ranked.len(),
            agreement = comparison.agreement,
            "recommendation report built"
        );

        RecommendationReport {
            generated_at: Local::now(),
            profile: profile.clone(),
            evaluated: records.len(),
            recommendations: ranked,
            comparison,
        }
    }

    fn score_record(&self, profile: &StudentProfile, record: &InternshipRecord) -> Recommendation {
        let required = record.required_skills();
        let skill_match = skill_match_score(&profile.skills, &required);
        let sector_match = sector_match_value(&profile.pref_sector, &record.req_sector);

        let fuzzy = self
            .scorer
            .get_fuzzy_score(profile.cgpa, skill_match, sector_match);
        let baseline = calculate_baseline_score(
            profile.cgpa,
            record.req_cgpa,
            &profile.pref_sector,
            &record.req_sector,
            profile.skills.sum(),
            required.sum(),
        );

        Recommendation {
            record_id: record.student_id.clone(),
            company: company_for_sector(&record.req_sector).to_string(),
            sector: title_case(&record.req_sector),
            fuzzy_score: fuzzy / 100.0,
            baseline_score: baseline,
            required_cgpa: record.req_cgpa,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub generated_at: DateTime<Local>,
    pub profile: StudentProfile,
    pub evaluated: usize,
    pub recommendations: Vec<Recommendation>,
    pub comparison: ModelComparison,
}

/// How the fuzzy ranking lines up with the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelComparison {
    pub mean_fuzzy: f64,
    pub mean_baseline: f64,
    /// Precision@k of the fuzzy ranking against baseline-relevant internships.
    pub agreement: f64,
}

impl ModelComparison {
    /// `ranked` must be the full fuzzy ranking; means are taken over its top `k`.
    pub fn from_ranked(ranked: &[Recommendation], k: usize) -> Self {
        let relevant: HashSet<&str> = ranked
            .iter()
            .filter(|item| item.baseline_score >= RELEVANCE_THRESHOLD)
            .map(|item| item.record_id.as_str())
            .collect();
        let order: Vec<&str> = ranked.iter().map(|item| item.record_id.as_str()).collect();

        let top = &ranked[..k.min(ranked.len())];
        Self {
            mean_fuzzy: mean(top.iter().map(|item| item.fuzzy_score)),
            mean_baseline: mean(top.iter().map(|item| item.baseline_score)),
            agreement: precision_at_k(&relevant, &order, k),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
