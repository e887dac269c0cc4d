//! Ranks a dataset of internships for one student with the fuzzy model and
//! the weighted baseline side by side.

mod profile;
mod ranking;

pub use profile::{
    sector_match_value, skill_match_score, ProfileError, StudentProfile, MAX_CGPA,
    MAX_SKILL_LEVEL, MIN_CGPA,
};
pub use ranking::{
    company_for_sector, title_case, ModelComparison, Recommendation, RecommendationReport,
    Recommender, RELEVANCE_THRESHOLD,
};
