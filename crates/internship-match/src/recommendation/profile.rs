use crate::dataset::{Skill, SkillLevels};
use serde::{Deserialize, Serialize};

pub const MIN_CGPA: f64 = 2.0;
pub const MAX_CGPA: f64 = 4.0;
pub const MAX_SKILL_LEVEL: f64 = 100.0;

/// The student the internships are ranked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub cgpa: f64,
    pub pref_sector: String,
    pub skills: SkillLevels,
}

impl StudentProfile {
    /// Validates the profile against the input bounds and normalises the sector name.
    pub fn new(
        cgpa: f64,
        pref_sector: &str,
        skills: SkillLevels,
    ) -> Result<Self, ProfileError> {
        if !(MIN_CGPA..=MAX_CGPA).contains(&cgpa) {
            return Err(ProfileError::CgpaOutOfRange(cgpa));
        }

        for skill in Skill::ordered() {
            let level = skills.level(skill);
            if !(0.0..=MAX_SKILL_LEVEL).contains(&level) {
                return Err(ProfileError::SkillOutOfRange {
                    skill: skill.label(),
                    level,
                });
            }
        }

        Ok(Self {
            cgpa,
            pref_sector: pref_sector.trim().to_lowercase(),
            skills,
        })
    }

    /// Fails when the preferred sector is not one the dataset offers.
    pub fn ensure_sector_known(&self, sectors: &[String]) -> Result<(), ProfileError> {
        if sectors.iter().any(|sector| *sector == self.pref_sector) {
            Ok(())
        } else {
            Err(ProfileError::UnknownSector {
                sector: self.pref_sector.clone(),
                known: sectors.to_vec(),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("CGPA {0} is outside 2.0-4.0")]
    CgpaOutOfRange(f64),
    #[error("{skill} level {level} is outside 0-100")]
    SkillOutOfRange { skill: &'static str, level: f64 },
    #[error("sector '{sector}' is not offered (known: {})", known.join(", "))]
    UnknownSector { sector: String, known: Vec<String> },
}

/// Average per-skill coverage (0-100). A requirement of zero counts as fully covered.
pub fn skill_match_score(student: &SkillLevels, required: &SkillLevels) -> f64 {
    let ratios: Vec<f64> = Skill::ordered()
        .iter()
        .map(|skill| {
            let required = required.level(*skill);
            if required > 0.0 {
                (student.level(*skill) / required * 100.0).min(100.0)
            } else {
                100.0
            }
        })
        .collect();

    if ratios.is_empty() {
        return 0.0;
    }
    ratios.iter().sum::<f64>() / ratios.len() as f64
}

pub fn sector_match_value(pref_sector: &str, req_sector: &str) -> f64 {
    if pref_sector == req_sector {
        1.0
    } else {
        0.0
    }
}
