use serde::{Deserialize, Serialize};

/// Skills tracked for both the student and the internship requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Python,
    Matlab,
    Leadership,
    Teamwork,
    AutoCad,
}

impl Skill {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Python,
            Self::Matlab,
            Self::Leadership,
            Self::Teamwork,
            Self::AutoCad,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Matlab => "MATLAB",
            Self::Leadership => "Leadership",
            Self::Teamwork => "Teamwork",
            Self::AutoCad => "AutoCAD",
        }
    }
}

/// Proficiency (0-100) per skill, in [`Skill::ordered`] order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillLevels {
    pub python: f64,
    pub matlab: f64,
    pub leadership: f64,
    pub teamwork: f64,
    pub autocad: f64,
}

impl SkillLevels {
    pub fn uniform(level: f64) -> Self {
        Self {
            python: level,
            matlab: level,
            leadership: level,
            teamwork: level,
            autocad: level,
        }
    }

    pub fn level(&self, skill: Skill) -> f64 {
        match skill {
            Skill::Python => self.python,
            Skill::Matlab => self.matlab,
            Skill::Leadership => self.leadership,
            Skill::Teamwork => self.teamwork,
            Skill::AutoCad => self.autocad,
        }
    }

    pub fn values(&self) -> [f64; 5] {
        Skill::ordered().map(|skill| self.level(skill))
    }

    pub fn sum(&self) -> f64 {
        self.values().iter().sum()
    }
}

/// One row of the flat snapshot: a student profile paired with an internship requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipRecord {
    #[serde(rename = "StudentID")]
    pub student_id: String,
    #[serde(rename = "Major_Course")]
    pub major_course: String,
    #[serde(rename = "CGPA")]
    pub cgpa: f64,
    #[serde(rename = "Pref_Sector")]
    pub pref_sector: String,
    #[serde(rename = "req_Sector")]
    pub req_sector: String,
    #[serde(rename = "Req_CGPA")]
    pub req_cgpa: f64,
    #[serde(rename = "Skill_Python_Level")]
    pub skill_python_level: u32,
    #[serde(rename = "Req_Skill_Python_Level")]
    pub req_skill_python_level: u32,
    #[serde(rename = "Skill_MATLAB_Level")]
    pub skill_matlab_level: u32,
    #[serde(rename = "Req_Skill_MATLAB_Level")]
    pub req_skill_matlab_level: u32,
    #[serde(rename = "Skill_Leadership_Level")]
    pub skill_leadership_level: u32,
    #[serde(rename = "Req_Skill_Leadership_Level")]
    pub req_skill_leadership_level: u32,
    #[serde(rename = "Skill_Teamwork_Level")]
    pub skill_teamwork_level: u32,
    #[serde(rename = "Req_Skill_Teamwork_Level")]
    pub req_skill_teamwork_level: u32,
    #[serde(rename = "Skill_AutoCAD_Level")]
    pub skill_autocad_level: u32,
    #[serde(rename = "Req_Skill_AutoCAD_Level")]
    pub req_skill_autocad_level: u32,
}

impl InternshipRecord {
    pub fn student_skills(&self) -> SkillLevels {
        SkillLevels {
            python: f64::from(self.skill_python_level),
            matlab: f64::from(self.skill_matlab_level),
            leadership: f64::from(self.skill_leadership_level),
            teamwork: f64::from(self.skill_teamwork_level),
            autocad: f64::from(self.skill_autocad_level),
        }
    }

    pub fn required_skills(&self) -> SkillLevels {
        SkillLevels {
            python: f64::from(self.req_skill_python_level),
            matlab: f64::from(self.req_skill_matlab_level),
            leadership: f64::from(self.req_skill_leadership_level),
            teamwork: f64::from(self.req_skill_teamwork_level),
            autocad: f64::from(self.req_skill_autocad_level),
        }
    }
}

/// Distinct required sectors in first-seen order.
pub fn available_sectors(records: &[InternshipRecord]) -> Vec<String> {
    let mut sectors: Vec<String> = Vec::new();
    for record in records {
        if !sectors.contains(&record.req_sector) {
            sectors.push(record.req_sector.clone());
        }
    }
    sectors
}
