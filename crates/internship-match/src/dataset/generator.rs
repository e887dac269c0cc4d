use super::domain::InternshipRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

pub const MAJORS: [&str; 4] = [
    "Computer Science",
    "Petroleum Engineering",
    "Chemical Engineering",
    "Electrical Engineering",
];

pub const SECTORS: [&str; 4] = [
    "Oil & Gas",
    "Tech & Software",
    "Finance & Consulting",
    "Manufacturing",
];

/// Probability that an internship sits in the student's preferred sector.
const SECTOR_MATCH_RATE: f64 = 0.7;

/// Simulates student profiles paired with internship requirements.
#[derive(Debug, Clone, Copy)]
pub struct DatasetGenerator {
    records: usize,
    seed: Option<u64>,
}

impl DatasetGenerator {
    pub fn new(records: usize) -> Self {
        Self {
            records,
            seed: None,
        }
    }

    /// Same seed, same dataset.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn generate(&self) -> Vec<InternshipRecord> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let records: Vec<InternshipRecord> = (1..=self.records)
            .map(|index| simulate_record(index, &mut rng))
            .collect();

        info!(
            records = records.len(),
            seeded = self.seed.is_some(),
            "internship dataset simulated"
        );
        records
    }
}

fn simulate_record<R: Rng>(index: usize, rng: &mut R) -> InternshipRecord {
    let major = pick(rng, &MAJORS);
    let cgpa = round_to_cents(rng.gen_range(2.5..=4.0));
    let pref_sector = pick(rng, &SECTORS);

    let req_cgpa = round_to_cents(rng.gen_range(2.8..=3.8));
    let req_sector = if rng.gen::<f64>() < SECTOR_MATCH_RATE {
        pref_sector
    } else {
        pick(rng, &SECTORS)
    };

    let mut skill = || rng.gen_range(30..=95_u32);
    let student = [skill(), skill(), skill(), skill(), skill()];
    let mut required = || rng.gen_range(50..=90_u32);
    let requirement = [required(), required(), required(), required(), required()];

    InternshipRecord {
        student_id: format!("S{index:04}"),
        major_course: major.to_lowercase(),
        cgpa,
        pref_sector: pref_sector.to_string(),
        req_sector: req_sector.to_lowercase(),
        req_cgpa,
        skill_python_level: student[0],
        req_skill_python_level: requirement[0],
        skill_matlab_level: student[1],
        req_skill_matlab_level: requirement[1],
        skill_leadership_level: student[2],
        req_skill_leadership_level: requirement[2],
        skill_teamwork_level: student[3],
        req_skill_teamwork_level: requirement[3],
        skill_autocad_level: student[4],
        req_skill_autocad_level: requirement[4],
    }
}

fn pick<R: Rng>(rng: &mut R, options: &[&'static str]) -> &'static str {
    options[rng.gen_range(0..options.len())]
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generation_is_reproducible() {
        let first = DatasetGenerator::new(25).with_seed(7).generate();
        let second = DatasetGenerator::new(25).with_seed(7).generate();
        let other = DatasetGenerator::new(25).with_seed(8).generate();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn records_respect_the_simulation_bounds() {
        let records = DatasetGenerator::new(300).with_seed(11).generate();
        assert_eq!(records.len(), 300);
        assert_eq!(records[0].student_id, "S0001");
        assert_eq!(records[299].student_id, "S0300");

        let majors: Vec<String> = MAJORS.iter().map(|major| major.to_lowercase()).collect();
        let sectors: Vec<String> = SECTORS.iter().map(|sector| sector.to_lowercase()).collect();

        for record in &records {
            assert!((2.5..=4.0).contains(&record.cgpa));
            assert!((2.8..=3.8).contains(&record.req_cgpa));
            assert_eq!(record.cgpa, round_to_cents(record.cgpa));
            assert!(majors.contains(&record.major_course));
            assert!(SECTORS.contains(&record.pref_sector.as_str()));
            assert!(sectors.contains(&record.req_sector));
            assert!(record
                .student_skills()
                .values()
                .iter()
                .all(|level| (30.0..=95.0).contains(level)));
            assert!(record
                .required_skills()
                .values()
                .iter()
                .all(|level| (50.0..=90.0).contains(level)));
        }
    }

    #[test]
    fn most_internships_match_the_preferred_sector() {
        let records = DatasetGenerator::new(1000).with_seed(3).generate();
        let matched = records
            .iter()
            .filter(|record| record.pref_sector.to_lowercase() == record.req_sector)
            .count();

        // 70% forced matches plus a quarter of the rest by chance.
        assert!(matched > 700, "only {matched} sector matches");
    }
}
