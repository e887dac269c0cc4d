use internship_match::dataset::{
    available_sectors, DatasetGenerator, InternshipRecord, InternshipSnapshot, SkillLevels,
};
use internship_match::recommendation::{
    company_for_sector, ModelComparison, Recommender, StudentProfile,
};
use internship_match::scoring::FuzzyScorer;
use tempfile::tempdir;

fn simulated_snapshot(records: usize, seed: u64) -> Vec<InternshipRecord> {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("utp_internship_data.csv");

    let generated = DatasetGenerator::new(records).with_seed(seed).generate();
    InternshipSnapshot::to_path(&path, &generated).expect("snapshot written");
    InternshipSnapshot::from_path(&path).expect("snapshot loaded")
}

fn internship(id: &str, sector: &str, req_cgpa: f64, requirement: u32) -> InternshipRecord {
    InternshipRecord {
        student_id: id.to_string(),
        major_course: "chemical engineering".to_string(),
        cgpa: 3.0,
        pref_sector: "manufacturing".to_string(),
        req_sector: sector.to_string(),
        req_cgpa,
        skill_python_level: 50,
        req_skill_python_level: requirement,
        skill_matlab_level: 50,
        req_skill_matlab_level: requirement,
        skill_leadership_level: 50,
        req_skill_leadership_level: requirement,
        skill_teamwork_level: 50,
        req_skill_teamwork_level: requirement,
        skill_autocad_level: 50,
        req_skill_autocad_level: requirement,
    }
}

#[test]
fn snapshot_survives_a_disk_round_trip() {
    let generated = DatasetGenerator::new(40).with_seed(21).generate();
    let loaded = simulated_snapshot(40, 21);

    assert_eq!(loaded.len(), generated.len());
    for (original, reloaded) in generated.iter().zip(&loaded) {
        assert_eq!(reloaded.student_id, original.student_id);
        assert_eq!(reloaded.cgpa, original.cgpa);
        assert_eq!(reloaded.pref_sector, original.pref_sector.to_lowercase());
        assert_eq!(reloaded.req_sector, original.req_sector);
        assert_eq!(reloaded.required_skills(), original.required_skills());
    }
}

#[test]
fn recommendations_over_a_simulated_dataset_are_ranked_and_bounded() {
    let records = simulated_snapshot(200, 4);
    let sectors = available_sectors(&records);
    let profile = StudentProfile::new(3.5, &sectors[0], SkillLevels::uniform(70.0))
        .expect("valid profile");
    profile.ensure_sector_known(&sectors).expect("sector offered");

    let recommender = Recommender::new(FuzzyScorer::default(), 10);
    let top = recommender.recommend(&profile, &records);

    assert_eq!(top.len(), 10);
    for pair in top.windows(2) {
        assert!(pair[0].fuzzy_score >= pair[1].fuzzy_score);
    }
    for item in &top {
        assert!((0.0..=1.0).contains(&item.fuzzy_score));
        assert!((0.0..=1.0).contains(&item.baseline_score));
        assert_eq!(
            item.company,
            company_for_sector(&item.sector.to_lowercase())
        );
    }

    let ranked = recommender.rank(&profile, &records);
    assert_eq!(ranked.len(), records.len());
    assert_eq!(&ranked[..10], top.as_slice());

    let comparison = ModelComparison::from_ranked(&ranked, recommender.top_k());
    assert!((0.0..=1.0).contains(&comparison.agreement));
    assert!(comparison.mean_fuzzy > 0.0);
}

#[test]
fn stronger_students_score_higher_under_both_models() {
    let records = simulated_snapshot(150, 9);
    let recommender = Recommender::new(FuzzyScorer::default(), 150);

    let strong = StudentProfile::new(4.0, "oil & gas", SkillLevels::uniform(95.0))
        .expect("valid profile");
    let weak = StudentProfile::new(2.0, "oil & gas", SkillLevels::uniform(30.0))
        .expect("valid profile");

    let strong = ModelComparison::from_ranked(&recommender.rank(&strong, &records), 150);
    let weak = ModelComparison::from_ranked(&recommender.rank(&weak, &records), 150);

    assert!(strong.mean_fuzzy > weak.mean_fuzzy);
    assert!(strong.mean_baseline > weak.mean_baseline);
}

#[test]
fn uncovered_profiles_fall_back_to_the_non_evaluable_score() {
    // CGPA 3.2, 60% skill coverage, matching sector: no rule covers it.
    let profile = StudentProfile::new(3.2, "oil & gas", SkillLevels::uniform(60.0))
        .expect("valid profile");
    let records = vec![
        internship("S0001", "oil & gas", 3.0, 100),
        internship("S0002", "manufacturing", 3.0, 60),
    ];

    let ranked = Recommender::new(FuzzyScorer::default(), 2).rank(&profile, &records);

    let fallback = ranked
        .iter()
        .find(|item| item.record_id == "S0001")
        .expect("matching internship ranked");
    assert!((fallback.fuzzy_score - 0.05).abs() < 1e-9);
    assert_eq!(fallback.baseline_score, 0.6);
    assert_eq!(fallback.sector, "Oil & Gas");
}
