use clap::Args;
use internship_match::config::AppConfig;
use internship_match::dataset::{available_sectors, InternshipSnapshot, SkillLevels};
use internship_match::error::AppError;
use internship_match::recommendation::{RecommendationReport, Recommender, StudentProfile};
use internship_match::scoring::FuzzyScorer;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Student CGPA (2.0-4.0)
    #[arg(long, default_value_t = 3.5, value_parser = crate::parse::parse_cgpa)]
    pub(crate) cgpa: f64,
    /// Preferred sector (defaults to the first sector in the snapshot)
    #[arg(long)]
    pub(crate) sector: Option<String>,
    #[arg(long, default_value_t = 70.0, value_parser = crate::parse::parse_skill_level)]
    pub(crate) python: f64,
    #[arg(long, default_value_t = 70.0, value_parser = crate::parse::parse_skill_level)]
    pub(crate) matlab: f64,
    #[arg(long, default_value_t = 70.0, value_parser = crate::parse::parse_skill_level)]
    pub(crate) leadership: f64,
    #[arg(long, default_value_t = 70.0, value_parser = crate::parse::parse_skill_level)]
    pub(crate) teamwork: f64,
    #[arg(long, default_value_t = 70.0, value_parser = crate::parse::parse_skill_level)]
    pub(crate) autocad: f64,
    /// Dataset snapshot to rank (defaults to MATCH_DATA_FILE)
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    /// Number of internships to show (defaults to MATCH_TOP_K or 10)
    #[arg(long, value_parser = crate::parse::parse_positive)]
    pub(crate) top_k: Option<usize>,
    /// Emit the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(path) = args.data.clone() {
        config.dataset.path = path;
    }
    if let Some(top_k) = args.top_k {
        config.ranking.top_k = top_k;
    }

    let records = match InternshipSnapshot::from_path(&config.dataset.path) {
        Ok(records) => records,
        Err(err) => {
            warn!(path = %config.dataset.path.display(), error = %err, "dataset unavailable");
            eprintln!(
                "Data file {} could not be read; run `internship-match generate` first.",
                config.dataset.path.display()
            );
            return Err(err.into());
        }
    };

    let sectors = available_sectors(&records);
    let sector = match (&args.sector, sectors.first()) {
        (Some(sector), _) => sector.clone(),
        (None, Some(first)) => first.clone(),
        (None, None) => {
            println!("The dataset is empty; nothing to recommend.");
            return Ok(());
        }
    };

    let skills = SkillLevels {
        python: args.python,
        matlab: args.matlab,
        leadership: args.leadership,
        teamwork: args.teamwork,
        autocad: args.autocad,
    };
    let profile = StudentProfile::new(args.cgpa, &sector, skills)?;
    profile.ensure_sector_known(&sectors)?;

    let recommender = Recommender::new(FuzzyScorer::default(), config.ranking.top_k);
    let report = recommender.report(&profile, &records);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("Unable to serialise recommendations: {err}"),
        }
        return Ok(());
    }

    render_report(&report);
    Ok(())
}

fn render_report(report: &RecommendationReport) {
    let profile = &report.profile;
    println!("Internship recommendations");
    println!(
        "Student: CGPA {:.2} | preferred sector {} | skills {:?}",
        profile.cgpa,
        profile.pref_sector,
        profile.skills.values()
    );
    println!(
        "Evaluated {} internships; top {} shown",
        report.evaluated,
        report.recommendations.len()
    );

    println!(
        "\n{:<4} {:<28} {:<22} {:>7} {:>9} {:>8}",
        "#", "Company", "Sector", "Fuzzy", "Baseline", "Req CGPA"
    );
    for (rank, item) in report.recommendations.iter().enumerate() {
        println!(
            "{:<4} {:<28} {:<22} {:>7.3} {:>9.2} {:>8.2}",
            rank + 1,
            item.company,
            item.sector,
            item.fuzzy_score,
            item.baseline_score,
            item.required_cgpa
        );
    }

    let comparison = &report.comparison;
    println!("\nModel comparison (top {})", report.recommendations.len());
    println!("- mean fuzzy score: {:.3}", comparison.mean_fuzzy);
    println!("- mean baseline score: {:.3}", comparison.mean_baseline);
    println!(
        "- agreement with baseline (precision@k): {:.0}%",
        comparison.agreement * 100.0
    );
    println!(
        "\nGenerated at {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
}
