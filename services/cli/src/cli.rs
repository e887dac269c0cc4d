use crate::generate::{run_generate, GenerateArgs};
use crate::recommend::{run_recommend, RecommendArgs};
use crate::score::{run_score, ScoreArgs};
use clap::{Parser, Subcommand};
use internship_match::config::AppConfig;
use internship_match::error::AppError;
use internship_match::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Internship Match",
    about = "Rank internships for a student with a fuzzy inference model and a weighted baseline",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a student/internship dataset and write it as CSV
    Generate(GenerateArgs),
    /// Score one (CGPA, skill match, sector match) triple with the fuzzy model
    Score(ScoreArgs),
    /// Rank the internships in a dataset snapshot for one student
    Recommend(RecommendArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(
        environment = ?config.environment,
        data = %config.dataset.path.display(),
        top_k = config.ranking.top_k,
        "configuration loaded"
    );

    match cli.command {
        Command::Generate(args) => run_generate(args, config),
        Command::Score(args) => run_score(args),
        Command::Recommend(args) => run_recommend(args, config),
    }
}
