use clap::Args;
use internship_match::error::AppError;
use internship_match::scoring::fuzzy::{InferenceSession, NON_EVALUABLE_SCORE};
use internship_match::scoring::{FuzzyScorer, InferenceError, ScoreOutcome};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Student CGPA (clamped to 2.0-4.0)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) cgpa: f64,
    /// Skill match percentage (clamped to 0-100)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) skill_match: f64,
    /// 1 when the internship is in the preferred sector, 0 otherwise
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) sector_match: f64,
    /// Print memberships, rule firing strengths and set activations
    #[arg(long)]
    pub(crate) explain: bool,
    /// Emit the inference session as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let scorer = FuzzyScorer::default();
    let outcome = scorer.assess(args.cgpa, args.skill_match, args.sector_match);

    if args.json {
        match scorer
            .engine()
            .session(args.cgpa, args.skill_match, args.sector_match)
        {
            Ok(session) => match serde_json::to_string_pretty(&session) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("Unable to serialise inference session: {err}"),
            },
            Err(err) => println!(
                "{}",
                serde_json::json!({ "error": err.to_string(), "score": outcome.value() })
            ),
        }
        return Ok(());
    }

    println!("Fuzzy suitability: {:.2}", outcome.value());
    match outcome {
        ScoreOutcome::Evaluated(_) => {}
        ScoreOutcome::NonEvaluable => println!(
            "No rule fired for these inputs; reporting the fallback score {NON_EVALUABLE_SCORE:.1}"
        ),
        ScoreOutcome::Failed => println!("Inference failed; see the log for details"),
    }

    if args.explain {
        match scorer
            .engine()
            .session(args.cgpa, args.skill_match, args.sector_match)
        {
            Ok(session) => render_session(&session),
            Err(err) => println!("\nNo inference session available: {err}"),
        }
    }

    Ok(())
}

fn render_session(session: &InferenceSession) {
    println!("\nInputs");
    for input in &session.inputs {
        if input.value == input.clamped {
            println!("- {}: {}", input.variable, input.value);
        } else {
            println!(
                "- {}: {} (clamped to {})",
                input.variable, input.value, input.clamped
            );
        }
    }

    println!("Memberships");
    for term in session.memberships.iter().filter(|term| term.degree > 0.0) {
        println!("- {} is {}: {:.3}", term.variable, term.set, term.degree);
    }

    println!("Rule firing strengths");
    for firing in &session.firings {
        println!(
            "- rule {} ({}) -> {}: {:.3}",
            firing.rule_id, firing.label, firing.consequent, firing.strength
        );
    }

    println!("Output set activation");
    for activation in &session.activations {
        println!("- {}: {:.3}", activation.set, activation.strength);
    }

    match session.outcome() {
        Ok(score) => println!("Centroid: {score:.2}"),
        Err(InferenceError::NoActivation) => println!("Centroid: undefined (empty aggregate)"),
        Err(err) => println!("Centroid: unavailable ({err})"),
    }
}
