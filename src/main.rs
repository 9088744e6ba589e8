//! Preference survey CLI
//!
//! Run with: cargo run -- [RUNS] [--skip-check]

use anyhow::{Context, Result};
use preference_survey::{run_surveys, LlmSelector, QuestionPool, RandomAnswers, ResultStore, SurveyConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (program, rest) = split_args(&args);

    if rest.iter().any(|a| a == "--help" || a == "-h") {
        print_usage(program);
        return Ok(());
    }

    tracing_subscriber::fmt::init();

    let skip_check = rest.iter().any(|a| a == "--skip-check");
    let runs = parse_runs(rest)?;

    let config = SurveyConfig::from_env()?;
    let selector = LlmSelector::new(config.selector.clone());

    if !skip_check {
        let key = &config.selector.api_key;
        println!(
            "Testing API connection with key: {}...",
            key.chars().take(10).collect::<String>()
        );
        if !selector.check_connection().await {
            anyhow::bail!(
                "Failed to connect to {}. Please check your API key and connection.",
                config.selector.api_url
            );
        }
    }

    let store = ResultStore::new(&config.results_path);
    let mut answers = RandomAnswers::new(config.seed);
    tracing::info!("Writing results to {:?}", store.path());

    let records = run_surveys(&QuestionPool::default(), &selector, &mut answers, &store, runs).await?;

    let answered: usize = records.iter().map(|r| r.responses.len()).sum();
    println!(
        "\nFinished {} run(s), {} question(s) answered. Results in {}",
        records.len(),
        answered,
        store.path().display()
    );

    Ok(())
}

/// Program name and the arguments after it; argv may be empty
fn split_args(args: &[String]) -> (&str, &[String]) {
    let program = args.first().map(String::as_str).unwrap_or("survey");
    (program, args.get(1..).unwrap_or_default())
}

/// First non-flag argument is the run count (default 1)
fn parse_runs(args: &[String]) -> Result<usize> {
    let Some(raw) = args.iter().find(|a| !a.starts_with("--")) else {
        return Ok(1);
    };

    let runs: usize = raw
        .parse()
        .with_context(|| format!("Invalid run count {:?}: expected a positive integer", raw))?;
    if runs == 0 {
        anyhow::bail!("Run count must be at least 1");
    }
    Ok(runs)
}

fn print_usage(program: &str) {
    println!("Usage: {} [RUNS] [--skip-check]", program);
    println!();
    println!("  RUNS          Number of surveys to run (default: 1)");
    println!("  --skip-check  Skip the API connection test");
    println!();
    println!("Environment:");
    println!("  OPENROUTER_API_KEY   API key (required)");
    println!("  SURVEY_API_URL       Chat-completion endpoint");
    println!("  SURVEY_MODEL         Model identifier");
    println!("  SURVEY_RESULTS_PATH  Results file (default: simulations/survey_results.json)");
    println!("  SURVEY_SEED          Seed for simulated answers");
}
