//! score-cli: Score instruments from JSON fixtures and print the evaluations.
//!
//! Usage:
//!   cargo run -p score-cli -- --input crates/score-cli/fixtures/sample.json
//!   cargo run -p score-cli -- --input acme.json globex.json --period 80
//!   LOG_FORMAT=json ENABLE_NEWS_SENTIMENT=true cargo run -p score-cli -- --input data.json

mod fixture;

use analysis_orchestrator::{AnalysisOrchestrator, InstrumentEvaluation, ScoringConfig};
use anyhow::{bail, Context};
use fixture::JsonFileProvider;
use sentiment_analysis::NewsSentimentEngine;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_LOG_FILTER: &str = "score_cli=info,analysis_orchestrator=info";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let inputs = input_paths(&args);
    if inputs.is_empty() {
        eprintln!("Usage:");
        eprintln!("  score-cli --input <fixture.json>...          Score each fixture");
        eprintln!("  score-cli --input <fixture.json>... --period N  Override FIBONACCI_PERIOD");
        std::process::exit(1);
    }

    let mut config = ScoringConfig::from_env()?;
    if let Some(period) = args
        .iter()
        .position(|a| a == "--period")
        .and_then(|i| args.get(i + 1))
    {
        config.fibonacci_period = period
            .parse()
            .with_context(|| format!("--period expects a bar count, got {}", period))?;
    }

    let total = inputs.len();
    let mut evaluations = Vec::with_capacity(total);
    for (i, input) in inputs.iter().enumerate() {
        match score_fixture(input, &config).await {
            Ok(evaluation) => {
                tracing::info!(
                    "[{}/{}] {} => {:.1} ({})",
                    i + 1,
                    total,
                    evaluation.symbol,
                    evaluation.composite.score,
                    evaluation.composite.label
                );
                evaluations.push(evaluation);
            }
            Err(e) => tracing::warn!("[{}/{}] {} failed: {:#}", i + 1, total, input.display(), e),
        }
    }

    if evaluations.is_empty() {
        bail!("none of the {} fixtures could be scored", total);
    }

    println!("{}", serde_json::to_string_pretty(&evaluations)?);
    Ok(())
}

/// Paths following `--input`, up to the next flag.
fn input_paths(args: &[String]) -> Vec<PathBuf> {
    match args.iter().position(|a| a == "--input") {
        Some(idx) => args[idx + 1..]
            .iter()
            .take_while(|a| !a.starts_with("--"))
            .map(PathBuf::from)
            .collect(),
        None => Vec::new(),
    }
}

async fn score_fixture(input: &Path, config: &ScoringConfig) -> anyhow::Result<InstrumentEvaluation> {
    let provider = Arc::new(JsonFileProvider::load(input)?);
    let symbol = provider.symbol().to_string();

    let mut orchestrator = AnalysisOrchestrator::from_config(provider.clone(), config)?;
    if config.enable_news_sentiment {
        orchestrator = orchestrator.with_news(NewsSentimentEngine::with_lexicon(provider));
    }

    tracing::debug!("Scoring {} from {}", symbol, input.display());
    orchestrator
        .evaluate(&symbol)
        .await
        .with_context(|| format!("evaluation of {} failed", symbol))
}
