//! Evaluation CLI: score a dataset of rankings and report per-query RR and MRR.

use anyhow::{Context, Result};
use clap::Parser;
use mrr_eval::{eval::EvalDataset, Config};
use std::path::PathBuf;

/// Compute Mean Reciprocal Rank over a JSON dataset of rankings.
#[derive(Parser, Debug)]
#[command(name = "mrr", version)]
struct Args {
    /// Path to the eval dataset JSON.
    #[arg(long, default_value = "eval_dataset.json")]
    input: PathBuf,

    /// Maximum number of top positions considered (overrides config).
    #[arg(long)]
    cutoff: Option<usize>,

    /// Scan whole rankings.
    #[arg(long, conflicts_with = "cutoff")]
    unbounded: bool,

    /// Exit with status 1 when MRR falls below this value (overrides config).
    #[arg(long)]
    min_mrr: Option<f64>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.eval.log_level.as_str()),
    )
    .init();

    let cutoff = if args.unbounded {
        None
    } else {
        args.cutoff.or(config.cutoff())
    };
    if cutoff == Some(0) {
        anyhow::bail!("--cutoff must be greater than 0");
    }
    let min_mrr = config.min_mrr(args.min_mrr)?;

    let dataset_json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let dataset = EvalDataset::from_json(&dataset_json)
        .with_context(|| format!("Invalid dataset JSON in {}", args.input.display()))?;

    if dataset.queries.is_empty() {
        anyhow::bail!("No queries in {}", args.input.display());
    }

    log::info!(
        "Evaluating {} queries from {} (cutoff: {})",
        dataset.queries.len(),
        args.input.display(),
        cutoff.map_or_else(|| "none".to_string(), |k| k.to_string())
    );

    let report = dataset.evaluate(cutoff)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for query in &report.per_query {
            println!("  {} (RR: {:.4})", query.id, query.reciprocal_rank);
        }
        println!("\nMRR = {:.4} ({} queries)", report.mrr, report.queries);
    }

    if let Some(min_mrr) = min_mrr {
        if !report.passes(min_mrr) {
            eprintln!("MRR {:.4} below threshold {:.2}", report.mrr, min_mrr);
            std::process::exit(1);
        }
    }

    Ok(())
}
