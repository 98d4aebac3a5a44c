// File: crates/gapaxis-cli/src/main.rs
// Summary: CLI that loads a CSV column and prints its broken-axis plan (text or JSON).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gapaxis_core::{AxisSpec, BreakParams, Catalog, Planner};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gapaxis")]
#[command(about = "Decide between a continuous axis and a broken axis for a numeric CSV column")]
#[command(version)]
struct Cli {
    /// CSV file with a header row
    input: PathBuf,

    /// Column to plan (matched case-insensitively)
    column: String,

    /// Fraction of the overall range the largest gap must reach
    #[arg(long)]
    chk_pct: Option<f64>,

    /// Margin as a fraction of each sub-range's effective range
    #[arg(long)]
    mar_pct: Option<f64>,

    /// Maximum number of gaps to split on (capped at 3)
    #[arg(long)]
    max_gap: Option<usize>,

    /// JSON file with default parameters; flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,

    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let params = load_params(&cli)?;
    let path = resolve_path(&cli.input)?;

    let mut catalog = Catalog::new();
    let dataset = catalog
        .insert_csv_path(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;

    let plan = Planner::new(params)
        .plan_in_catalog(&catalog, &dataset, &cli.column)
        .with_context(|| format!("cannot plan column '{}' of '{}'", cli.column, path.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Using input file: {}", path.display());
    println!("Range: [{}, {}]", gapaxis_core::format::number(plan.min), gapaxis_core::format::number(plan.max));
    match &plan.spec {
        AxisSpec::Values { .. } => println!("Mode: VALUES"),
        AxisSpec::Ranges { subranges } => println!("Mode: RANGES ({} sub-ranges)", subranges.len()),
    }
    println!("{}", plan.option_text());
    for d in &plan.diagnostics {
        println!("note: {}", d.message());
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Config file first (if any), then command-line overrides.
fn load_params(cli: &Cli) -> Result<BreakParams> {
    let mut params = match &cli.config {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading config {}", p.display()))?;
            serde_json::from_str::<BreakParams>(&text).with_context(|| format!("parsing config {}", p.display()))?
        }
        None => BreakParams::default(),
    };
    if let Some(v) = cli.chk_pct { params.chk_pct = v; }
    if let Some(v) = cli.mar_pct { params.mar_pct = v; }
    if let Some(v) = cli.max_gap { params.max_gap = v; }
    params.validate()?;
    Ok(params)
}

fn resolve_path(raw: &Path) -> Result<PathBuf> {
    if raw.exists() {
        return Ok(raw.to_path_buf());
    }
    anyhow::bail!("file not found: {}", raw.display());
}
