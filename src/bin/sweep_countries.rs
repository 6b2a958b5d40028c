//! Generate snapshots for every catalog country and write a CSV summary
//!
//! Usage: cargo run --bin sweep_countries -- --date 2023-06-30 --seed 42

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use macro_scenario::country::catalog::CATALOG;
use macro_scenario::projection::{project, PolicyLevers};
use macro_scenario::scenario::{parse_query_date, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(name = "sweep_countries", about = "Snapshot every catalog country in parallel")]
struct Args {
    /// Query date, YYYY-MM-DD (defaults to today, UTC)
    #[arg(short, long)]
    date: Option<String>,

    /// Base seed; each country derives its own source from it
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Levers projected onto every snapshot: rate, spending, tax
    #[arg(long, num_args = 3, value_names = ["RATE", "SPENDING", "TAX"])]
    levers: Option<Vec<f64>>,

    /// Output CSV path
    #[arg(short, long, default_value = "country_sweep.csv")]
    output: PathBuf,
}

/// One output row per country
#[derive(Debug, Serialize)]
struct SweepRow<'a> {
    code: &'a str,
    name: &'a str,
    profiled: bool,
    damping: f64,
    gdp: f64,
    inflation: f64,
    interest_rate: f64,
    unemployment: f64,
    population: f64,
    imports: f64,
    exports: f64,
    trade_balance: f64,
    remittances: f64,
    gdp_series_mean: f64,
    projected_gdp: Option<f64>,
    projected_inflation: Option<f64>,
    projected_unemployment: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let now = Utc::now();
    let query_date = match &args.date {
        Some(input) => parse_query_date(input)?,
        None => now.date_naive(),
    };

    let runner = ScenarioRunner::new();
    let codes: Vec<&str> = CATALOG.iter().map(|c| c.code).collect();

    println!("Generating {} snapshots for {}...", codes.len(), query_date);
    let results = runner.run_batch(&codes, query_date, now, args.seed);
    println!("Generated in {:?}", start.elapsed());

    let levers = args
        .levers
        .as_deref()
        .map(|v| PolicyLevers::new(v[0], v[1], v[2]).clamped());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut surplus_count = 0;
    for (info, (_, scenario)) in CATALOG.iter().zip(&results) {
        let snap = &scenario.snapshot;
        let effects = levers.map(|l| project(snap, &l));
        let projected = |i: usize| effects.as_ref().map(|e| e[i].projected_value);

        if snap.trade.is_surplus() {
            surplus_count += 1;
        }

        writer.serialize(SweepRow {
            code: info.code,
            name: info.name,
            profiled: runner.table().contains(info.code),
            damping: scenario.damping.factor(),
            gdp: snap.gdp.value,
            inflation: snap.inflation.value,
            interest_rate: snap.interest_rate.value,
            unemployment: snap.unemployment.value,
            population: snap.population.value,
            imports: snap.trade.imports,
            exports: snap.trade.exports,
            trade_balance: snap.trade.balance,
            remittances: snap.trade.remittances,
            gdp_series_mean: snap.historical_data.gdp.mean().unwrap_or(0.0),
            projected_gdp: projected(0),
            projected_inflation: projected(1),
            projected_unemployment: projected(2),
        })?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    println!("\nSweep Summary:");
    println!("  Countries:       {}", results.len());
    println!("  Profiled:        {}", runner.table().len());
    println!("  Trade surpluses: {}", surplus_count);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
