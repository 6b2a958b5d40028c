//! Macro Scenario CLI
//!
//! Generates one snapshot for a (country, date) pair, projects the chosen
//! policy levers onto it and prints the result as tables or JSON.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

use macro_scenario::country::{catalog, CountryTable};
use macro_scenario::market;
use macro_scenario::projection::{project, PolicyLevers};
use macro_scenario::random::{seeded, RandomSource};
use macro_scenario::scenario::{
    parse_query_date, validate_query_date, GeneratorConfig, RefreshPolicy, ScenarioRunner,
};

#[derive(Debug, Parser)]
#[command(
    name = "macro_scenario",
    version,
    about = "Synthetic macroeconomic scenarios and policy projections"
)]
struct Args {
    /// ISO country code (unknown codes use the US profile)
    #[arg(short, long, default_value = "US")]
    country: String,

    /// Query date, YYYY-MM-DD (defaults to today, UTC)
    #[arg(short, long)]
    date: Option<String>,

    /// Seed for reproducible output (thread RNG when absent)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Policy interest-rate lever, 0-10 (defaults to the snapshot's current rate)
    #[arg(long)]
    interest_rate: Option<f64>,

    /// Fiscal spending lever, 0-100
    #[arg(long, default_value_t = 50.0)]
    fiscal_spending: f64,

    /// Tax-rate lever, 10-50
    #[arg(long, default_value_t = 25.0)]
    tax_rate: f64,

    /// Clamp levers into their documented ranges before projecting
    #[arg(long)]
    clamp: bool,

    /// Label series with the twelve months ending at the query date
    #[arg(long)]
    trailing_months: bool,

    /// Load country profiles from a CSV file instead of the built-in table
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Include the synthetic stock-market view
    #[arg(long)]
    market: bool,

    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let now = Utc::now();
    let query_date = match &args.date {
        Some(input) => validate_query_date(parse_query_date(input)?)?,
        None => now.date_naive(),
    };

    let table = match &args.profiles {
        Some(path) => CountryTable::from_csv_path(path)
            .with_context(|| format!("loading profiles from {}", path.display()))?,
        None => CountryTable::builtin(),
    };

    let config = if args.trailing_months {
        GeneratorConfig::trailing()
    } else {
        GeneratorConfig::default()
    };
    let runner = ScenarioRunner::with_table(table).with_config(config);

    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(seeded(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let scenario = runner.run(&args.country, query_date, now, &mut *rng);
    let snapshot = &scenario.snapshot;

    let mut levers = PolicyLevers::neutral_for(snapshot);
    if let Some(rate) = args.interest_rate {
        levers.interest_rate = rate;
    }
    levers.fiscal_spending = args.fiscal_spending;
    levers.tax_rate = args.tax_rate;
    if args.clamp {
        levers = levers.clamped();
    } else if !levers.in_range() {
        log::warn!("levers outside documented ranges: {:?}", levers);
    }

    let effects = project(snapshot, &levers);

    let market_view = if args.market {
        let historical = scenario.is_historical();
        let quotes = market::generate_quotes(&args.country, historical, &mut *rng);
        let intraday = market::generate_intraday(historical, &mut *rng);
        let summary = market::summarize(&intraday, &mut *rng);
        Some((quotes, intraday, summary))
    } else {
        None
    };

    if args.json {
        let mut output = serde_json::json!({
            "country": args.country.to_ascii_uppercase(),
            "date": query_date,
            "damping": scenario.damping,
            "snapshot": snapshot,
            "levers": levers,
            "effects": effects,
        });
        if let Some((quotes, intraday, summary)) = &market_view {
            output["market"] = serde_json::json!({
                "quotes": quotes,
                "intraday": intraday,
                "summary": summary,
            });
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let display_name = catalog::find(&args.country)
        .map(|c| format!("{} {}", c.flag, c.name))
        .unwrap_or_else(|| args.country.to_ascii_uppercase());
    let refresh = RefreshPolicy::for_query(query_date, now);

    println!("Macro Scenario v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");
    println!("Country: {}", display_name);
    if !runner.table().contains(&args.country) {
        println!("  (no dedicated profile, using {} baseline)", runner.table().default_code());
    }
    println!("Date:    {} ({})", query_date, if refresh.is_live() { "live" } else { "historical" });
    println!("Damping: {:.4}", scenario.damping.factor());
    if let Some(interval) = refresh.snapshot {
        println!("Refresh: every {}s", interval.as_secs());
    }
    println!();

    println!("{:<14} {:>12} {:>9} {:>8} {:>9}", "Indicator", "Value", "Change", "Trend", "Unit");
    println!("{}", "-".repeat(56));
    let mut rows = snapshot.headline().to_vec();
    rows.push(("Population", &snapshot.population));
    for (name, ind) in rows {
        println!(
            "{:<14} {:>12.3} {:>+8.2}% {:>8} {:>9}",
            name,
            ind.value,
            ind.change,
            ind.trend.as_str(),
            ind.unit.as_str()
        );
    }

    let trade = &snapshot.trade;
    println!("\nTrade (billions USD):");
    println!("  Imports:     {:>10.2}", trade.imports);
    println!("  Exports:     {:>10.2}", trade.exports);
    let direction = if trade.is_surplus() { "surplus" } else { "deficit" };
    println!("  Balance:     {:>+10.2} ({})", trade.balance, direction);
    println!("  Remittances: {:>10.2}", trade.remittances);

    println!("\nHistorical series:");
    print!("{:<14}", "");
    for label in snapshot.historical_data.gdp.labels() {
        print!(" {:>7}", label);
    }
    println!();
    for (name, series) in snapshot.series() {
        print!("{:<14}", name);
        for value in series.values() {
            print!(" {:>7.2}", value);
        }
        println!();
    }

    println!(
        "\nPolicy levers: rate {:.2}%, spending {:.0}, tax {:.1}%",
        levers.interest_rate, levers.fiscal_spending, levers.tax_rate
    );
    println!(
        "{:<16} {:>10} {:>10} {:>9} {:>9}",
        "Effect", "Current", "Projected", "Delta", "Impact"
    );
    println!("{}", "-".repeat(58));
    for effect in &effects {
        println!(
            "{:<16} {:>10.3} {:>10.3} {:>+9.3} {:>9}",
            effect.indicator_name,
            effect.current_value,
            effect.projected_value,
            effect.delta(),
            effect.impact.as_str()
        );
    }

    if let Some((quotes, _, summary)) = &market_view {
        println!("\nMarket:");
        println!(
            "  Index {:.2}, daily change {:+.2}, volume {:.0}M",
            summary.total_value,
            summary.daily_change,
            summary.volume / 1e6
        );
        for q in quotes {
            println!(
                "  {:<9} {:<24} {:>9.2} {:>+7.2} ({:+.2}%)",
                q.symbol, q.name, q.price, q.change, q.change_percent
            );
        }
    }

    Ok(())
}
