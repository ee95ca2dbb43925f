//! Command-line front end for the sales dataset generator
//!
//! Runs a full generation into an in-memory sink and optionally exports the
//! resulting tables as JSON.
//!
//! Usage: sales-generator --seed 42 --months 6 --out dataset.json

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use sales_generator_core_rs::{
    DemandConfig, GeneratorConfig, MemorySink, Orchestrator, ProgressEvent, ProgressHandler,
    RunSummary, SeedCounts, SynthesizerConfig,
};

#[derive(Parser)]
#[command(
    name = "sales-generator",
    about = "Generate a synthetic multi-month restaurant sales dataset"
)]
struct Args {
    /// RNG seed; same seed and flags produce the identical dataset
    #[arg(long, default_value = "42")]
    seed: u64,

    /// First simulated day (YYYY-MM-DD)
    #[arg(long, default_value = "2024-01-01")]
    start_date: NaiveDate,

    /// Simulation span in 30-day months
    #[arg(long, default_value = "6")]
    months: u32,

    /// Number of stores to seed
    #[arg(long, default_value = "50")]
    stores: usize,

    /// Number of products to seed
    #[arg(long, default_value = "500")]
    products: usize,

    /// Number of customization items to seed
    #[arg(long, default_value = "200")]
    items: usize,

    /// Number of registered customers to seed
    #[arg(long, default_value = "10000")]
    customers: usize,

    /// Mean daily order count before weekday and event multipliers
    #[arg(long, default_value = "2700")]
    daily_mean: f64,

    /// Orders per mid-day commit batch
    #[arg(long, default_value = "1000")]
    batch_size: u64,

    /// Write the generated tables as JSON to this path
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Suppress progress output
    #[arg(long, short)]
    quiet: bool,
}

/// Renders progress events as human-readable lines on stderr
struct ConsoleProgress {
    quiet: bool,
}

impl ProgressHandler for ConsoleProgress {
    fn on_event(&mut self, event: &ProgressEvent) {
        if self.quiet {
            return;
        }
        match event {
            ProgressEvent::SeedingCompleted {
                stores,
                products,
                items,
                customers,
            } => {
                eprintln!(
                    "Seeded {} stores, {} products, {} items, {} customers",
                    stores, products, items, customers
                );
            }
            ProgressEvent::BatchCommitted { total_orders } => {
                eprintln!("  ... {} orders committed", total_orders);
            }
            ProgressEvent::MonthCompleted {
                year,
                month,
                total_orders,
            } => {
                eprintln!("Month {}-{:02} done ({} orders so far)", year, month, total_orders);
            }
            ProgressEvent::RunCompleted {
                total_orders,
                total_lines,
                total_customizations,
            } => {
                eprintln!(
                    "Run complete: {} orders, {} lines, {} customizations",
                    total_orders, total_lines, total_customizations
                );
            }
        }
    }
}

fn run(args: &Args) -> Result<RunSummary, String> {
    let config = GeneratorConfig {
        rng_seed: args.seed,
        start_date: args.start_date,
        months: args.months,
        seed_counts: SeedCounts {
            stores: args.stores,
            products: args.products,
            items: args.items,
            customers: args.customers,
        },
        batch_size: args.batch_size,
        customer_prob: 0.7,
        demand: DemandConfig {
            daily_mean: args.daily_mean,
            ..DemandConfig::default()
        },
        synthesizer: SynthesizerConfig::default(),
    };

    let mut orchestrator = Orchestrator::new(config).map_err(|e| e.to_string())?;
    let mut sink = MemorySink::new();
    let mut progress = ConsoleProgress { quiet: args.quiet };

    let summary = orchestrator
        .run(&mut sink, &mut progress)
        .map_err(|e| e.to_string())?;

    if let Some(path) = &args.out {
        let file = File::create(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, &sink).map_err(|e| e.to_string())?;
        if !args.quiet {
            eprintln!("Dataset written to {}", path.display());
        }
    }

    Ok(summary)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(summary) => {
            println!(
                "{} orders across {} stores",
                summary.total_orders, summary.stores
            );
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}
