//! dining — run the dining-table simulation from the command line.
//!
//! Writes the per-tick log to `output.txt` (or `--log`), optionally CSV files
//! to `--csv-dir`, and prints the end-of-run totals to stdout.  Diagnostics
//! go to stderr through `tracing`; set `RUST_LOG` or pass `--verbose`.
//!
//! ```text
//! dining --ticks 5000 --policy random-drop --agent-states --seed 7
//! dining --config table.json --csv-dir ./out
//! ```

mod cli;

use std::fs;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dp_core::SimConfig;
use dp_output::{CsvWriter, MultiWriter, SimOutputObserver, TextLogWriter, write_summary};
use dp_sim::SimBuilder;

use cli::Args;

fn load_config(args: &Args) -> Result<SimConfig> {
    let base = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    Ok(args.apply(base))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config(&args)?;
    let report = config.report;
    let mut sim = SimBuilder::seeded(config).build().context("invalid configuration")?;

    let mut writers = MultiWriter::new();
    writers.push(
        TextLogWriter::create(&args.log)
            .with_context(|| format!("creating log {}", args.log.display()))?,
    );
    if let Some(dir) = &args.csv_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        writers.push(CsvWriter::new(dir).with_context(|| format!("opening CSV files in {}", dir.display()))?);
    }
    info!(log = %args.log.display(), csv = ?args.csv_dir, "writing tick log");

    let mut observer = SimOutputObserver::new(writers, report);
    sim.run(&mut observer).context("simulation aborted")?;

    write_summary(&mut io::stdout().lock(), sim.clock.elapsed(), &sim.stats)?;
    Ok(())
}
