//! `tour-search`: solve a TSP instance with A* and the cheapest-edge heuristic.
//!
//! Reads the instance from `--input` (or standard input), prints the report
//! line to standard output, and writes it to `--output`. Logging goes to
//! standard error and is controlled by `RUST_LOG`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tsp_harness::config::{RunConfig, StartNode, DEFAULT_OUTPUT};
use tsp_harness::runner::execute;

#[derive(Parser)]
#[command(author, version, about = "Find a minimum-cost tour with A* search", long_about = None)]
struct Cli {
    /// Instance file (first line N, then N comma-separated rows). Reads stdin when omitted.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Result file for the report line
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Also write a JSON summary here
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Start node; chosen uniformly at random when omitted
    #[arg(short, long, conflicts_with = "seed")]
    start: Option<usize>,

    /// Seed for the random start node
    #[arg(long)]
    seed: Option<u64>,

    /// Check the tour cost against brute-force enumeration (small instances only)
    #[arg(long)]
    verify: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        let start = match cli.start {
            Some(node) => StartNode::Fixed(node),
            None => StartNode::Random { seed: cli.seed },
        };
        Self {
            input: cli.input,
            output: cli.output,
            json: cli.json,
            start,
            verify: cli.verify,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from(Cli::parse());
    let (_, report) = execute(&config).with_context(|| {
        format!(
            "tour search failed (output {})",
            config.output.display()
        )
    })?;
    println!("{report}");
    Ok(())
}
