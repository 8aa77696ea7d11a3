//! Page replacement simulator CLI.
//!
//! This binary is the front end to `pagesim-core`. It performs:
//! 1. **Run:** Reset a simulation from flags and/or a JSON config, auto-run it
//!    with a step interval, and print an event line per access plus the final
//!    frames, page table and statistics.
//! 2. **Compare:** Run FIFO, LRU and OPT over the same input and tabulate faults.
//!
//! Input parsing, random sequence generation and pacing live here; the engine
//! only sees a validated frame count, reference string and policy.

mod parse;
mod render;

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io, process};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use pagesim_core::common::ConfigError;
use pagesim_core::config::ModifiedBitsMode;
use pagesim_core::memory::PageTable;
use pagesim_core::sim::{AutoRunner, RunEnd, compare, generator};
use pagesim_core::{PageNumber, PolicyKind, RunStats, SimConfig, SimError, Simulator, StepOutcome};

use crate::parse::{ParseError, parse_reference};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Virtual memory page replacement simulator (FIFO, LRU, OPT)",
    long_about = "Step through a page reference string and watch hits, faults and evictions.\n\nExamples:\n  pagesim run -f 3 -s \"7,0,1,2,0,3,0,4\" -p lru\n  pagesim run --random 30 --seed 7 -p opt --interval-ms 0\n  pagesim compare -f 3 -s \"1 2 3 4 1 2 5 1 2 3 4 5\""
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Inputs shared by every subcommand.
#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// JSON configuration file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of physical frames.
    #[arg(short, long)]
    frames: Option<usize>,

    /// Reference string, e.g. "1,2,3,4" or "1 2 3 4".
    #[arg(short, long, conflicts_with = "random")]
    sequence: Option<String>,

    /// Generate a random reference string of this length (1-100).
    #[arg(long, value_name = "LEN")]
    random: Option<usize>,

    /// Seed for random generation and the modified bit.
    #[arg(long)]
    seed: Option<u64>,

    /// Print machine-readable JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Auto-run one policy over the reference string.
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Replacement policy: fifo, lru or opt.
        #[arg(short, long)]
        policy: Option<PolicyKind>,

        /// Delay between steps in milliseconds.
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Stop after this many steps.
        #[arg(long)]
        max_steps: Option<usize>,

        /// Never set the modified bit (fully reproducible output).
        #[arg(long)]
        deterministic: bool,
    },

    /// Run FIFO, LRU and OPT over the same input.
    Compare {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Errors surfaced to the user.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("bad reference string: {0}")]
    Parse(#[from] ParseError),

    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("could not encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON document printed by `run --json`.
#[derive(Serialize)]
struct RunReport<'a> {
    policy: PolicyKind,
    frames: usize,
    reference: &'a [PageNumber],
    outcomes: &'a [StepOutcome],
    cancelled: bool,
    stats: RunStats,
    final_frames: &'a [Option<PageNumber>],
    page_table: &'a PageTable,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Commands::Run {
            input,
            policy,
            interval_ms,
            max_steps,
            deterministic,
        }) => cmd_run(&input, policy, interval_ms, max_steps, deterministic),
        Some(Commands::Compare { input }) => cmd_compare(&input),
        None => {
            eprintln!("Page replacement simulator - pass a subcommand");
            eprintln!();
            eprintln!("  pagesim run -f 3 -s \"1,2,3,4\" -p lru   Auto-run one policy");
            eprintln!("  pagesim compare --random 20            Compare FIFO, LRU and OPT");
            eprintln!();
            eprintln!("  pagesim --help  for full options");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("[!] {e}");
        process::exit(1);
    }
}

/// Installs the `tracing` subscriber on stderr.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Builds the run configuration: file (or defaults), then flag overrides.
fn resolve_config(input: &InputArgs) -> Result<SimConfig, CliError> {
    let mut config = match &input.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };

    if let Some(frames) = input.frames {
        config.frames = frames;
    }
    if let Some(seed) = input.seed {
        config.generator.seed = Some(seed);
        config.modified_bits.seed = Some(seed);
    }
    if let Some(sequence) = &input.sequence {
        config.reference = parse_reference(sequence)?;
    } else if let Some(length) = input.random {
        config.generator.length = length;
        config.reference = generator::from_config(&config.generator, config.frames);
    }

    config.validate()?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<SimConfig, CliError> {
    let json = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(SimConfig::from_json(&json)?)
}

/// Resets a simulator, auto-runs it, and prints events, final state and statistics.
fn cmd_run(
    input: &InputArgs,
    policy: Option<PolicyKind>,
    interval_ms: Option<u64>,
    max_steps: Option<usize>,
    deterministic: bool,
) -> Result<(), CliError> {
    let mut config = resolve_config(input)?;
    if let Some(policy) = policy {
        config.policy = policy;
    }
    if let Some(ms) = interval_ms {
        config.auto_run.interval_ms = ms;
    }
    if deterministic {
        config.modified_bits.mode = ModifiedBitsMode::Never;
    }

    let mut sim = Simulator::from_config(&config)?;
    let runner = AutoRunner::from_config(&config.auto_run);
    let token = runner.token();
    let limit = max_steps.unwrap_or(usize::MAX);
    if limit == 0 {
        token.cancel();
    }

    if !input.json {
        print_header(&config, Some(runner.interval()));
    }

    let mut outcomes = Vec::with_capacity(config.reference.len());
    let summary = runner.run(&mut sim, |outcome| {
        if !input.json {
            println!("{outcome}");
        }
        outcomes.push(*outcome);
        if outcomes.len() >= limit {
            token.cancel();
        }
    })?;
    let cancelled = summary.end == RunEnd::Cancelled;
    let state = sim.state();

    if input.json {
        let report = RunReport {
            policy: config.policy,
            frames: config.frames,
            reference: state.reference(),
            outcomes: &outcomes,
            cancelled,
            stats: sim.stats(),
            final_frames: state.frames(),
            page_table: state.page_table(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if cancelled {
        println!(
            "\n[*] Stopped after {} of {} references",
            summary.steps,
            state.reference().len()
        );
    } else {
        println!("\n[*] End of reference string");
    }

    println!("\nPhysical memory: {}", render::frame_strip(state));
    print!("{}", render::frame_table(state));
    println!("\nPage table:");
    print!("{}", render::page_table(state));
    if let Some(aux) = render::auxiliary(state) {
        println!("\n{aux}");
    }
    println!();
    sim.stats().print();
    Ok(())
}

fn print_header(config: &SimConfig, interval: Option<Duration>) {
    let reference = config
        .reference
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!("Configuration:");
    match interval {
        Some(interval) => println!(
            "  Frames: {}  Policy: {}  Interval: {} ms",
            config.frames,
            config.policy,
            interval.as_millis()
        ),
        None => println!("  Frames: {}", config.frames),
    }
    println!("  Reference ({}): [{}]", config.reference.len(), reference);
    println!();
}

/// Runs all three policies and prints the comparison.
fn cmd_compare(input: &InputArgs) -> Result<(), CliError> {
    let config = resolve_config(input)?;
    let reports = compare::compare_policies(config.frames, &config.reference)?;

    if input.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    print_header(&config, None);
    print!("{}", render::comparison(&reports));
    if let Some(best) = compare::fewest_faults(&reports) {
        println!("\n[*] Fewest faults: {} ({})", best.policy, best.stats.page_faults);
    }
    Ok(())
}
