mod report;
mod settings;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use dissection::api::{draw_puzzle, plan, solve, valid_pairs, CalloutStyle, ReplayToken};
use dissection::solver::check;
use dissection::{InsideState, OutsideState};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use settings::Settings;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Dissection solver for the Verity encounter")]
struct Cmd {
    /// Optional JSON settings file, e.g. {"abbreviated_callouts": true}
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use one-letter callouts (overrides the settings file)
    #[arg(long, global = true)]
    abbreviated: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one puzzle and print the callouts
    Solve {
        /// Inside symbols Left→Right, e.g. CTS
        #[arg(long)]
        inside: InsideState,
        /// Outside solids Left→Right, e.g. CS,TT,CS
        #[arg(long)]
        outside: OutsideState,
        /// Print a JSON document instead of text
        #[arg(long)]
        json: bool,
        /// Also write the JSON document to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Check a puzzle without solving it
    Check {
        #[arg(long)]
        inside: InsideState,
        #[arg(long)]
        outside: OutsideState,
    },
    /// Draw a reproducible random puzzle and solve it
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        json: bool,
    },
    /// Solve every valid puzzle and report the step histogram
    Sweep,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let settings = Settings::resolve(cmd.config.as_deref(), cmd.abbreviated)?;
    let style = settings.style();
    match cmd.action {
        Action::Solve {
            inside,
            outside,
            json,
            out,
        } => run_solve(inside, outside, style, json, out),
        Action::Check { inside, outside } => run_check(inside, outside),
        Action::Random { seed, index, json } => run_random(seed, index, style, json),
        Action::Sweep => run_sweep(),
    }
}

fn run_solve(
    inside: InsideState,
    outside: OutsideState,
    style: CalloutStyle,
    json: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    tracing::info!(%inside, %outside, "solve");
    let outcome = plan(inside, outside)?;
    let doc = report::to_json(inside, outside, &outcome, style);
    if let Some(path) = &out {
        report::write_json(path, &doc)?;
        tracing::info!(out = %path.display(), "wrote solution");
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        for line in report::render(&outcome, style) {
            println!("{line}");
        }
    }
    Ok(())
}

fn run_check(inside: InsideState, outside: OutsideState) -> Result<()> {
    match check(inside, outside) {
        Ok(()) => {
            println!("valid");
            Ok(())
        }
        Err(reason) => bail!("invalid state: {reason}"),
    }
}

fn run_random(seed: u64, index: u64, style: CalloutStyle, json: bool) -> Result<()> {
    let sample = draw_puzzle(ReplayToken { seed, index });
    tracing::info!(seed, index, "random");
    if json {
        let outcome = plan(sample.inside, sample.outside)?;
        let doc = report::to_json(sample.inside, sample.outside, &outcome, style);
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }
    println!("inside={} outside={}", sample.inside, sample.outside);
    run_solve(sample.inside, sample.outside, style, false, None)
}

fn run_sweep() -> Result<()> {
    let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
    let mut pairs = 0usize;
    for (inside, outside) in valid_pairs() {
        let steps = solve(inside, outside)?;
        *histogram.entry(steps.len()).or_default() += 1;
        pairs += 1;
    }
    tracing::info!(pairs, "sweep");
    println!("pairs={pairs}");
    for (steps, count) in histogram {
        println!("steps={steps} count={count}");
    }
    Ok(())
}
