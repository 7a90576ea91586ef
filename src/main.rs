//! Round-robin scheduler CLI.
//!
//! Prints a week-by-week schedule, or runs repeated trials and reports
//! how many restarts each one needed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_roundrobin::{
    RoundRobinScheduler, ScheduleOutcome, ScheduleRequest, SchedulerConfig, TrialRunner,
};

#[derive(Parser)]
#[command(name = "round-robin")]
#[command(about = "Randomized round-robin schedules for an even number of teams")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Scheduler config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Give up after this many retries (default: never)
    #[arg(long, global = true)]
    max_retries: Option<u64>,

    /// Disable the unique opponent-set preference
    #[arg(long, global = true)]
    no_unique_preference: bool,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and print a schedule.
    Schedule {
        /// Number of weeks to schedule
        #[arg(short, long)]
        weeks: usize,
        /// Team names (an even number, no duplicates)
        #[arg(required = true, num_args = 1..)]
        teams: Vec<String>,
        /// Also print each team's opponents in order
        #[arg(long)]
        by_team: bool,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run repeated trials and summarize retries.
    Stats {
        /// Number of weeks to schedule
        #[arg(short, long)]
        weeks: usize,
        /// Number of trials
        #[arg(short, long, default_value = "100")]
        trials: usize,
        /// Team names (an even number, no duplicates)
        #[arg(required = true, num_args = 1..)]
        teams: Vec<String>,
        /// Run trials in parallel
        #[arg(long)]
        parallel: bool,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_config(cli: &Cli) -> Result<SchedulerConfig> {
    let mut config = match &cli.config {
        Some(path) => SchedulerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SchedulerConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(max_retries) = cli.max_retries {
        config = config.with_max_retries(max_retries);
    }
    if cli.no_unique_preference {
        config = config.with_unique_preference(false);
    }
    Ok(config)
}

fn print_by_team(outcome: &ScheduleOutcome) {
    let ledger = &outcome.ledger;
    for participant in ledger.participants() {
        println!(
            "{} {{ {} }}",
            participant.name,
            ledger.history_names(participant.id).join(", ")
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Schedule {
            weeks,
            teams,
            by_team,
            json,
        } => {
            let request = ScheduleRequest::new(teams, weeks);
            let outcome = RoundRobinScheduler::new(config).schedule(&request)?;
            info!(retries = outcome.retries, "schedule built");

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("\nSuccess:\n");
                print!("{}", outcome.schedule);
                if by_team {
                    print_by_team(&outcome);
                }
            }
        }

        Commands::Stats {
            weeks,
            trials,
            teams,
            parallel,
            json,
        } => {
            let request = ScheduleRequest::new(teams, weeks);
            let config = if parallel {
                config.with_parallel_trials(true)
            } else {
                config
            };
            let stats = TrialRunner::new(config).run_stats(&request, trials)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{stats}");
            }
        }
    }

    Ok(())
}
