//! roster — solve team-assignment rosters from the command line.
//!
//! Loads one or more TOML roster datasets, finds the best worker-to-manager
//! assignment for each, and (for multiple datasets sharing a manager slate)
//! reports each manager's combined cross-roster team performance.

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use roster_core::config::{RosterFile, SearchConfig};
use roster_core::errors::RosterErrorCode;
use roster_core::types::PairedWorker;
use roster_engine::{cross_roster_teams, team_performance, AssignmentOptimizer};

use report::{ConsoleReporter, JsonReporter, Reporter, RosterReport, RunReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Console,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "roster", about = "Team-assignment optimizer")]
struct Cli {
    /// Roster dataset files (TOML).
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Console)]
    format: Format,

    /// Score candidates on the rayon pool.
    #[arg(long)]
    parallel: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            error!("{message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let config = SearchConfig {
        parallel: Some(cli.parallel),
        max_roster_size: None,
    };
    let optimizer = AssignmentOptimizer::new(config);

    let mut solved = Vec::new();
    let mut rosters = Vec::new();

    for path in &cli.files {
        let file = RosterFile::load(path)
            .map_err(|e| format!("[{}] {e}", e.error_code()))?;
        let name = file.name.clone();
        let roster = file.into_roster();

        let assignment = optimizer
            .find_best(&roster)
            .map_err(|e| format!("[{}] {name}: {e}", e.error_code()))?;

        let manager_performance = assignment
            .worker_for_manager
            .iter()
            .enumerate()
            .map(|(manager, &worker)| {
                let profile = &roster.managers[manager];
                let paired =
                    PairedWorker::new(roster.workers[worker], profile.interaction[worker]);
                team_performance(profile.skill, &[paired])
            })
            .collect();

        rosters.push(RosterReport {
            name,
            assignment: assignment.clone(),
            manager_performance,
        });
        solved.push((roster, assignment));
    }

    let combined = if solved.len() > 1 {
        Some(
            cross_roster_teams(&solved)
                .map_err(|e| format!("[{}] {e}", e.error_code()))?,
        )
    } else {
        None
    };

    let report = RunReport { rosters, combined };
    let reporter: &dyn Reporter = match cli.format {
        Format::Console => &ConsoleReporter,
        Format::Json => &JsonReporter,
    };
    reporter.generate(&report)
}
