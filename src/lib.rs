#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod classify;
pub mod cli;
pub mod models;
pub mod output;
pub mod reporter;
pub mod sim;

use anyhow::Result;
use jiff::Zoned;

use cli::Cli;
use models::{Outcome, Report};
use output::Output;
use sim::SimRun;

/// Terminal state of a run, mapped to the process exit code in `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Finished(Outcome),
    ToolMissing,
}

impl RunStatus {
    /// Only a detected protocol violation counts as success.
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Finished(Outcome::Passed) => 0,
            _ => 1,
        }
    }
}

/// Runs the whole pipeline once: launch the simulator, classify its
/// captured output, persist the report, print the verdict.
///
/// On tool-not-found no artifact is written; the run ends with a distinct
/// console message instead of a report.
pub fn run(cli: Cli) -> Result<RunStatus> {
    let output = Output::new(cli.json);
    let started_at = Zoned::now();
    let log_path = reporter::artifact_path(&cli.report_dir, &started_at);

    output.start_banner(&log_path)?;

    match sim::run_simulator()? {
        SimRun::ToolNotFound => {
            output.tool_missing()?;
            Ok(RunStatus::ToolMissing)
        }
        SimRun::Completed(sim_output) => {
            let outcome = classify::classify(&sim_output.combined);
            let report = Report::new(started_at, sim_output, outcome);
            reporter::write_report(&log_path, &report)?;
            output.run_summary(&report, &log_path)?;
            Ok(RunStatus::Finished(outcome))
        }
    }
}
