use std::path::Path;

use anyhow::Result;
use console::{Term, style};
use serde::Serialize;

use crate::models::{Outcome, Report};
use crate::sim::SIM_TOOL;

pub struct Output {
    term: Term,
    json: bool,
}

#[derive(Serialize)]
struct RunSummary<'a> {
    status: Outcome,
    summary: &'a str,
    log_file: String,
    exit_code: Option<i32>,
}

#[derive(Serialize)]
struct ToolMissing<'a> {
    status: &'a str,
    tool: &'a str,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    /// Progress banner printed before the simulator is launched, including
    /// the artifact path this run will write to.
    pub fn start_banner(&self, log_path: &Path) -> Result<()> {
        if self.json {
            return Ok(());
        }

        let rule = "-".repeat(50);
        self.term.write_line(&rule)?;
        self.term.write_line(&format!(
            "{} FIFO Regression Test...",
            style("STARTING:").cyan().bold()
        ))?;
        self.term
            .write_line(&format!("LOG FILE: {}", style(log_path.display()).cyan()))?;
        self.term.write_line(&rule)?;
        Ok(())
    }

    /// The one-line verdict printed after classification.
    pub fn run_summary(&self, report: &Report, log_path: &Path) -> Result<()> {
        if self.json {
            return self.print_json(&RunSummary {
                status: report.outcome(),
                summary: report.outcome().summary(),
                log_file: log_path.display().to_string(),
                exit_code: report.exit_code(),
            });
        }

        let tag = match report.outcome() {
            Outcome::Passed => style("[PASS]").green().bold(),
            Outcome::Failed => style("[FAIL]").red().bold(),
            Outcome::Warning => style("[WARN]").yellow().bold(),
        };
        self.term
            .write_line(&format!("{tag} {}", report.outcome().summary()))?;
        Ok(())
    }

    pub fn tool_missing(&self) -> Result<()> {
        if self.json {
            return self.print_json(&ToolMissing {
                status: "TOOL_NOT_FOUND",
                tool: SIM_TOOL,
            });
        }

        self.term.write_line(&format!(
            "{} Simulator '{SIM_TOOL}' not found on PATH.",
            style("[ERROR]").red().bold()
        ))?;
        Ok(())
    }
}
