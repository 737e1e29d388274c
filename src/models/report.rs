use std::fmt;

use jiff::Zoned;

use super::Outcome;
use crate::sim::SimOutput;

pub const REPORT_TITLE: &str = "FIFO DESIGN VERIFICATION REPORT";

const BANNER_WIDTH: usize = 60;

/// Write-once report document for a single run.
///
/// The timestamp is captured once at run start and shared between the
/// artifact filename and the report body, so the two can never disagree.
#[derive(Debug, Clone)]
pub struct Report {
    generated_at: Zoned,
    log: String,
    exit_code: Option<i32>,
    outcome: Outcome,
}

impl Report {
    pub fn new(generated_at: Zoned, output: SimOutput, outcome: Outcome) -> Self {
        Self {
            generated_at,
            log: output.combined,
            exit_code: output.exit_code,
            outcome,
        }
    }

    pub fn generated_at(&self) -> &Zoned {
        &self.generated_at
    }

    /// The raw captured simulator text, verbatim.
    pub fn log(&self) -> &str {
        &self.log
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = "=".repeat(BANNER_WIDTH);

        writeln!(f, "{banner}")?;
        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f, "Date: {}", self.generated_at.strftime("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "{banner}")?;
        writeln!(f)?;

        writeln!(f, "--- SIMULATION LOG ---")?;
        f.write_str(&self.log)?;

        writeln!(f)?;
        writeln!(f, "{banner}")?;
        writeln!(f, "TEST STATUS: {}", self.outcome.as_ref())?;
        writeln!(f, "SUMMARY:     {}", self.outcome.summary())?;
        writeln!(f, "{banner}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_at(timestamp: &str, log: &str, outcome: Outcome) -> Report {
        let generated_at: Zoned = timestamp.parse().expect("valid zoned timestamp");
        let output = SimOutput {
            exit_code: Some(0),
            combined: log.to_string(),
        };
        Report::new(generated_at, output, outcome)
    }

    #[test]
    fn test_render_layout() {
        let report = report_at(
            "2025-03-01T09:30:00[UTC]",
            "run 1\nVIOLATION detected\n",
            Outcome::Passed,
        );
        let doc = report.to_string();

        assert!(doc.starts_with(&format!("{}\n{}\n", "=".repeat(60), REPORT_TITLE)));
        assert!(doc.contains("Date: 2025-03-01 09:30:00"));
        assert!(doc.contains("--- SIMULATION LOG ---\nrun 1\nVIOLATION detected\n"));
        assert!(doc.contains("TEST STATUS: PASSED"));
        assert!(doc.contains("SUMMARY:     Protocol Violation Detected (Overflow caught)"));
        assert!(doc.ends_with(&format!("{}\n", "=".repeat(60))));
    }

    #[test]
    fn test_log_embedded_verbatim_exactly_once() {
        let log = "# 500ns: assertion fired\nVIOLATION at t=500ns\n";
        let report = report_at("2025-03-01T09:30:00[UTC]", log, Outcome::Passed);
        let doc = report.to_string();

        assert_eq!(doc.matches(log).count(), 1);

        // The log section is delimited by its header and the closing banner.
        let section = doc
            .split("--- SIMULATION LOG ---\n")
            .nth(1)
            .and_then(|rest| rest.split(&format!("\n{}\nTEST STATUS:", "=".repeat(60))).next())
            .expect("log section present");
        assert_eq!(section, log);
    }

    #[test]
    fn test_same_log_differs_only_in_timestamp() {
        let log = "Simulation complete. 0 errors.\n";
        let a = report_at("2025-03-01T09:30:00[UTC]", log, Outcome::Warning).to_string();
        let b = report_at("2025-03-02T18:45:59[UTC]", log, Outcome::Warning).to_string();

        let strip_date = |doc: &str| {
            doc.lines()
                .filter(|line| !line.starts_with("Date: "))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_ne!(a, b);
        assert_eq!(strip_date(&a), strip_date(&b));
    }
}
