use serde::Serialize;
use strum::AsRefStr;

/// Three-way classification of a simulation run.
///
/// This is an expected-failure test: the design under verification is
/// supposed to raise a protocol violation. Its absence without a crash is
/// inconclusive, not a pass.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, AsRefStr)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Outcome {
    Passed,
    Failed,
    Warning,
}

impl Outcome {
    /// One-line human summary paired with each classification.
    pub fn summary(self) -> &'static str {
        match self {
            Outcome::Passed => "Protocol Violation Detected (Overflow caught)",
            Outcome::Failed => "CRITICAL: Simulation crashed with unexpected errors",
            Outcome::Warning => "Simulation finished but Assertion didn't trigger",
        }
    }
}
