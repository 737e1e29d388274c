use std::io;
use std::process::Command;

use anyhow::{Context, Result};

/// The simulator executable, resolved through `PATH`.
pub const SIM_TOOL: &str = "vsim";

/// The simulation script driven inside the simulator.
pub const SIM_SCRIPT: &str = "run.do";

/// Captured output of a simulator run that made it to termination.
#[derive(Debug, Clone)]
pub struct SimOutput {
    /// Exit code of the simulator process; `None` when killed by a signal.
    pub exit_code: Option<i32>,
    /// Combined stdout followed by stderr, not interleaved chronologically.
    pub combined: String,
}

/// Result of attempting to launch the simulator.
///
/// A missing executable is an expected condition that the caller handles
/// differently from a run that produced output, so it is a variant here
/// rather than an error.
#[derive(Debug)]
pub enum SimRun {
    Completed(SimOutput),
    ToolNotFound,
}

/// Launches the simulator in batch mode on the fixed script and blocks
/// until it exits. No timeout: classification needs the complete output,
/// so there is nothing useful to do before the process terminates.
pub fn run_simulator() -> Result<SimRun> {
    let script_cmd = format!("do {SIM_SCRIPT}");
    match Command::new(SIM_TOOL).args(["-c", "-do", &script_cmd]).output() {
        Ok(output) => {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            Ok(SimRun::Completed(SimOutput {
                exit_code: output.status.code(),
                combined,
            }))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(SimRun::ToolNotFound),
        Err(err) => {
            Err(err).with_context(|| format!("Failed to launch simulator '{SIM_TOOL}'"))
        }
    }
}
