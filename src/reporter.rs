use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use jiff::Zoned;

use crate::models::Report;

/// Artifact path for a run that started at the given instant:
/// `<dir>/regression_<YYYYMMDD_HHMMSS>.log`. Two runs starting within the
/// same clock second share a path and the later one wins.
pub fn artifact_path(report_dir: &Path, started_at: &Zoned) -> PathBuf {
    report_dir.join(format!(
        "regression_{}.log",
        started_at.strftime("%Y%m%d_%H%M%S")
    ))
}

/// Persists the rendered report at `path`, creating the report directory
/// if needed. The write is whole-document and atomic; any failure
/// propagates rather than masking the run as successful.
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create report directory: {}", dir.display()))?;
    }
    atomic_write(path, report.to_string().as_bytes())
}

/// Atomically write content to a file using a temporary file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let temp = path.with_extension("log.tmp");
    let mut file = File::create(&temp)
        .with_context(|| format!("Failed to create temporary file: {}", temp.display()))?;
    file.lock_exclusive()
        .context("Failed to acquire file lock")?;
    file.write_all(content)
        .context("Failed to write report content")?;
    file.sync_all().context("Failed to sync report file")?;
    file.unlock().context("Failed to unlock report file")?;
    fs::rename(&temp, path).with_context(|| format!("Failed to rename to {}", path.display()))?;
    Ok(())
}
