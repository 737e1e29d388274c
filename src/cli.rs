use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "simreg")]
#[command(about = "Regression harness for FIFO hardware simulation runs", long_about = None)]
pub struct Cli {
    /// Output the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Directory where report artifacts are written
    #[arg(long, default_value = "reports")]
    pub report_dir: PathBuf,
}
