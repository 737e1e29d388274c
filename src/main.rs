use clap::Parser;

use simreg::cli::Cli;

fn main() {
    let cli = Cli::parse();
    match simreg::run(cli) {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}
