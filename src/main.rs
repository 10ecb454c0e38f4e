mod audit;
mod config;
mod error;
mod log;
mod runner;

use clap::Parser;
use std::path::PathBuf;

use crate::audit::Audit;
use crate::config::Config;
use crate::log::Reporter;
use crate::runner::SlitherCommand;

/// Runs slither against a contract and saves the printed report.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file overriding target_file, selectors and output_path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the analyzer command line before running it
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args, reporter: &Reporter) -> std::io::Result<Config> {
    match &args.config {
        Some(path) => {
            reporter.log(format!("loading config from {}", path.display()));
            return Config::from_file(path);
        }
        None => Ok(Config::default()),
    }
}

fn main() {
    let args = Args::parse();
    let reporter = Reporter::new(args.verbose);

    let config = match load_config(&args, &reporter) {
        Ok(c) => c,
        Err(e) => {
            reporter.error(format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let slither = SlitherCommand::new(&config);
    reporter.log(format!("running {}", slither.command_line()));

    let audit = Audit::new(&slither, &config.output_path);
    match audit.run() {
        Ok(path) => reporter.success(format!("Output saved to file {}", path.display())),
        Err(e) => {
            reporter.error(e.to_string());
            reporter.log(format!("{} left untouched", audit.output_path().display()));
            std::process::exit(1);
        }
    }
}
