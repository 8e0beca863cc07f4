// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};
use vidshelf::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    match vidshelf::app::run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Routes the domain crate's `log` records to stderr; `RUST_LOG` applies
/// unless `--verbose` asks for everything down to debug.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
