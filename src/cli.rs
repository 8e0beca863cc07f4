// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "vidshelf", version, about = "Encode and decode video search range parameters")]
pub struct Args {
    /// Log parameter fallbacks and other debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Slider configuration file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Encode a range as a query parameter value
    Encode {
        #[arg(long, value_enum)]
        kind: RangeKind,
        /// Lower bound (MiB for sizes, minutes for durations)
        #[arg(long)]
        min: String,
        /// Upper bound; omit for an open range
        #[arg(long)]
        max: Option<String>,
    },
    /// Decode a query parameter value and print it as JSON
    Decode {
        #[arg(long, value_enum)]
        kind: RangeKind,
        text: String,
    },
    /// Print the slider positions for a query parameter value
    Slider {
        #[arg(long, value_enum)]
        kind: RangeKind,
        text: String,
    },
    /// Normalize a search page query string
    Query { query: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RangeKind {
    Size,
    Duration,
}
