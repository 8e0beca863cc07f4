// src/app.rs
use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::TimeDelta;
use vidshelf_domain::codec::string_to_number_decoder;
use vidshelf_domain::range::duration;
use vidshelf_domain::range::{Range, size};
use vidshelf_domain::{Decoder, SliderConfig, VideoFilters};
use vidshelf_shared_kernel::{ErrorContext, VidshelfError};

use crate::cli::{Args, Command, RangeKind};

/// Executes one command and returns what should be printed.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or the input is malformed.
pub fn run(args: &Args) -> Result<String> {
    let config = load_config(args.config.as_deref())?;
    let output = match &args.command {
        Command::Encode { kind, min, max } => encode(*kind, min, max.as_deref())?,
        Command::Decode { kind, text } => decode(*kind, text)?,
        Command::Slider { kind, text } => slider(*kind, text, &config)?,
        Command::Query { query } => VideoFilters::from_query_string(query).to_query_string(),
    };
    Ok(output)
}

/// Loads the slider configuration, or the defaults when no file is given.
///
/// # Errors
/// Returns an error if the file cannot be read or does not hold a valid configuration.
pub fn load_config(path: Option<&Path>) -> vidshelf_shared_kernel::Result<SliderConfig> {
    let Some(path) = path else {
        return Ok(SliderConfig::default());
    };
    let text = fs::read_to_string(path).map_err(|source| VidshelfError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    SliderConfig::from_json_str(&text)
        .with_context(|| format!("loading '{}'", path.display()))
}

fn encode(kind: RangeKind, min: &str, max: Option<&str>) -> vidshelf_shared_kernel::Result<String> {
    match kind {
        RangeKind::Size => {
            let bound = string_to_number_decoder::<u64>();
            let range = Range::new(
                bound.decode(min).context("lower bound")?,
                max.map(|m| bound.decode(m))
                    .transpose()
                    .context("upper bound")?,
            );
            Ok(size::encode(&range))
        }
        RangeKind::Duration => {
            let bound = |text: &str| {
                string_to_number_decoder::<f64>()
                    .decode(text)
                    .and_then(duration::reject_negative)
                    .map(duration::from_minutes)
            };
            let range: Range<TimeDelta> = Range::new(
                bound(min).context("lower bound")?,
                max.map(bound).transpose().context("upper bound")?,
            );
            Ok(duration::encode(&range))
        }
    }
}

fn decode(kind: RangeKind, text: &str) -> Result<String> {
    let json = match kind {
        RangeKind::Size => {
            let range = size::decode(text).context("decoding size range")?;
            serde_json::to_string(&range)?
        }
        RangeKind::Duration => {
            let range = duration::decode(text).context("decoding duration range")?;
            serde_json::to_string(&range.map(duration::as_minutes))?
        }
    };
    Ok(json)
}

fn slider(kind: RangeKind, text: &str, config: &SliderConfig) -> Result<String> {
    let json = match kind {
        RangeKind::Size => {
            let range = size::decode(text).context("decoding size range")?;
            serde_json::to_string(&size::to_slider(&range, config.size_maximum))?
        }
        RangeKind::Duration => {
            let range = duration::decode(text).context("decoding duration range")?;
            serde_json::to_string(&duration::to_slider(&range, config.duration_maximum()))?
        }
    };
    Ok(json)
}
