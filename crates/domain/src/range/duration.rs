// crates/domain/src/range/duration.rs
//! Duration ranges, carried on the wire as minutes.
//!
//! Minutes are `f64`, so fractional values survive the slider and the query
//! string alike. Durations are kept to whole milliseconds.

use chrono::TimeDelta;
use vidshelf_shared_kernel::{CodecError, CodecResult};

use super::{Range, RangeDecoder, RangeEncoder, at_or_above, range_decoder, range_encoder};
use crate::codec::{
    DecodeMap, Decoder, EncodeMap, Encoder, StringToNumberDecoder, decode_map, encode_map,
    string_to_number_decoder,
};

pub type DurationRange = Range<TimeDelta>;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

pub fn as_minutes(duration: TimeDelta) -> f64 {
    duration.num_milliseconds() as f64 / MILLIS_PER_MINUTE
}

/// Rounds to the nearest millisecond, saturating at the representable bounds.
pub fn from_minutes(minutes: f64) -> TimeDelta {
    let millis = (minutes * MILLIS_PER_MINUTE).round();
    // `as` saturates; only i64::MIN falls outside TimeDelta
    match TimeDelta::try_milliseconds(millis as i64) {
        Some(delta) => delta,
        None if millis.is_sign_negative() => TimeDelta::MIN,
        None => TimeDelta::MAX,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MinutesEncoder;

impl Encoder<TimeDelta> for MinutesEncoder {
    type Wire = f64;

    fn encode(&self, value: &TimeDelta) -> f64 {
        as_minutes(*value)
    }
}

/// Minutes to duration; fails only for NaN and infinities.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinutesDecoder;

impl Decoder<f64> for MinutesDecoder {
    type Value = TimeDelta;

    fn decode(&self, input: &f64) -> CodecResult<TimeDelta> {
        if input.is_finite() {
            Ok(from_minutes(*input))
        } else {
            Err(CodecError::NonFinite {
                input: input.to_string(),
            })
        }
    }
}

fn format_minutes(minutes: f64) -> String {
    minutes.to_string()
}

pub type MinutesStringEncoder = EncodeMap<MinutesEncoder, fn(f64) -> String>;
pub type MinutesStringDecoder = DecodeMap<StringToNumberDecoder<f64>, fn(f64) -> TimeDelta>;

pub const fn minutes_string_encoder() -> MinutesStringEncoder {
    encode_map(MinutesEncoder, format_minutes as fn(f64) -> String)
}

pub const fn minutes_string_decoder() -> MinutesStringDecoder {
    decode_map(string_to_number_decoder(), from_minutes as fn(f64) -> TimeDelta)
}

pub const fn encoder() -> RangeEncoder<MinutesStringEncoder> {
    range_encoder(minutes_string_encoder())
}

pub const fn decoder() -> RangeDecoder<MinutesStringDecoder> {
    range_decoder(minutes_string_decoder())
}

/// Every duration: from zero, no upper bound.
pub fn any() -> DurationRange {
    DurationRange::unbounded(TimeDelta::zero())
}

pub fn encode(range: &DurationRange) -> String {
    encoder().encode(range)
}

pub fn decode(input: &str) -> CodecResult<DurationRange> {
    decoder().decode(input)
}

pub fn to_slider(range: &DurationRange, maximum: TimeDelta) -> [f64; 2] {
    range.to_number_array(&maximum, &MinutesEncoder)
}

/// Passes through minutes that are zero or more.
///
/// A negative bound would render as `"-5-30"`, which the text decoder cannot
/// read back, so user-supplied bounds go through here first.
pub fn reject_negative(minutes: f64) -> CodecResult<f64> {
    if minutes < 0.0 {
        Err(CodecError::Negative {
            input: minutes.to_string(),
        })
    } else {
        Ok(minutes)
    }
}

/// Slider positions back to a range; positions below zero are rejected.
pub fn from_slider(values: [f64; 2], maximum: TimeDelta) -> CodecResult<DurationRange> {
    for position in values {
        reject_negative(position)?;
    }
    Range::from_number_array(&values, &MinutesDecoder, at_or_above(&maximum, MinutesEncoder))
}
