// crates/domain/src/range/text.rs
//! `"<min>-<max>"` query-string form, with an empty `<max>` for open ranges.
//!
//! The hyphen is not escaped, so element encoders must never emit one.
//! Negative values would be misread: `"-5-10"` splits at the leading sign.

use vidshelf_shared_kernel::CodecResult;

use super::Range;
use crate::codec::{Decoder, Encoder};

pub const SEPARATOR: char = '-';

#[derive(Debug, Clone, Copy, Default)]
pub struct RangeEncoder<E> {
    element: E,
}

impl<A, E> Encoder<Range<A>> for RangeEncoder<E>
where
    E: Encoder<A, Wire = String>,
{
    type Wire = String;

    fn encode(&self, range: &Range<A>) -> String {
        let mut out = self.element.encode(&range.min);
        out.push(SEPARATOR);
        if let Some(max) = &range.max {
            out.push_str(&self.element.encode(max));
        }
        out
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RangeDecoder<D> {
    element: D,
}

impl<D> Decoder<str> for RangeDecoder<D>
where
    D: Decoder<str>,
{
    type Value = Range<D::Value>;

    /// Splits on the first hyphen. A missing hyphen or an empty right-hand
    /// side both mean an open range; `min` is decoded first.
    fn decode(&self, input: &str) -> CodecResult<Self::Value> {
        let (min_text, max_text) = input.split_once(SEPARATOR).unwrap_or((input, ""));
        let min = self.element.decode(min_text)?;
        if max_text.is_empty() {
            return Ok(Range::unbounded(min));
        }
        let max = self.element.decode(max_text)?;
        Ok(Range::bounded(min, max))
    }
}

pub const fn range_encoder<E>(element: E) -> RangeEncoder<E> {
    RangeEncoder { element }
}

pub const fn range_decoder<D>(element: D) -> RangeDecoder<D> {
    RangeDecoder { element }
}
