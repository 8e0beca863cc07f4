// crates/domain/src/range.rs
//! Inclusive ranges with an optionally open upper end.
//!
//! An absent `max` means "no upper bound". Slider widgets cannot show an
//! infinite end, so the numeric form writes an absent `max` as a caller-chosen
//! `maximum`, and reading it back collapses any value the caller's `is_max`
//! predicate accepts into an absent `max` again. Both sides must agree on that
//! predicate; [`at_or_above`] builds the canonical one.

pub mod duration;
pub mod size;
pub mod text;

pub use duration::DurationRange;
pub use size::SizeRange;
pub use text::{RangeDecoder, RangeEncoder, range_decoder, range_encoder};

use serde::{Deserialize, Serialize};
use vidshelf_shared_kernel::CodecResult;

use crate::codec::{Decoder, Encoder};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range<A> {
    pub min: A,
    pub max: Option<A>,
}

impl<A> Range<A> {
    pub const fn new(min: A, max: Option<A>) -> Self {
        Self { min, max }
    }

    pub const fn bounded(min: A, max: A) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn unbounded(min: A) -> Self {
        Self { min, max: None }
    }

    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// Inclusive on both ends; an absent `max` admits everything above `min`.
    #[inline]
    pub fn contains(&self, value: &A) -> bool
    where
        A: PartialOrd,
    {
        *value >= self.min && self.max.as_ref().is_none_or(|max| value <= max)
    }

    pub fn map<B, F>(self, f: F) -> Range<B>
    where
        F: Fn(A) -> B,
    {
        Range {
            min: f(self.min),
            max: self.max.map(f),
        }
    }

    /// Slider form: `[min, max]`, with an absent `max` written as `maximum`.
    pub fn to_number_array<E>(&self, maximum: &A, encoder: &E) -> [E::Wire; 2]
    where
        E: Encoder<A>,
    {
        let upper = self.max.as_ref().unwrap_or(maximum);
        [encoder.encode(&self.min), encoder.encode(upper)]
    }

    /// Reads the slider form back.
    ///
    /// Both ends are decoded, `min` first; the first failure is returned. A
    /// decoded `max` for which `is_max` holds becomes an absent `max`.
    pub fn from_number_array<W, D, P>(input: &[W; 2], decoder: &D, is_max: P) -> CodecResult<Self>
    where
        D: Decoder<W, Value = A>,
        P: Fn(&A) -> bool,
    {
        let min = decoder.decode(&input[0])?;
        let max = decoder.decode(&input[1])?;
        Ok(Self {
            min,
            max: Some(max).filter(|v| !is_max(v)),
        })
    }
}

/// Predicate treating any value whose encoding reaches `maximum`'s as the sentinel.
pub fn at_or_above<A, E>(maximum: &A, encoder: E) -> impl Fn(&A) -> bool + use<A, E>
where
    A: ?Sized,
    E: Encoder<A>,
    E::Wire: PartialOrd,
{
    let ceiling = encoder.encode(maximum);
    move |value| encoder.encode(value) >= ceiling
}
