// crates/domain/src/codec/primitives.rs
use std::fmt::{self, Display};
use std::marker::PhantomData;

use num_traits::{Num, ToPrimitive};
use vidshelf_shared_kernel::{CodecError, CodecResult};

use super::{Decoder, Encoder};

/// Encodes through the value's `Display` form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleStringEncoder;

impl<A: Display + ?Sized> Encoder<A> for SimpleStringEncoder {
    type Wire = String;

    fn encode(&self, value: &A) -> String {
        value.to_string()
    }
}

pub const fn simple_string_encoder() -> SimpleStringEncoder {
    SimpleStringEncoder
}

/// Parses base-10 numbers, rejecting anything that is not one.
///
/// Surrounding whitespace is ignored. Float targets additionally reject
/// `inf` and `NaN` spellings so only finite numbers come out.
pub struct StringToNumberDecoder<N> {
    _target: PhantomData<fn() -> N>,
}

impl<N> StringToNumberDecoder<N> {
    pub const fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<N> Default for StringToNumberDecoder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Clone for StringToNumberDecoder<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for StringToNumberDecoder<N> {}

impl<N> fmt::Debug for StringToNumberDecoder<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringToNumberDecoder<{}>", std::any::type_name::<N>())
    }
}

impl<N> Decoder<str> for StringToNumberDecoder<N>
where
    N: Num + ToPrimitive,
    N::FromStrRadixErr: Display,
{
    type Value = N;

    fn decode(&self, input: &str) -> CodecResult<N> {
        let trimmed = input.trim();
        let value = N::from_str_radix(trimmed, 10)
            .map_err(|err| CodecError::not_a_number(input, err))?;
        if value.to_f64().is_some_and(f64::is_finite) {
            Ok(value)
        } else {
            Err(CodecError::NonFinite {
                input: input.to_string(),
            })
        }
    }
}

pub const fn string_to_number_decoder<N>() -> StringToNumberDecoder<N> {
    StringToNumberDecoder::new()
}

/// Codec whose wire type is the domain type itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<A: Clone> Encoder<A> for Identity {
    type Wire = A;

    fn encode(&self, value: &A) -> A {
        value.clone()
    }
}

impl<A: Clone> Decoder<A> for Identity {
    type Value = A;

    fn decode(&self, input: &A) -> CodecResult<A> {
        Ok(input.clone())
    }
}

pub const fn identity_codec() -> Identity {
    Identity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_encoder_uses_display() {
        assert_eq!(simple_string_encoder().encode(&30u64), "30");
        assert_eq!(simple_string_encoder().encode(&1.5f64), "1.5");
        assert_eq!(simple_string_encoder().encode(&30.0f64), "30");
    }

    #[test]
    fn number_decoder_rejects_text() {
        let err = string_to_number_decoder::<u64>()
            .decode("not-a-number")
            .unwrap_err();
        assert!(matches!(err, CodecError::NotANumber { ref input, .. } if input == "not-a-number"));
        assert!(string_to_number_decoder::<u64>().decode("").is_err());
        assert!(string_to_number_decoder::<u64>().decode("-3").is_err());
    }

    #[test]
    fn number_decoder_trims_and_parses() {
        assert_eq!(string_to_number_decoder::<u64>().decode(" 15 "), Ok(15));
        assert_eq!(string_to_number_decoder::<f64>().decode("2.5"), Ok(2.5));
        assert_eq!(string_to_number_decoder::<i64>().decode("-4"), Ok(-4));
    }

    #[test]
    fn number_decoder_rejects_non_finite_floats() {
        for input in ["inf", "NaN"] {
            assert!(string_to_number_decoder::<f64>().decode(input).is_err(), "{input} accepted");
        }
    }

    #[test]
    fn identity_round_trips() {
        let codec = identity_codec();
        let wire: u32 = codec.encode(&9u32);
        assert_eq!(Decoder::<u32>::decode(&codec, &wire), Ok(9));
    }
}
