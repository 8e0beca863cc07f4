// crates/domain/src/codec.rs
//! Paired transformations between domain values and their wire form.
//!
//! An [`Encoder`] is total: every domain value has a wire representation.
//! A [`Decoder`] is partial: wire input that does not describe a legitimate
//! domain value yields a [`CodecError`]. For values produced by application
//! logic, `decode(encode(a))` reproduces an equivalent `a`.

pub mod combinators;
pub mod primitives;

pub use combinators::{DecodeMap, EncodeMap, decode_map, encode_map};
pub use primitives::{
    Identity, SimpleStringEncoder, StringToNumberDecoder, identity_codec, simple_string_encoder,
    string_to_number_decoder,
};

use vidshelf_shared_kernel::{CodecError, CodecResult, Either, OptionExt};

pub trait Encoder<A: ?Sized> {
    type Wire;

    fn encode(&self, value: &A) -> Self::Wire;
}

pub trait Decoder<W: ?Sized> {
    type Value;

    fn decode(&self, input: &W) -> CodecResult<Self::Value>;

    /// Same outcome as [`Decoder::decode`], as an [`Either`].
    fn decode_either(&self, input: &W) -> Either<CodecError, Self::Value> {
        self.decode(input).into()
    }

    /// Decodes, discarding any failure in favour of `fallback`.
    ///
    /// This is the boundary where malformed query input turns into a default.
    fn decode_or_else<F>(&self, input: &W, fallback: F) -> Self::Value
    where
        Self: Sized,
        F: FnOnce() -> Self::Value,
    {
        self.decode_either(input).to_option().get_or_else(fallback)
    }
}

impl<A: ?Sized, E: Encoder<A> + ?Sized> Encoder<A> for &E {
    type Wire = E::Wire;

    #[inline]
    fn encode(&self, value: &A) -> Self::Wire {
        (**self).encode(value)
    }
}

impl<W: ?Sized, D: Decoder<W> + ?Sized> Decoder<W> for &D {
    type Value = D::Value;

    #[inline]
    fn decode(&self, input: &W) -> CodecResult<Self::Value> {
        (**self).decode(input)
    }
}

/// An encoder and a decoder travelling together.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec<E, D> {
    encoder: E,
    decoder: D,
}

impl<E, D> Codec<E, D> {
    pub const fn new(encoder: E, decoder: D) -> Self {
        Self { encoder, decoder }
    }

    pub const fn encoder(&self) -> &E {
        &self.encoder
    }

    pub const fn decoder(&self) -> &D {
        &self.decoder
    }
}

impl<A: ?Sized, E: Encoder<A>, D> Encoder<A> for Codec<E, D> {
    type Wire = E::Wire;

    fn encode(&self, value: &A) -> Self::Wire {
        self.encoder.encode(value)
    }
}

impl<W: ?Sized, E, D: Decoder<W>> Decoder<W> for Codec<E, D> {
    type Value = D::Value;

    fn decode(&self, input: &W) -> CodecResult<Self::Value> {
        self.decoder.decode(input)
    }
}
