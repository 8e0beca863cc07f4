// crates/domain/src/codec/combinators.rs
use vidshelf_shared_kernel::CodecResult;

use super::{Decoder, Encoder};

/// Encoder whose output is post-processed by a pure function.
#[derive(Debug, Clone, Copy)]
pub struct EncodeMap<E, F> {
    inner: E,
    f: F,
}

impl<A, E, F, C> Encoder<A> for EncodeMap<E, F>
where
    A: ?Sized,
    E: Encoder<A>,
    F: Fn(E::Wire) -> C,
{
    type Wire = C;

    fn encode(&self, value: &A) -> C {
        (self.f)(self.inner.encode(value))
    }
}

/// Decoder whose successful result is post-processed by a pure function.
#[derive(Debug, Clone, Copy)]
pub struct DecodeMap<D, F> {
    inner: D,
    f: F,
}

impl<W, D, F, C> Decoder<W> for DecodeMap<D, F>
where
    W: ?Sized,
    D: Decoder<W>,
    F: Fn(D::Value) -> C,
{
    type Value = C;

    fn decode(&self, input: &W) -> CodecResult<C> {
        self.inner.decode(input).map(&self.f)
    }
}

pub const fn encode_map<E, F>(encoder: E, f: F) -> EncodeMap<E, F> {
    EncodeMap { inner: encoder, f }
}

pub const fn decode_map<D, F>(decoder: D, f: F) -> DecodeMap<D, F> {
    DecodeMap { inner: decoder, f }
}
