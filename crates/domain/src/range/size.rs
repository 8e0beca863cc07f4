// crates/domain/src/range/size.rs
use vidshelf_shared_kernel::CodecResult;

use super::{Range, RangeDecoder, RangeEncoder, at_or_above, range_decoder, range_encoder};
use crate::codec::{
    Decoder, Encoder, Identity, SimpleStringEncoder, StringToNumberDecoder, identity_codec,
    simple_string_encoder, string_to_number_decoder,
};

/// File size range in whole slider units.
pub type SizeRange = Range<u64>;

/// Every size: from zero, no upper bound.
pub const fn any() -> SizeRange {
    SizeRange::unbounded(0)
}

pub const fn encoder() -> RangeEncoder<SimpleStringEncoder> {
    range_encoder(simple_string_encoder())
}

pub const fn decoder() -> RangeDecoder<StringToNumberDecoder<u64>> {
    range_decoder(string_to_number_decoder())
}

pub fn encode(range: &SizeRange) -> String {
    encoder().encode(range)
}

pub fn decode(input: &str) -> CodecResult<SizeRange> {
    decoder().decode(input)
}

pub fn to_slider(range: &SizeRange, maximum: u64) -> [u64; 2] {
    range.to_number_array(&maximum, &identity_codec())
}

pub fn from_slider(values: [u64; 2], maximum: u64) -> CodecResult<SizeRange> {
    let codec: Identity = identity_codec();
    Range::from_number_array(&values, &codec, at_or_above(&maximum, codec))
}
