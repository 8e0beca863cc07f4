// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod codec;
pub mod config;
pub mod filters;
pub mod range;

pub use codec::{Codec, Decoder, Encoder};
pub use config::SliderConfig;
pub use filters::{SortKey, VideoFilters, VideoMeta};
pub use range::{DurationRange, Range, SizeRange};
