// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    CodecError, CodecResult, ConfigError, ConfigResult, ErrorContext, Result, VidshelfError,
};

pub mod error;
pub mod fp;

pub use fp::{Either, OptionExt, from_nullable};
