// crates/shared-kernel/src/fp/mod.rs
//! Small functional containers used by the codec layer.
//!
//! Presence and absence are modelled with the standard [`Option`]; the
//! [`OptionExt`] trait supplies the fold-style eliminators that the range
//! codecs and the filter layer lean on. [`Either`] is the explicit
//! success/failure sum type, convertible to and from [`Result`].

pub mod either;
pub mod option;

pub use either::Either;
pub use option::{OptionExt, from_nullable};
