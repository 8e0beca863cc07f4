// crates/shared-kernel/src/fp/either.rs
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Success (`Right`) or failure (`Left`) of a computation.
///
/// Follows the usual convention: `Left` carries the error, `Right` the value.
/// `map` and `flat_map` only ever touch `Right`; the first `Left` in a chain
/// short-circuits everything after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn map<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    pub fn map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    pub fn flat_map<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => f(r),
        }
    }

    pub fn fold<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    /// Drops the failure detail.
    pub fn to_option(self) -> Option<R> {
        self.fold(|_| None, Some)
    }

    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    pub fn into_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }
}

impl<R> Either<CodecError, R> {
    /// Runs `f`, turning both an `Err` return and a panic into `Left`.
    ///
    /// Never unwinds into the caller.
    pub fn from_try<E, F>(f: F) -> Self
    where
        E: Into<CodecError>,
        F: FnOnce() -> Result<R, E>,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(Ok(value)) => Self::Right(value),
            Ok(Err(err)) => Self::Left(err.into()),
            Err(payload) => Self::Left(CodecError::Panicked {
                message: panic_message(payload.as_ref()),
            }),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Self::Right(r),
            Err(l) => Self::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}
