// crates/shared-kernel/src/fp/option.rs

/// Eliminators for [`Option`] that the standard library names differently or lacks.
pub trait OptionExt<T> {
    /// Collapses both cases into one value. Every other operation can be
    /// expressed through this one.
    fn fold<R, N, P>(self, on_absent: N, on_present: P) -> R
    where
        N: FnOnce() -> R,
        P: FnOnce(T) -> R;

    /// Unwraps the value, invoking `fallback` only when absent.
    fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T;

    /// Chains a lookup that may itself come up empty.
    fn flat_map<R, F>(self, f: F) -> Option<R>
    where
        F: FnOnce(T) -> Option<R>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn fold<R, N, P>(self, on_absent: N, on_present: P) -> R
    where
        N: FnOnce() -> R,
        P: FnOnce(T) -> R,
    {
        match self {
            Some(value) => on_present(value),
            None => on_absent(),
        }
    }

    #[inline]
    fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(fallback, |value| value)
    }

    #[inline]
    fn flat_map<R, F>(self, f: F) -> Option<R>
    where
        F: FnOnce(T) -> Option<R>,
    {
        self.fold(|| None, f)
    }
}

/// Lifts a possibly-missing value into an [`Option`].
///
/// Accepts either a bare value (always present) or an `Option` (passed through),
/// which mirrors how nullable values arrive from loosely typed sources.
#[inline]
pub fn from_nullable<T>(value: impl Into<Option<T>>) -> Option<T> {
    value.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_picks_branch() {
        assert_eq!(Some(3).fold(|| 0, |v| v * 2), 6);
        assert_eq!(None::<i32>.fold(|| 0, |v| v * 2), 0);
    }

    #[test]
    fn get_or_else_is_lazy() {
        let mut called = false;
        let value = Some(1).get_or_else(|| {
            called = true;
            2
        });
        assert_eq!(value, 1);
        assert!(!called);
        assert_eq!(None.get_or_else(|| 2), 2);
    }

    #[test]
    fn flat_map_flattens() {
        let parse = |s: &str| s.parse::<u32>().ok();
        assert_eq!(Some("12").flat_map(parse), Some(12));
        assert_eq!(Some("x").flat_map(parse), None);
        assert_eq!(None::<&str>.flat_map(parse), None);
    }

    #[test]
    fn from_nullable_accepts_values_and_options() {
        let present: Option<u8> = from_nullable(7);
        let absent: Option<u8> = from_nullable(None::<u8>);
        assert_eq!(present, Some(7));
        assert_eq!(absent, None);
    }
}
