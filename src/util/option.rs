use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts like [`Option::unwrap`] but with [`unreachable!`] in the none branch for dev builds
    /// and [`unreachable_unchecked`](hint::unreachable_unchecked) for release builds.
    ///
    /// This function can panic if used incorrectly, but carries no panic annotations: invoking it
    /// is a statement that the [`None`] branch cannot occur. The same applies to safety docs.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: The caller asserts that None is impossible when invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
