//! Panic assertions for tests.

/// Asserts that the given block panics, swallowing the unwind.
///
/// The block is wrapped in [`AssertUnwindSafe`](std::panic::AssertUnwindSafe), so it may
/// capture whatever the surrounding test holds.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "The block should have panicked");
    };
    ($run:block, $msg:literal) => {
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(caught.is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
